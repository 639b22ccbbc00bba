//! Foundation types for Loam.
//!
//! This crate provides the schema, record, and validation types used
//! throughout the Loam content engine. Every other Loam crate depends on
//! `loam-types`.
//!
//! # Key Types
//!
//! - [`Section`] — A runtime-defined content category with an ordered set of
//!   named fields and cardinality/mode options
//! - [`FieldSpec`] / [`FieldType`] — Per-field schema: declared type and
//!   constraints
//! - [`Record`] — One instance of content belonging to a section
//! - [`ContentMap`] — The field-name → value mapping stored on a record
//! - [`SectionId`] / [`RecordId`] — UUID v7 identifiers
//! - [`ValidationIssue`] — A field-path-scoped failure reported by the
//!   persistence layer

pub mod error;
pub mod field;
pub mod id;
pub mod issue;
pub mod record;
pub mod section;

pub use error::TypeError;
pub use field::{FieldSpec, FieldType};
pub use id::{RecordId, SectionId};
pub use issue::ValidationIssue;
pub use record::{ContentMap, Record};
pub use section::{Section, SectionOptions};
