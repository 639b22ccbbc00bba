//! Content reconciliation and validation error mapping.
//!
//! This crate is the pure transformation layer of Loam: it turns an
//! arbitrary, partially-trusted submission into a content map constrained by
//! a section's field set, and it turns persistence-layer validation failures
//! into per-field UI errors.
//!
//! # Key Operations
//!
//! - [`reconcile`] — three-phase derivation of a final content map from
//!   submitted values, uploaded files, and deletion directives
//! - [`map_errors`] — field-keyed error map from a list of
//!   [`ValidationIssue`](loam_types::ValidationIssue)s
//! - [`parse_with_fallback`] — structured-or-raw message parsing that never
//!   fails

pub mod error;
pub mod mapper;
pub mod reconcile;
pub mod upload;

pub use error::{ContentError, ContentResult};
pub use mapper::{map_errors, parse_with_fallback, ParsedMessage};
pub use reconcile::reconcile;
pub use upload::FileUpload;
