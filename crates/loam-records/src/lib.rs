//! Record persistence boundary for Loam.
//!
//! Records are persisted by an external collaborator (a database-backed
//! model layer in production). This crate defines the contract that
//! collaborator must satisfy — including the distinguishable validation
//! failure kind the dashboard recovers from — and an in-memory
//! implementation for tests and embedding.
//!
//! # Key Types
//!
//! - [`RecordStore`] — create/update/destroy/find boundary
//! - [`RecordError`] — failure taxonomy; [`RecordError::Validation`] carries
//!   per-field issues and is recovered locally by callers
//! - [`InMemoryRecordStore`] — `HashMap`-based store with pluggable content
//!   validation

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{RecordError, RecordResult};
pub use memory::InMemoryRecordStore;
pub use traits::RecordStore;
