//! High-level SDK for Loam.
//!
//! [`Cms`] wires the file store, the content reconciler, and the record
//! persistence boundary into the record lifecycle the dashboard drives:
//! create, update (with the unchanged-content no-op), and destroy, with
//! persistence validation failures recovered into per-field UI errors
//! instead of propagating.
//!
//! The routing layer parses the inbound request into a [`Submission`],
//! loads the [`Section`](loam_types::Section) fresh from its owning
//! collaborator, and calls one operation per request.

pub mod cms;
pub mod error;
pub mod submission;

pub use cms::{Cms, SaveOutcome};
pub use error::{SdkError, SdkResult};
pub use submission::Submission;
