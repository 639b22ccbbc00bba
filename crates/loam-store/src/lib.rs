//! Content-addressable file storage for Loam uploads.
//!
//! Uploaded files are persisted flat under a configured uploads root, named
//! by their content: `<stem>-<digest><ext>`, where `stem` is the normalized
//! original file stem and `digest` is the BLAKE3 hash of the bytes. A
//! record's content map references stored files by this name only; the store
//! owns the bytes.
//!
//! # Storage Backends
//!
//! All backends implement the [`FileStore`] trait:
//!
//! - [`DiskFileStore`] — filesystem-backed store for production use
//! - [`InMemoryFileStore`] — `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Identical bytes always produce the identical digest component,
//!    regardless of the original name's casing or spacing.
//! 2. A returned filename always refers to a fully written file; callers
//!    never observe a partial write.
//! 3. Storing byte-identical content twice is idempotent.
//! 4. Root directory creation is race-safe: concurrent creation must not
//!    fail the operation.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod digest;
pub mod disk;
pub mod error;
pub mod memory;
pub mod name;
pub mod traits;

pub use digest::ContentDigest;
pub use disk::DiskFileStore;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryFileStore;
pub use name::derive_filename;
pub use traits::FileStore;
