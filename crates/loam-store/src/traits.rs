use std::io::Read;

use crate::error::StoreResult;

/// Content-addressable file store.
///
/// All implementations must satisfy these invariants:
/// - The returned filename refers to a fully written file; callers never
///   observe a partial write, and no name is returned on failure.
/// - Identical bytes produce the identical digest component of the name,
///   regardless of the original name's casing or spacing.
/// - Storing byte-identical content twice is idempotent.
/// - All I/O errors are propagated, never silently ignored.
pub trait FileStore: Send + Sync {
    /// Persist a byte stream under its digest-derived name and return that
    /// name.
    ///
    /// The source is consumed to EOF. The name is derived from the content
    /// digest and the normalized original name; see
    /// [`derive_filename`](crate::name::derive_filename).
    fn store(&self, source: &mut dyn Read, original_name: &str) -> StoreResult<String>;

    /// Read a stored file's bytes by its derived filename.
    ///
    /// Returns `Ok(None)` if no file with that name exists.
    fn read(&self, filename: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Check whether a file with the given derived name exists.
    fn exists(&self, filename: &str) -> StoreResult<bool>;
}
