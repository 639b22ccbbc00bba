use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::digest::ContentDigest;
use crate::error::{StoreError, StoreResult};
use crate::name::derive_filename;
use crate::traits::FileStore;

/// Filesystem-backed file store.
///
/// Files are stored flat under the configured uploads root. Writes go
/// through a temp file in the same directory and are persisted to the final
/// digest-derived name only once fully flushed, so a concurrently failing or
/// cancelled store never leaves a partial file at a referenced path.
///
/// The uploads root is shared across concurrent requests. Two concurrent
/// writes of byte-identical content target the same derived name and the
/// final file state is identical regardless of write order; distinct content
/// targets distinct names. No locking is required.
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    /// Create a store rooted at the given uploads directory.
    ///
    /// The directory is created lazily on first store.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The uploads root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path a derived filename resolves to.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }
}

impl FileStore for DiskFileStore {
    fn store(&self, source: &mut dyn Read, original_name: &str) -> StoreResult<String> {
        // Race-safe, idempotent: "already exists" is success.
        fs::create_dir_all(&self.root)?;

        // Hash while copying so the stream is read exactly once.
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        let mut hasher = blake3::Hasher::new();
        let mut buf = [0u8; 8192];
        let mut total = 0u64;
        loop {
            let n = source.read(&mut buf)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            tmp.write_all(&buf[..n])?;
            total += n as u64;
        }
        tmp.flush()?;

        let digest = ContentDigest::from_hash(*hasher.finalize().as_bytes());
        let filename = derive_filename(original_name, &digest);
        let dest = self.root.join(&filename);

        // No existence check: the name encodes the content, so persisting
        // over an existing file replaces identical bytes with identical
        // bytes.
        tmp.persist(&dest).map_err(|e| StoreError::Io(e.error))?;

        debug!(%filename, bytes = total, "stored upload");
        Ok(filename)
    }

    fn read(&self, filename: &str) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.root.join(filename)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn exists(&self, filename: &str) -> StoreResult<bool> {
        match fs::metadata(self.root.join(filename)) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

impl std::fmt::Debug for DiskFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskFileStore")
            .field("root", &self.root)
            .finish()
    }
}
