use std::collections::HashMap;
use std::io::Read;
use std::sync::RwLock;

use crate::digest::ContentDigest;
use crate::error::StoreResult;
use crate::name::derive_filename;
use crate::traits::FileStore;

/// In-memory, HashMap-based file store.
///
/// Intended for tests and embedding. Files are held in memory behind a
/// `RwLock`, keyed by their derived filename.
pub struct InMemoryFileStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryFileStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Number of files currently stored.
    pub fn len(&self) -> usize {
        self.files.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.files.read().expect("lock poisoned").is_empty()
    }

    /// Remove all files from the store.
    pub fn clear(&self) {
        self.files.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for InMemoryFileStore {
    fn store(&self, source: &mut dyn Read, original_name: &str) -> StoreResult<String> {
        let mut data = Vec::new();
        source.read_to_end(&mut data)?;

        let digest = ContentDigest::from_bytes(&data);
        let filename = derive_filename(original_name, &digest);

        let mut map = self.files.write().expect("lock poisoned");
        // Idempotent: the derived name already encodes the content.
        map.entry(filename.clone()).or_insert(data);
        Ok(filename)
    }

    fn read(&self, filename: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.get(filename).cloned())
    }

    fn exists(&self, filename: &str) -> StoreResult<bool> {
        let map = self.files.read().expect("lock poisoned");
        Ok(map.contains_key(filename))
    }
}

impl std::fmt::Debug for InMemoryFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFileStore")
            .field("file_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_read() {
        let store = InMemoryFileStore::new();
        let filename = store.store(&mut &b"hello"[..], "greeting.txt").unwrap();
        assert_eq!(store.read(&filename).unwrap().unwrap(), b"hello");
    }

    #[test]
    fn same_content_same_name() {
        let store = InMemoryFileStore::new();
        let a = store.store(&mut &b"dup"[..], "a.txt").unwrap();
        let b = store.store(&mut &b"dup"[..], "a.txt").unwrap();
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_content_different_names() {
        let store = InMemoryFileStore::new();
        let a = store.store(&mut &b"aaa"[..], "x.txt").unwrap();
        let b = store.store(&mut &b"bbb"[..], "x.txt").unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn read_missing_returns_none() {
        let store = InMemoryFileStore::new();
        assert!(store.read("missing").unwrap().is_none());
    }

    #[test]
    fn exists_and_clear() {
        let store = InMemoryFileStore::new();
        let filename = store.store(&mut &b"x"[..], "x.bin").unwrap();
        assert!(store.exists(&filename).unwrap());

        store.clear();
        assert!(store.is_empty());
        assert!(!store.exists(&filename).unwrap());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryFileStore::new();
        store.store(&mut &b"x"[..], "x.bin").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryFileStore"));
        assert!(debug.contains("file_count"));
    }
}
