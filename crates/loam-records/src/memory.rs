use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::debug;

use loam_types::{ContentMap, Record, RecordId, SectionId, ValidationIssue};

use crate::error::{RecordError, RecordResult};
use crate::traits::RecordStore;

/// Content validator injected into the in-memory store.
///
/// Returns the issues the content would fail with; an empty list means the
/// content is valid. Lets tests and embedders reproduce a real constraint
/// layer.
pub type ContentValidator = Box<dyn Fn(&ContentMap) -> Vec<ValidationIssue> + Send + Sync>;

/// In-memory record store for tests, local demos, and embedding.
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<RecordId, Record>>,
    validator: Option<ContentValidator>,
    create_calls: AtomicU64,
    update_calls: AtomicU64,
}

impl InMemoryRecordStore {
    /// Create a store that accepts all content.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            validator: None,
            create_calls: AtomicU64::new(0),
            update_calls: AtomicU64::new(0),
        }
    }

    /// Create a store that validates content with the given function.
    pub fn with_validator(
        validator: impl Fn(&ContentMap) -> Vec<ValidationIssue> + Send + Sync + 'static,
    ) -> Self {
        Self {
            validator: Some(Box::new(validator)),
            ..Self::new()
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Number of `create` invocations (attempts, including rejected ones).
    pub fn create_calls(&self) -> u64 {
        self.create_calls.load(Ordering::Relaxed)
    }

    /// Number of `update` invocations (attempts, including rejected ones).
    ///
    /// Lets callers assert the no-op-update contract: an unchanged
    /// submission must never reach the store.
    pub fn update_calls(&self) -> u64 {
        self.update_calls.load(Ordering::Relaxed)
    }

    fn validate(&self, content: &ContentMap) -> RecordResult<()> {
        if let Some(validator) = &self.validator {
            let issues = validator(content);
            if !issues.is_empty() {
                return Err(RecordError::Validation(issues));
            }
        }
        Ok(())
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn create(&self, section_id: SectionId, content: ContentMap) -> RecordResult<Record> {
        self.create_calls.fetch_add(1, Ordering::Relaxed);
        self.validate(&content)?;

        let record = Record::new(section_id, content);
        let mut map = self.records.write().expect("lock poisoned");
        map.insert(record.id, record.clone());
        debug!(record = %record.id, section = %section_id, "created record");
        Ok(record)
    }

    fn update(&self, id: RecordId, content: ContentMap) -> RecordResult<Record> {
        self.update_calls.fetch_add(1, Ordering::Relaxed);
        self.validate(&content)?;

        let mut map = self.records.write().expect("lock poisoned");
        let record = map.get_mut(&id).ok_or(RecordError::NotFound(id))?;
        record.content = content;
        debug!(record = %id, "updated record");
        Ok(record.clone())
    }

    fn destroy(&self, id: RecordId) -> RecordResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        let existed = map.remove(&id).is_some();
        if existed {
            debug!(record = %id, "destroyed record");
        }
        Ok(existed)
    }

    fn find(&self, id: RecordId) -> RecordResult<Option<Record>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(&id).cloned())
    }

    fn list(&self, section_id: SectionId) -> RecordResult<Vec<Record>> {
        let map = self.records.read().expect("lock poisoned");
        let mut records: Vec<Record> = map
            .values()
            .filter(|r| r.section_id == section_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &self.len())
            .field("validating", &self.validator.is_some())
            .finish()
    }
}
