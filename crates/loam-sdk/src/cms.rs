use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use loam_content::{map_errors, reconcile};
use loam_records::{RecordError, RecordStore};
use loam_store::FileStore;
use loam_types::{Record, RecordId, Section, SectionId};

use crate::error::SdkResult;
use crate::submission::Submission;

/// Outcome of a create or update operation.
#[derive(Clone, Debug)]
pub enum SaveOutcome {
    /// The record was persisted.
    Saved(Record),
    /// The reconciled content equals the record's current content; nothing
    /// was written.
    Unchanged,
    /// The persistence layer rejected the content; per-field errors for
    /// re-rendering the form.
    Invalid(BTreeMap<String, Value>),
}

impl SaveOutcome {
    /// Returns `true` if the record was persisted.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    /// The persisted record, if any.
    pub fn record(&self) -> Option<&Record> {
        match self {
            Self::Saved(record) => Some(record),
            _ => None,
        }
    }
}

/// The Loam engine context: file store + record store, constructed once and
/// shared by reference across requests.
///
/// Sections are not held here — the routing layer loads them fresh per
/// request from the owning template/configuration collaborator and passes
/// them into each operation.
pub struct Cms {
    files: Arc<dyn FileStore>,
    records: Arc<dyn RecordStore>,
}

impl Cms {
    /// Wire a context from its collaborators.
    pub fn new(files: Arc<dyn FileStore>, records: Arc<dyn RecordStore>) -> Self {
        Self { files, records }
    }

    /// The file store.
    pub fn files(&self) -> &dyn FileStore {
        &*self.files
    }

    /// The record store.
    pub fn records(&self) -> &dyn RecordStore {
        &*self.records
    }

    /// Create a record in a section from a submission.
    ///
    /// A persistence validation failure is recovered into
    /// [`SaveOutcome::Invalid`]; any other failure propagates.
    pub fn create_record(&self, section: &Section, submission: Submission) -> SdkResult<SaveOutcome> {
        let content = reconcile(
            &submission.content,
            submission.uploads,
            &submission.destroys,
            &section.allowed_fields(),
            &*self.files,
        )?;

        match self.records.create(section.id, content) {
            Ok(record) => {
                info!(record = %record.id, section = %section.name, "created record");
                Ok(SaveOutcome::Saved(record))
            }
            Err(RecordError::Validation(issues)) => {
                debug!(section = %section.name, issues = issues.len(), "create failed validation");
                Ok(SaveOutcome::Invalid(map_errors(&issues)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Update a record from a submission, skipping the write entirely when
    /// the reconciled content equals the current content.
    pub fn update_record(
        &self,
        section: &Section,
        record: &Record,
        submission: Submission,
    ) -> SdkResult<SaveOutcome> {
        let content = reconcile(
            &submission.content,
            submission.uploads,
            &submission.destroys,
            &section.allowed_fields(),
            &*self.files,
        )?;

        if content == record.content {
            debug!(record = %record.id, "content unchanged, skipping update");
            return Ok(SaveOutcome::Unchanged);
        }

        match self.records.update(record.id, content) {
            Ok(updated) => {
                info!(record = %updated.id, section = %section.name, "updated record");
                Ok(SaveOutcome::Saved(updated))
            }
            Err(RecordError::Validation(issues)) => {
                debug!(record = %record.id, issues = issues.len(), "update failed validation");
                Ok(SaveOutcome::Invalid(map_errors(&issues)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Destroy a record. Returns `true` if it existed. Stored files it
    /// referenced are left in place.
    pub fn destroy_record(&self, id: RecordId) -> SdkResult<bool> {
        let existed = self.records.destroy(id)?;
        if existed {
            info!(record = %id, "destroyed record");
        }
        Ok(existed)
    }

    /// Look up a record.
    pub fn find_record(&self, id: RecordId) -> SdkResult<Option<Record>> {
        Ok(self.records.find(id)?)
    }

    /// All records of a section.
    pub fn list_records(&self, section_id: SectionId) -> SdkResult<Vec<Record>> {
        Ok(self.records.list(section_id)?)
    }
}
