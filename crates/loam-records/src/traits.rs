use loam_types::{ContentMap, Record, RecordId, SectionId};

use crate::error::RecordResult;

/// Record persistence boundary.
///
/// All implementations must satisfy these invariants:
/// - `create` and `update` reject invalid content with
///   [`RecordError::Validation`](crate::RecordError::Validation) carrying
///   the per-field issues; they never persist partially.
/// - Content membership in the owning section's field set is the
///   reconciler's job, not the store's; the store validates declared
///   constraints only.
/// - All backend failures are propagated, never silently ignored.
pub trait RecordStore: Send + Sync {
    /// Build and persist a new record for a section.
    fn create(&self, section_id: SectionId, content: ContentMap) -> RecordResult<Record>;

    /// Replace an existing record's content.
    fn update(&self, id: RecordId, content: ContentMap) -> RecordResult<Record>;

    /// Delete a record. Returns `true` if the record existed.
    ///
    /// No cascading effects: stored files referenced by the record remain
    /// in the file store.
    fn destroy(&self, id: RecordId) -> RecordResult<bool>;

    /// Look up a record by ID.
    ///
    /// Returns `Ok(None)` if the record does not exist.
    fn find(&self, id: RecordId) -> RecordResult<Option<Record>>;

    /// All records belonging to a section.
    fn list(&self, section_id: SectionId) -> RecordResult<Vec<Record>>;
}
