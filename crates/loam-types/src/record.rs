use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::{RecordId, SectionId};

/// The field-name → value mapping stored on a record.
///
/// Values are scalars for ordinary fields and stored-filename strings for
/// file-backed fields. Entry order is irrelevant to correctness; equality is
/// by value.
pub type ContentMap = BTreeMap<String, Value>;

/// One instance of content belonging to a section.
///
/// Invariant: every key of `content` is a member of the owning section's
/// field set. The reconciler enforces this before the record ever reaches a
/// persistence layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// The owning section. Referenced, not owned.
    pub section_id: SectionId,
    pub content: ContentMap,
}

impl Record {
    /// Build a new record with a fresh ID.
    pub fn new(section_id: SectionId, content: ContentMap) -> Self {
        Self {
            id: RecordId::new(),
            section_id,
            content,
        }
    }

    /// A content value by field name.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.content.get(field)
    }
}
