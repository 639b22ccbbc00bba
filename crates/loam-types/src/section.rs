use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::field::FieldSpec;
use crate::id::SectionId;

/// Options consulted only for form-mode sections.
///
/// A form section's submissions are mailed rather than published, so the
/// section carries delivery hints alongside its fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionOptions {
    /// Email address submissions are sent to. Falls back to the dashboard
    /// user's address when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// Subject line for submission mail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Path to redirect to after a successful submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// A runtime-defined content category.
///
/// Sections are defined by the external template/configuration layer and
/// loaded fresh per request; they are immutable during reconciliation. Field
/// names are unique within a section by construction (`fields` is a map
/// keyed by name, in declaration order).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Machine name (template identifier).
    pub name: String,
    /// Plural display label.
    pub label: String,
    /// Singular display label.
    pub label_singular: String,
    /// Ordered mapping of field name → field spec.
    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,
    /// Form-mode delivery options.
    #[serde(default)]
    pub options: SectionOptions,
    /// May this section hold more than one record?
    #[serde(default)]
    pub multiple: bool,
    /// Repeating-content mode flag.
    #[serde(default)]
    pub repeating: bool,
    /// Form mode flag.
    #[serde(default)]
    pub form: bool,
}

impl Section {
    /// Create a content section with the given name and no fields.
    ///
    /// Labels default to the name; callers refine them as needed.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: SectionId::new(),
            label: name.clone(),
            label_singular: name.clone(),
            name,
            fields: IndexMap::new(),
            options: SectionOptions::default(),
            multiple: false,
            repeating: false,
            form: false,
        }
    }

    /// Add a field, replacing any existing spec under the same name.
    pub fn with_field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Look up a field spec by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// The set of field names this section permits in record content.
    pub fn allowed_fields(&self) -> BTreeSet<String> {
        self.fields.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;

    fn sample() -> Section {
        Section::new("about")
            .with_field("title", FieldSpec::new(FieldType::Text))
            .with_field("photo", FieldSpec::new(FieldType::Image))
            .with_field("body", FieldSpec::new(FieldType::Html))
    }

    #[test]
    fn fields_keep_declaration_order() {
        let section = sample();
        let names: Vec<&str> = section.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["title", "photo", "body"]);
    }

    #[test]
    fn duplicate_field_replaces_spec() {
        let section = sample().with_field("title", FieldSpec::new(FieldType::TextArea));
        assert_eq!(section.fields.len(), 3);
        assert_eq!(
            section.field("title").unwrap().field_type,
            FieldType::TextArea
        );
    }

    #[test]
    fn allowed_fields_is_key_set() {
        let allowed = sample().allowed_fields();
        assert_eq!(allowed.len(), 3);
        assert!(allowed.contains("photo"));
        assert!(!allowed.contains("missing"));
    }

    #[test]
    fn new_section_defaults() {
        let section = Section::new("general");
        assert!(!section.multiple);
        assert!(!section.form);
        assert!(section.fields.is_empty());
        assert_eq!(section.label, "general");
    }

    #[test]
    fn serde_roundtrip_preserves_order() {
        let section = sample();
        let json = serde_json::to_string(&section).unwrap();
        let parsed: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(section, parsed);
        let names: Vec<&str> = parsed.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["title", "photo", "body"]);
    }

    #[test]
    fn form_options_roundtrip() {
        let mut section = Section::new("contact");
        section.form = true;
        section.options.recipient = Some("hello@example.com".into());
        section.options.subject = Some("New enquiry".into());
        let json = serde_json::to_string(&section).unwrap();
        let parsed: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.options.recipient.as_deref(), Some("hello@example.com"));
        assert!(parsed.options.next.is_none());
    }
}
