use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The declared type of a section field.
///
/// Field types are defined at runtime by the template/configuration layer.
/// The core only cares about the file/scalar distinction; everything else is
/// rendering guidance for the dashboard UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Single-line text (the default).
    Text,
    /// Multi-line text.
    TextArea,
    /// Rich HTML content.
    Html,
    /// Numeric value.
    Number,
    /// Calendar date.
    Date,
    /// URL.
    Link,
    /// One of a fixed set of options.
    Choice,
    /// True/false toggle.
    Boolean,
    /// Uploaded image, stored by content hash.
    Image,
    /// Uploaded file, stored by content hash.
    File,
}

impl FieldType {
    /// Returns `true` if values of this type are stored file references
    /// rather than inline scalars.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::Image | Self::File)
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Text
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::TextArea => write!(f, "textarea"),
            Self::Html => write!(f, "html"),
            Self::Number => write!(f, "number"),
            Self::Date => write!(f, "date"),
            Self::Link => write!(f, "link"),
            Self::Choice => write!(f, "choice"),
            Self::Boolean => write!(f, "boolean"),
            Self::Image => write!(f, "image"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Schema for a single section field.
///
/// Owned by [`crate::Section`]; never mutated by the core.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Declared field type.
    #[serde(default)]
    pub field_type: FieldType,
    /// Whether a value is required for the record to validate.
    #[serde(default)]
    pub required: bool,
    /// Directive-specific settings (placeholder text, choice options, ...).
    /// Opaque to the core.
    #[serde(default)]
    pub options: BTreeMap<String, Value>,
}

impl FieldSpec {
    /// Create a spec with the given type and no constraints.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            options: BTreeMap::new(),
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_types_are_file_backed() {
        assert!(FieldType::Image.is_file());
        assert!(FieldType::File.is_file());
    }

    #[test]
    fn scalar_types_are_not_file_backed() {
        for ty in [
            FieldType::Text,
            FieldType::TextArea,
            FieldType::Html,
            FieldType::Number,
            FieldType::Date,
            FieldType::Link,
            FieldType::Choice,
            FieldType::Boolean,
        ] {
            assert!(!ty.is_file());
        }
    }

    #[test]
    fn default_is_text() {
        assert_eq!(FieldType::default(), FieldType::Text);
        assert_eq!(FieldSpec::default().field_type, FieldType::Text);
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", FieldType::TextArea), "textarea");
        assert_eq!(format!("{}", FieldType::Image), "image");
    }

    #[test]
    fn required_builder() {
        let spec = FieldSpec::new(FieldType::Text).required();
        assert!(spec.required);
    }

    #[test]
    fn serde_roundtrip() {
        let spec = FieldSpec::new(FieldType::Choice);
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: FieldSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, parsed);
    }
}
