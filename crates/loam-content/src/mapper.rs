use std::collections::BTreeMap;

use serde_json::Value;

use loam_types::ValidationIssue;

/// A validation-issue message, parsed when possible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedMessage {
    /// The message parsed as JSON.
    Structured(Value),
    /// The message is plain text.
    Text(String),
}

impl ParsedMessage {
    /// Into the value a field-error map stores.
    pub fn into_value(self) -> Value {
        match self {
            Self::Structured(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }
}

/// Parse a message as JSON, falling back to plain text.
///
/// Total: any input yields a `ParsedMessage`.
pub fn parse_with_fallback(message: &str) -> ParsedMessage {
    match serde_json::from_str(message) {
        Ok(value) => ParsedMessage::Structured(value),
        Err(_) => ParsedMessage::Text(message.to_owned()),
    }
}

/// Map persistence-layer validation issues to a field-keyed error map.
///
/// Only issues in the `content` namespace are kept; everything else (e.g.
/// account-field uniqueness) belongs to concerns outside this core and is
/// discarded. A `content.<field>` path contributes one entry keyed by
/// `<field>`. A bare `content` path whose message parses to a JSON object
/// contributes that object's entries wholesale — the persistence layer
/// reports whole-content failures that way. Last write per field wins.
pub fn map_errors(issues: &[ValidationIssue]) -> BTreeMap<String, Value> {
    let mut errors = BTreeMap::new();

    for issue in issues {
        let parsed = parse_with_fallback(&issue.message);
        if let Some(field) = issue.path.strip_prefix("content.") {
            if !field.is_empty() {
                errors.insert(field.to_owned(), parsed.into_value());
            }
        } else if issue.path == "content" {
            if let ParsedMessage::Structured(Value::Object(fields)) = parsed {
                for (field, value) in fields {
                    errors.insert(field, value);
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(
            parse_with_fallback("Required"),
            ParsedMessage::Text("Required".into())
        );
    }

    #[test]
    fn json_is_structured() {
        assert_eq!(
            parse_with_fallback(r#"{"title":"Required"}"#),
            ParsedMessage::Structured(json!({"title": "Required"}))
        );
    }

    #[test]
    fn dotted_content_path_keys_by_field() {
        let issues = vec![
            ValidationIssue::new("content.title", "Required"),
            ValidationIssue::new("email", "must be unique"),
        ];
        let errors = map_errors(&issues);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["title"], json!("Required"));
    }

    #[test]
    fn bare_content_path_merges_object_message() {
        let issues = vec![ValidationIssue::new(
            "content",
            r#"{"title":"Required","photo":"Too large"}"#,
        )];
        let errors = map_errors(&issues);
        assert_eq!(errors["title"], json!("Required"));
        assert_eq!(errors["photo"], json!("Too large"));
    }

    #[test]
    fn bare_content_path_with_text_message_is_discarded() {
        let issues = vec![ValidationIssue::new("content", "something went wrong")];
        assert!(map_errors(&issues).is_empty());
    }

    #[test]
    fn non_content_paths_are_dropped() {
        let issues = vec![
            ValidationIssue::new("email", "Required"),
            ValidationIssue::new("contents.title", "Required"),
            ValidationIssue::new("password", r#"{"complexity":"weak"}"#),
        ];
        assert!(map_errors(&issues).is_empty());
    }

    #[test]
    fn unparseable_message_stays_text() {
        let issues = vec![ValidationIssue::new("content.body", "{not json")];
        let errors = map_errors(&issues);
        assert_eq!(errors["body"], json!("{not json"));
    }

    #[test]
    fn structured_message_under_dotted_path() {
        let issues = vec![ValidationIssue::new(
            "content.choice",
            r#"["too long","bad option"]"#,
        )];
        let errors = map_errors(&issues);
        assert_eq!(errors["choice"], json!(["too long", "bad option"]));
    }

    #[test]
    fn last_write_per_field_wins() {
        let issues = vec![
            ValidationIssue::new("content.title", "first"),
            ValidationIssue::new("content.title", "second"),
        ];
        let errors = map_errors(&issues);
        assert_eq!(errors["title"], json!("second"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(map_errors(&[]).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Total over arbitrary paths and messages: never panics, and
            // every key comes from a content-scoped path.
            #[test]
            fn total_and_content_scoped(
                issues in proptest::collection::vec(
                    ("[a-z.]{0,16}", ".{0,32}").prop_map(|(p, m)| ValidationIssue::new(p, m)),
                    0..16,
                )
            ) {
                let errors = map_errors(&issues);
                for key in errors.keys() {
                    let scoped = format!("content.{}", key);
                    let found = issues.iter().any(|i| i.path == scoped || i.path == "content");
                    prop_assert!(found);
                }
            }
        }
    }
}
