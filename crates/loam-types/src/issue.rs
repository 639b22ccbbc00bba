use serde::{Deserialize, Serialize};

/// A field-path-scoped failure reported by the persistence layer.
///
/// `path` addresses the failing attribute (`content`, `content.title`,
/// `email`, ...). `message` is sometimes plain text and sometimes a
/// serialized JSON structure; consumers must tolerate both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        let issue = ValidationIssue::new("content.title", "Required");
        assert_eq!(issue.path, "content.title");
        assert_eq!(issue.message, "Required");
    }

    #[test]
    fn serde_roundtrip() {
        let issue = ValidationIssue::new("content", r#"{"title":"Required"}"#);
        let json = serde_json::to_string(&issue).unwrap();
        let parsed: ValidationIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(issue, parsed);
    }
}
