use std::collections::BTreeSet;

use serde_json::Value;

use loam_content::FileUpload;
use loam_types::ContentMap;

/// The parsed form transport for one create/update request.
///
/// The routing layer builds this from the request body: `content` from the
/// ordinary form fields, `uploads` from the multipart parts, `destroys`
/// from the `_destroy` flags.
#[derive(Default)]
pub struct Submission {
    pub content: ContentMap,
    pub uploads: Vec<FileUpload>,
    pub destroys: BTreeSet<String>,
}

impl Submission {
    /// An empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a submitted field value.
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(field.into(), value.into());
        self
    }

    /// Attach an upload.
    pub fn with_upload(mut self, upload: FileUpload) -> Self {
        self.uploads.push(upload);
        self
    }

    /// Flag a field for destruction.
    pub fn with_destroy(mut self, field: impl Into<String>) -> Self {
        self.destroys.insert(field.into());
        self
    }
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("content", &self.content)
            .field("upload_count", &self.uploads.len())
            .field("destroys", &self.destroys)
            .finish()
    }
}
