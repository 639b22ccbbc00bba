use std::io::{Cursor, Read};

/// One uploaded file from the multipart transport.
///
/// `key` is the raw submission key (`content[<field>]`); `file_name` is the
/// client-supplied original name; `source` is the byte stream, consumed
/// exactly once when the upload is stored.
pub struct FileUpload {
    pub key: String,
    pub file_name: String,
    pub source: Box<dyn Read + Send>,
}

impl FileUpload {
    /// Wrap an arbitrary byte stream.
    pub fn new(
        key: impl Into<String>,
        file_name: impl Into<String>,
        source: Box<dyn Read + Send>,
    ) -> Self {
        Self {
            key: key.into(),
            file_name: file_name.into(),
            source,
        }
    }

    /// Wrap an in-memory buffer (handy for tests and small uploads).
    pub fn from_bytes(
        key: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self::new(key, file_name, Box::new(Cursor::new(bytes.into())))
    }

    /// Extract the target field name from the bracketed submission key.
    ///
    /// Returns `None` when the key is not of the form `content[<field>]`
    /// with a non-empty field name; such uploads are dropped by the
    /// reconciler.
    pub fn field_name(&self) -> Option<&str> {
        self.key
            .strip_prefix("content[")
            .and_then(|rest| rest.strip_suffix(']'))
            .filter(|name| !name.is_empty())
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("key", &self.key)
            .field("file_name", &self.file_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_from_bracketed_key() {
        let upload = FileUpload::from_bytes("content[photo]", "p.png", b"x".to_vec());
        assert_eq!(upload.field_name(), Some("photo"));
    }

    #[test]
    fn field_name_rejects_other_keys() {
        for key in ["photo", "content[", "content[]", "attachment[photo]", ""] {
            let upload = FileUpload::from_bytes(key, "p.png", b"x".to_vec());
            assert_eq!(upload.field_name(), None, "key {key:?}");
        }
    }

    #[test]
    fn source_reads_bytes() {
        let mut upload = FileUpload::from_bytes("content[f]", "f.bin", b"payload".to_vec());
        let mut data = Vec::new();
        upload.source.read_to_end(&mut data).unwrap();
        assert_eq!(data, b"payload");
    }
}
