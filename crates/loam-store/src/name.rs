//! Digest-qualified filename derivation.
//!
//! Stored files are named `<stem>-<digest><ext>`:
//! - `stem` is the snake_cased, lowercased stem of the original name
//! - `digest` is the full hex of the content digest
//! - `ext` is the lowercased original extension (with dot), or empty
//!
//! The digest component depends only on the bytes, so two uploads of the
//! same content under differently cased or spaced names collide only in the
//! digest — which is exactly the deduplication we want.

use std::path::Path;

use convert_case::{Case, Casing};

use crate::digest::ContentDigest;

/// Derive the stored filename for content with the given original name.
pub fn derive_filename(original_name: &str, digest: &ContentDigest) -> String {
    let path = Path::new(original_name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    format!("{}-{}{}", normalize_stem(stem), digest.to_hex(), ext)
}

/// Normalize a file stem to a lowercase, underscore-separated form.
fn normalize_stem(stem: &str) -> String {
    stem.to_case(Case::Snake)
}
