use std::collections::BTreeSet;

use tracing::warn;

use loam_store::FileStore;
use loam_types::ContentMap;

use crate::error::ContentResult;
use crate::upload::FileUpload;

/// Derive the final content map for a record from a submission.
///
/// Three phases, in contract order:
///
/// 1. **Filter** — `submitted` restricted to keys in `allowed`; unknown keys
///    are silently dropped.
/// 2. **Overlay files** — each upload whose key names an allowed field is
///    stored through `store`, and the returned filename overwrites or
///    inserts that field's value. Storage completes before the value is
///    inserted. Uploads with unparsable keys or disallowed fields are
///    dropped.
/// 3. **Destroy** — every name in `destroys` is removed, last and
///    unconditionally: destruction wins over submitted values and freshly
///    stored files alike.
///
/// The result's keys are always a subset of `allowed`. Missing, extra, or
/// malformed inputs never fail the call; the only error source is file
/// storage, which is fatal for the request.
pub fn reconcile(
    submitted: &ContentMap,
    uploads: Vec<FileUpload>,
    destroys: &BTreeSet<String>,
    allowed: &BTreeSet<String>,
    store: &dyn FileStore,
) -> ContentResult<ContentMap> {
    let mut content: ContentMap = submitted
        .iter()
        .filter(|(name, _)| allowed.contains(*name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    for mut upload in uploads {
        let Some(field) = upload.field_name().map(str::to_owned) else {
            warn!(key = %upload.key, "dropping upload with unparsable field key");
            continue;
        };
        if !allowed.contains(&field) {
            warn!(%field, "dropping upload for disallowed field");
            continue;
        }
        let filename = store.store(&mut *upload.source, &upload.file_name)?;
        content.insert(field, filename.into());
    }

    for name in destroys {
        content.remove(name);
    }

    Ok(content)
}
