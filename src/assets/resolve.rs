use std::path::{Path, PathBuf};

use crate::foundation::error::{StippleError, StippleResult};

/// Extensions tried, in order, after the bare `<image_dir>/<id>` candidate.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Ordered candidate paths for an image identifier.
///
/// Order: the literal identifier, `<image_dir>/<id>`, then `<image_dir>/<id>.<ext>` for each of
/// [`IMAGE_EXTENSIONS`].
pub fn candidate_paths(identifier: &str, image_dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::with_capacity(2 + IMAGE_EXTENSIONS.len());
    out.push(PathBuf::from(identifier));
    out.push(image_dir.join(identifier));
    for ext in IMAGE_EXTENSIONS {
        out.push(image_dir.join(format!("{identifier}.{ext}")));
    }
    out
}

/// Return the first existing candidate path for `identifier`.
pub fn resolve_image_path(identifier: &str, image_dir: &Path) -> StippleResult<PathBuf> {
    let candidates = candidate_paths(identifier, image_dir);
    candidates
        .iter()
        .find(|p| p.exists())
        .cloned()
        .ok_or_else(|| {
            let tried = candidates
                .iter()
                .map(|p| format!("'{}'", p.display()))
                .collect::<Vec<_>>()
                .join(", ");
            StippleError::not_found(format!("no image for \"{identifier}\" (tried {tried})"))
        })
}

/// Stable string identity of a resolved path, used for cache keys.
///
/// Canonicalizes when possible so different spellings of one file share a key.
pub fn source_identity(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// Display name for an identifier: file stem split on `_`, each part capitalized.
///
/// `"images/simple_face.png"` becomes `"SimpleFace"`.
pub fn mobject_name(identifier: &str) -> String {
    let last = identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier);
    let stem = last.split('.').next().unwrap_or_default();

    stem.split('_')
        .map(|part| {
            let cleaned: String = part
                .chars()
                .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
                .collect();
            let mut chars = cleaned.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/resolve.rs"]
mod tests;
