use std::path::{Path, PathBuf};

use crate::foundation::core::Vec3;
use crate::foundation::error::{StippleError, StippleResult};
use crate::foundation::math::Fnv1a64;

/// Bytes per cached vector: three little-endian `f64` components.
pub const VECTOR_BYTES: usize = 3 * std::mem::size_of::<f64>();

/// Stable identifier of a cached conversion result.
///
/// FNV-1a 64 over the UTF-8 source identity, a `0` separator, then one byte for the invert
/// flag. Identical inputs give identical keys across runs and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Derive the key for a `(source, invert)` pair.
    pub fn new(source: &str, invert: bool) -> Self {
        let mut hasher = Fnv1a64::new_default();
        hasher.write_bytes(source.as_bytes());
        hasher.write_u8(0);
        hasher.write_u8(u8::from(invert));
        Self(hasher.finish())
    }

    /// Raw 64-bit key.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// 16 lowercase hex digits; the file stem of both cache blobs.
    pub fn to_hex(self) -> String {
        format!("{:016x}", self.0)
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// The two arrays persisted per cache entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheArray {
    /// Point positions (`<key>.points`).
    Points,
    /// Point colors (`<key>.rgbs`).
    Rgbs,
}

impl CacheArray {
    /// File extension of the blob.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Rgbs => "rgbs",
        }
    }
}

/// Storage contract for converted point clouds.
pub trait PointCache {
    /// `true` iff both blobs for `key` are present and readable.
    fn exists(&self, key: CacheKey) -> bool;
    /// Load `(positions, colors)` for `key`.
    fn read(&self, key: CacheKey) -> StippleResult<(Vec<Vec3>, Vec<Vec3>)>;
    /// Persist `(positions, colors)` under `key`, replacing any previous entry.
    fn write(&self, key: CacheKey, positions: &[Vec3], colors: &[Vec3]) -> StippleResult<()>;
}

/// Directory-backed [`PointCache`] storing `<key>.points` and `<key>.rgbs` blobs.
///
/// Each blob is a flat run of little-endian `f64`, three per vector. Blobs are written to a
/// temporary sibling and renamed into place, so a reader sees either the previous file or the
/// complete new one. The two blobs are not replaced together; a reader racing a writer can see
/// a mismatched pair, which [`PointCache::read`] rejects.
#[derive(Clone, Debug)]
pub struct FsPointCache {
    dir: PathBuf,
}

impl FsPointCache {
    /// Cache rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of one blob for `key`.
    pub fn blob_path(&self, key: CacheKey, array: CacheArray) -> PathBuf {
        self.dir
            .join(format!("{}.{}", key.to_hex(), array.extension()))
    }

    fn read_blob(&self, key: CacheKey, array: CacheArray) -> StippleResult<Vec<Vec3>> {
        let path = self.blob_path(key, array);
        let bytes = std::fs::read(&path).map_err(|e| {
            StippleError::cache_read(format!("read '{}': {e}", path.display()))
        })?;
        decode_f64le(&bytes)
            .map_err(|e| StippleError::cache_read(format!("'{}': {e}", path.display())))
    }

    fn write_blob(&self, key: CacheKey, array: CacheArray, values: &[Vec3]) -> StippleResult<()> {
        let path = self.blob_path(key, array);
        let tmp = path.with_extension(format!(
            "{}.tmp.{}",
            array.extension(),
            std::process::id()
        ));

        std::fs::write(&tmp, encode_f64le(values)).map_err(|e| {
            StippleError::cache_write(format!("write '{}': {e}", tmp.display()))
        })?;
        std::fs::rename(&tmp, &path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            StippleError::cache_write(format!(
                "rename '{}' -> '{}': {e}",
                tmp.display(),
                path.display()
            ))
        })
    }
}

impl PointCache for FsPointCache {
    fn exists(&self, key: CacheKey) -> bool {
        [CacheArray::Points, CacheArray::Rgbs].into_iter().all(|a| {
            let path = self.blob_path(key, a);
            path.is_file() && std::fs::File::open(&path).is_ok()
        })
    }

    #[tracing::instrument(level = "debug", skip(self), fields(dir = %self.dir.display()))]
    fn read(&self, key: CacheKey) -> StippleResult<(Vec<Vec3>, Vec<Vec3>)> {
        let positions = self.read_blob(key, CacheArray::Points)?;
        let colors = self.read_blob(key, CacheArray::Rgbs)?;
        if positions.len() != colors.len() {
            return Err(StippleError::cache_read(format!(
                "entry {key} has {} positions but {} colors",
                positions.len(),
                colors.len()
            )));
        }
        Ok((positions, colors))
    }

    #[tracing::instrument(level = "debug", skip(self, positions, colors), fields(dir = %self.dir.display(), points = positions.len()))]
    fn write(&self, key: CacheKey, positions: &[Vec3], colors: &[Vec3]) -> StippleResult<()> {
        if positions.len() != colors.len() {
            return Err(StippleError::cache_write(format!(
                "refusing to cache {} positions with {} colors",
                positions.len(),
                colors.len()
            )));
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            StippleError::cache_write(format!(
                "create cache directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.write_blob(key, CacheArray::Points, positions)?;
        self.write_blob(key, CacheArray::Rgbs, colors)
    }
}

/// Flatten vectors into little-endian `f64` bytes, components contiguous.
pub fn encode_f64le(values: &[Vec3]) -> Vec<u8> {
    let mut bytes = Vec::<u8>::with_capacity(values.len() * VECTOR_BYTES);
    for v in values {
        for c in v {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
    }
    bytes
}

/// Inverse of [`encode_f64le`]; the length must be a multiple of [`VECTOR_BYTES`].
pub fn decode_f64le(bytes: &[u8]) -> StippleResult<Vec<Vec3>> {
    if bytes.len() % VECTOR_BYTES != 0 {
        return Err(StippleError::cache_read(format!(
            "blob length {} is not a multiple of {VECTOR_BYTES}",
            bytes.len()
        )));
    }

    fn f64_at(chunk: &[u8], i: usize) -> f64 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&chunk[i * 8..(i + 1) * 8]);
        f64::from_le_bytes(raw)
    }

    Ok(bytes
        .chunks_exact(VECTOR_BYTES)
        .map(|chunk| [f64_at(chunk, 0), f64_at(chunk, 1), f64_at(chunk, 2)])
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/cache/store.rs"]
mod tests;
