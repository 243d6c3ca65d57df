use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::color::FilterColor;
use crate::foundation::core::DrawingSpace;
use crate::foundation::error::{StippleError, StippleResult};

/// Default directory searched for bare image identifiers.
pub const DEFAULT_IMAGE_DIR: &str = "images";
/// Default directory for cached point clouds.
pub const DEFAULT_CACHE_DIR: &str = "image_mobject_cache";

/// Options controlling image-to-point-cloud conversion.
///
/// Every field has a default, so a JSON config only needs the fields it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageOpts {
    /// Pixels of exactly this color are dropped. Default: black.
    pub filter_color: FilterColor,
    /// Invert colors (`255 - c`) before filtering. Default: `true`.
    pub invert: bool,
    /// Read and write the on-disk cache. Default: `true`.
    pub use_cache: bool,
    /// Uniform scale applied after population. Default: `1.0`.
    pub scale_value: f64,
    /// Hint forwarded to the point cloud for renderers. Default: `false`.
    pub should_buffer_points: bool,
    /// Directory searched for bare identifiers.
    pub image_dir: PathBuf,
    /// Directory holding `<key>.points`/`<key>.rgbs` blobs.
    pub cache_dir: PathBuf,
    /// Target drawing space.
    pub space: DrawingSpace,
}

impl Default for ImageOpts {
    fn default() -> Self {
        Self {
            filter_color: FilterColor::BLACK,
            invert: true,
            use_cache: true,
            scale_value: 1.0,
            should_buffer_points: false,
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            space: DrawingSpace::default(),
        }
    }
}

impl ImageOpts {
    /// Parse options from a JSON reader and validate them.
    pub fn from_reader(r: impl Read) -> StippleResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| StippleError::serde(format!("parse image options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StippleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StippleError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check numeric fields.
    pub fn validate(&self) -> StippleResult<()> {
        if !self.scale_value.is_finite() {
            return Err(StippleError::validation("scale_value must be finite"));
        }
        self.space.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/opts.rs"]
mod tests;
