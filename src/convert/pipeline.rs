use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::assets::color::FilterColor;
use crate::assets::decode::{RasterImage, decode_image_file};
use crate::assets::resolve::{mobject_name, resolve_image_path, source_identity};
use crate::cache::store::{CacheKey, FsPointCache, PointCache};
use crate::cloud::filter::filter_pixels;
use crate::cloud::mapper::map_indices;
use crate::cloud::model::PointCloud;
use crate::convert::opts::ImageOpts;
use crate::convert::presets::Preset;
use crate::foundation::core::DrawingSpace;
use crate::foundation::error::StippleResult;

/// Where an [`ImageMobject`]'s points came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudOrigin {
    /// Loaded from the point cache; the image was not decoded.
    Cache,
    /// Decoded, filtered and mapped from the image file.
    Decoded,
}

/// Point cloud built from a raster image.
///
/// Construction resolves the identifier, loads or computes the raw cloud, then applies
/// `scale(scale_value)` and `center()`.
#[derive(Clone, Debug)]
pub struct ImageMobject {
    name: String,
    source: PathBuf,
    key: CacheKey,
    origin: CloudOrigin,
    cloud: PointCloud,
}

impl ImageMobject {
    /// Build from an identifier using the filesystem cache at `opts.cache_dir`.
    pub fn new(identifier: &str, opts: &ImageOpts) -> StippleResult<Self> {
        let cache = FsPointCache::new(&opts.cache_dir);
        Self::with_cache(identifier, opts, &cache)
    }

    /// Build a preset image; the preset's scale replaces `opts.scale_value`.
    pub fn from_preset(preset: Preset, opts: ImageOpts) -> StippleResult<Self> {
        let opts = preset.apply(opts);
        Self::new(&preset.identifier(), &opts)
    }

    /// Build from an identifier using a caller-provided cache.
    ///
    /// Fails with `NotFound` when no candidate path exists and with `Decode` when the file is
    /// not an image. Cache failures are logged and recovered by recomputing.
    #[tracing::instrument(skip(opts, cache), fields(invert = opts.invert, use_cache = opts.use_cache))]
    pub fn with_cache(
        identifier: &str,
        opts: &ImageOpts,
        cache: &dyn PointCache,
    ) -> StippleResult<Self> {
        opts.validate()?;
        let source = resolve_image_path(identifier, &opts.image_dir)?;
        let key = CacheKey::new(&source_identity(&source), opts.invert);

        let (mut cloud, origin) = load_or_generate(&source, key, opts, cache)?;
        cloud.scale(opts.scale_value).center();

        Ok(Self {
            name: mobject_name(identifier),
            source,
            key,
            origin,
            cloud,
        })
    }

    /// Display name derived from the identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved image path.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Cache key of the underlying conversion.
    pub fn cache_key(&self) -> CacheKey {
        self.key
    }

    /// Whether the points came from the cache.
    pub fn origin(&self) -> CloudOrigin {
        self.origin
    }

    /// Converted points.
    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    /// Mutable access for further transforms.
    pub fn cloud_mut(&mut self) -> &mut PointCloud {
        &mut self.cloud
    }

    /// Take ownership of the points.
    pub fn into_cloud(self) -> PointCloud {
        self.cloud
    }
}

/// Filter and map a decoded image into an unscaled, uncentered cloud.
///
/// Inversion, if any, must already have been applied to `image`.
pub fn points_from_image(
    image: &RasterImage,
    filter: FilterColor,
    space: &DrawingSpace,
    should_buffer_points: bool,
) -> StippleResult<PointCloud> {
    let kept = filter_pixels(image, filter);
    let positions = map_indices(&kept.indices, image.width, image.height, space);

    let mut cloud = PointCloud::with_buffer_hint(should_buffer_points);
    cloud.add_points_with_colors(positions, kept.colors)?;
    Ok(cloud)
}

fn load_or_generate(
    source: &Path,
    key: CacheKey,
    opts: &ImageOpts,
    cache: &dyn PointCache,
) -> StippleResult<(PointCloud, CloudOrigin)> {
    if opts.use_cache && cache.exists(key) {
        match cache.read(key) {
            Ok((positions, colors)) => {
                let mut cloud = PointCloud::with_buffer_hint(opts.should_buffer_points);
                cloud.add_points_with_colors(positions, colors)?;
                tracing::debug!(%key, points = cloud.len(), "point cache hit");
                return Ok((cloud, CloudOrigin::Cache));
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "discarding unreadable cache entry");
            }
        }
    }

    let mut image = decode_image_file(source)?;
    if opts.invert {
        image.invert_in_place();
    }
    let cloud = points_from_image(
        &image,
        opts.filter_color,
        &opts.space,
        opts.should_buffer_points,
    )?;
    tracing::debug!(
        %key,
        width = image.width,
        height = image.height,
        points = cloud.len(),
        "converted image"
    );

    if opts.use_cache
        && let Err(e) = cache.write(key, cloud.positions(), cloud.colors())
    {
        tracing::warn!(%key, error = %e, "failed to cache point cloud");
    }

    Ok((cloud, CloudOrigin::Decoded))
}

#[cfg(test)]
#[path = "../../tests/unit/convert/pipeline.rs"]
mod tests;
