//! Stipple turns raster images into colored point clouds for vector-graphics animation.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: image identifier -> existing file (literal path, then `<image_dir>/<id>`,
//!    `<id>.jpg`, `<id>.png`)
//! 2. **Load or convert**: on a cache hit the stored arrays are used directly; otherwise the image
//!    is decoded, optionally inverted, filtered against an exact background color and mapped into
//!    drawing space
//! 3. **Persist**: fresh results are written to a content-addressed cache (`<key>.points`,
//!    `<key>.rgbs`, little-endian `f64`)
//! 4. **Place**: the cloud is scaled by `scale_value` and centered on the origin
//!
//! Only path resolution and decode failures reach the caller. A missing, truncated or unwritable
//! cache entry is logged through `tracing` and recovered by recomputing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod cache;
mod cloud;
mod convert;
mod foundation;

pub use assets::color::FilterColor;
pub use assets::decode::{RasterImage, decode_image, decode_image_file};
pub use assets::resolve::{
    IMAGE_EXTENSIONS, candidate_paths, mobject_name, resolve_image_path, source_identity,
};
pub use cache::store::{
    CacheArray, CacheKey, FsPointCache, PointCache, VECTOR_BYTES, decode_f64le, encode_f64le,
};
pub use cloud::filter::{RetainedPixels, filter_pixels};
pub use cloud::mapper::{fit_scale, map_indices};
pub use cloud::model::{BoundingBox, PointCloud};
pub use convert::opts::{DEFAULT_CACHE_DIR, DEFAULT_IMAGE_DIR, ImageOpts};
pub use convert::pipeline::{CloudOrigin, ImageMobject, points_from_image};
pub use convert::presets::{FaceMode, Preset};
pub use foundation::core::{DrawingSpace, Rgb8, Vec3};
pub use foundation::error::{StippleError, StippleResult};
