use crate::assets::color::FilterColor;
use crate::assets::decode::RasterImage;
use crate::foundation::core::Vec3;

/// Pixels that survived background filtering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetainedPixels {
    /// Row-major flattened indices, ascending.
    pub indices: Vec<usize>,
    /// Normalized RGB of each retained pixel, parallel to `indices`.
    pub colors: Vec<Vec3>,
}

impl RetainedPixels {
    /// Number of retained pixels.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Return `true` when every pixel was filtered out.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Drop every pixel exactly equal (all three channels) to `filter`.
///
/// No tolerance is applied: a pixel one unit away in any channel is kept.
pub fn filter_pixels(image: &RasterImage, filter: FilterColor) -> RetainedPixels {
    let background = filter.rgb();
    let mut out = RetainedPixels::default();
    for (index, px) in image.pixels().enumerate() {
        if px == background {
            continue;
        }
        out.indices.push(index);
        out.colors.push(px.to_unit());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/cloud/filter.rs"]
mod tests;
