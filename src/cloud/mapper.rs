use crate::foundation::core::{DrawingSpace, Vec3};
use crate::foundation::math::row_col;

/// Uniform factor fitting an image's limiting dimension into the drawing space.
///
/// Images taller (relative to width) than the reference frame are fit by height, all others by
/// width.
pub fn fit_scale(width: u32, height: u32, space: &DrawingSpace) -> f64 {
    let (w, h) = (f64::from(width), f64::from(height));
    if h / w > space.reference_aspect() {
        2.0 * space.space_height / h
    } else {
        2.0 * space.space_width / w
    }
}

/// Map row-major pixel indices to drawing-space positions.
///
/// Before scaling, `x = col - width/2` and `y = height/2 - row` with integer row/col extraction
/// and `z = 0`; the whole vector is then multiplied by [`fit_scale`].
pub fn map_indices(indices: &[usize], width: u32, height: u32, space: &DrawingSpace) -> Vec<Vec3> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let s = fit_scale(width, height, space);
    let half_w = f64::from(width) / 2.0;
    let half_h = f64::from(height) / 2.0;

    indices
        .iter()
        .map(|&index| {
            let (row, col) = row_col(index, width as usize);
            let x = col as f64 - half_w;
            let y = half_h - row as f64;
            [x * s, y * s, 0.0]
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/cloud/mapper.rs"]
mod tests;
