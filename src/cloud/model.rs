use serde::{Deserialize, Serialize};

use crate::foundation::core::Vec3;
use crate::foundation::error::{StippleError, StippleResult};

/// Axis-aligned bounds of a point cloud.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Component-wise minimum.
    pub min: Vec3,
    /// Component-wise maximum.
    pub max: Vec3,
}

impl BoundingBox {
    /// Midpoint of `min` and `max`.
    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// `max - min` per axis.
    pub fn size(&self) -> Vec3 {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Colored point cloud: parallel position and color arrays.
///
/// Invariant: `positions.len() == colors.len()`; the i-th color belongs to the i-th position.
/// Colors are normalized RGB in `[0.0, 1.0]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    should_buffer_points: bool,
}

impl PointCloud {
    /// Empty cloud.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty cloud carrying the downstream buffering hint.
    pub fn with_buffer_hint(should_buffer_points: bool) -> Self {
        Self {
            should_buffer_points,
            ..Self::default()
        }
    }

    /// Append a full batch of points with their colors.
    ///
    /// Rejects batches whose arrays differ in length; the cloud is left untouched on error.
    pub fn add_points_with_colors(
        &mut self,
        positions: Vec<Vec3>,
        colors: Vec<Vec3>,
    ) -> StippleResult<()> {
        if positions.len() != colors.len() {
            return Err(StippleError::validation(format!(
                "positions/colors length mismatch: {} vs {}",
                positions.len(),
                colors.len()
            )));
        }
        if self.positions.is_empty() {
            self.positions = positions;
            self.colors = colors;
        } else {
            self.positions.extend(positions);
            self.colors.extend(colors);
        }
        Ok(())
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Return `true` when the cloud holds no points.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Point positions in insertion order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Point colors in insertion order.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Hint for renderers: keep points in a persistent buffer.
    pub fn should_buffer_points(&self) -> bool {
        self.should_buffer_points
    }

    /// Consume into `(positions, colors)`.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Vec3>) {
        (self.positions, self.colors)
    }

    /// Multiply every position by `factor` about the origin.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for p in &mut self.positions {
            for c in p.iter_mut() {
                *c *= factor;
            }
        }
        self
    }

    /// Translate every position by `delta`.
    pub fn shift(&mut self, delta: Vec3) -> &mut Self {
        for p in &mut self.positions {
            for (c, d) in p.iter_mut().zip(delta) {
                *c += d;
            }
        }
        self
    }

    /// Move the bounding-box center to the origin. No-op on an empty cloud.
    pub fn center(&mut self) -> &mut Self {
        if let Some(c) = self.get_center() {
            self.shift([-c[0], -c[1], -c[2]]);
        }
        self
    }

    /// Bounding-box center, or `None` when empty.
    pub fn get_center(&self) -> Option<Vec3> {
        self.bounding_box().map(|b| b.center())
    }

    /// Axis-aligned bounds, or `None` when empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (first, rest) = self.positions.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some(BoundingBox { min, max })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cloud/model.rs"]
mod tests;
