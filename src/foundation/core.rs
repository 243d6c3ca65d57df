use serde::{Deserialize, Serialize};

use crate::foundation::error::{StippleError, StippleResult};

/// Three-component `f64` vector used for both positions and normalized colors.
pub type Vec3 = [f64; 3];

/// Straight (non-premultiplied) RGB8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel `255 - c`.
    pub const fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    /// Channels divided by `255.0`.
    pub fn to_unit(self) -> Vec3 {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

/// Fixed-extent drawing coordinate system that raw pixel coordinates are rescaled into.
///
/// `space_width`/`space_height` are half-extents: the visible frame spans
/// `[-space_width, space_width] x [-space_height, space_height]`. The reference size only
/// contributes its aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSpace {
    /// Horizontal half-extent.
    pub space_width: f64,
    /// Vertical half-extent.
    pub space_height: f64,
    /// Reference frame width in pixels.
    pub reference_width: u32,
    /// Reference frame height in pixels.
    pub reference_height: u32,
}

impl DrawingSpace {
    /// Reference frame width in pixels.
    pub const DEFAULT_WIDTH: u32 = 1920;
    /// Reference frame height in pixels.
    pub const DEFAULT_HEIGHT: u32 = 1080;
    /// Vertical half-extent of the default drawing space.
    pub const SPACE_HEIGHT: f64 = 4.0;
    /// Horizontal half-extent of the default drawing space.
    pub const SPACE_WIDTH: f64 =
        Self::SPACE_HEIGHT * Self::DEFAULT_WIDTH as f64 / Self::DEFAULT_HEIGHT as f64;

    /// Height over width of the reference frame.
    pub fn reference_aspect(&self) -> f64 {
        f64::from(self.reference_height) / f64::from(self.reference_width)
    }

    /// Check extents are finite and positive.
    pub fn validate(&self) -> StippleResult<()> {
        if !self.space_width.is_finite() || self.space_width <= 0.0 {
            return Err(StippleError::validation(
                "space_width must be finite and > 0",
            ));
        }
        if !self.space_height.is_finite() || self.space_height <= 0.0 {
            return Err(StippleError::validation(
                "space_height must be finite and > 0",
            ));
        }
        if self.reference_width == 0 || self.reference_height == 0 {
            return Err(StippleError::validation(
                "reference_width and reference_height must be > 0",
            ));
        }
        Ok(())
    }
}

impl Default for DrawingSpace {
    fn default() -> Self {
        Self {
            space_width: Self::SPACE_WIDTH,
            space_height: Self::SPACE_HEIGHT,
            reference_width: Self::DEFAULT_WIDTH,
            reference_height: Self::DEFAULT_HEIGHT,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
