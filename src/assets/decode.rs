use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{StippleError, StippleResult};

/// Decoded raster image as straight RGB8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major RGB8, tightly packed.
    pub rgb8: Vec<u8>,
}

impl RasterImage {
    /// Wrap raw RGB8 bytes, checking the buffer length against the dimensions.
    pub fn from_raw(width: u32, height: u32, rgb8: Vec<u8>) -> StippleResult<Self> {
        let expected = (width as usize) * (height as usize) * 3;
        if rgb8.len() != expected {
            return Err(StippleError::validation(format!(
                "rgb8 buffer has {} bytes, expected {expected} for {width}x{height}",
                rgb8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgb8,
        })
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.rgb8
            .chunks_exact(3)
            .map(|px| Rgb8::new(px[0], px[1], px[2]))
    }

    /// Replace every channel `c` with `255 - c`.
    pub fn invert_in_place(&mut self) {
        for c in &mut self.rgb8 {
            *c = 255 - *c;
        }
    }
}

/// Decode encoded image bytes into RGB8, dropping any alpha channel.
pub fn decode_image(bytes: &[u8]) -> StippleResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StippleError::decode(format!("decode image from memory: {e}")))?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(RasterImage {
        width,
        height,
        rgb8: rgb.into_raw(),
    })
}

/// Read and decode an image file.
pub fn decode_image_file(path: &Path) -> StippleResult<RasterImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| StippleError::decode(format!("read image '{}': {e}", path.display())))?;
    decode_image(&bytes)
        .map_err(|e| StippleError::decode(format!("'{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
