use crate::foundation::error::{HueforgeError, HueforgeResult};

pub use kurbo::{Point, Vec2};

/// Pixel dimensions of a render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> HueforgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(HueforgeError::validation(format!(
                "canvas width/height must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of RGBA8 bytes needed for this canvas.
    pub fn byte_len(self) -> HueforgeResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| HueforgeError::render("pixel buffer size overflow"))
    }

    /// Grow the canvas by `pad` pixels on every side.
    pub fn padded(self, pad: u32) -> HueforgeResult<Self> {
        let extra = pad
            .checked_mul(2)
            .ok_or_else(|| HueforgeError::render("padding overflow"))?;
        let width = self
            .width
            .checked_add(extra)
            .ok_or_else(|| HueforgeError::render("padded width overflow"))?;
        let height = self
            .height
            .checked_add(extra)
            .ok_or_else(|| HueforgeError::render("padded height overflow"))?;
        Ok(Self { width, height })
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Convert back to straight alpha. Fully transparent pixels become transparent black.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(self.a) / 2) / u32::from(self.a);
            v.min(255) as u8
        };
        [unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
