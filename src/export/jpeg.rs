use crate::foundation::error::{HueforgeError, HueforgeResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::backend::FrameRGBA;
use image::ImageEncoder as _;
use image::codecs::jpeg::JpegEncoder;

/// Default JPEG quality for exports.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Options for JPEG export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JpegOpts {
    /// Encoder quality, `1..=100`.
    pub quality: u8,
    /// Background used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
}

impl Default for JpegOpts {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
            bg_rgba: [0, 0, 0, 255],
        }
    }
}

/// Composite `frame` over the opaque `bg` and return tightly packed RGB8.
pub(crate) fn flatten_to_rgb8(frame: &FrameRGBA, bg: [u8; 4]) -> HueforgeResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .checked_mul(frame.height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| HueforgeError::encode("frame size overflow"))?;
    if frame.data.len() != expected {
        return Err(HueforgeError::encode(format!(
            "frame data is {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut out = Vec::with_capacity(expected / 4 * 3);
    for px in frame.data.chunks_exact(4) {
        let a = u16::from(px[3]);
        let inv = 255 - a;
        for c in 0..3 {
            let src = if frame.premultiplied {
                px[c]
            } else {
                mul_div255_u8(u16::from(px[c]), a)
            };
            let v = u16::from(src) + u16::from(mul_div255_u8(u16::from(bg[c]), inv));
            out.push(v.min(255) as u8);
        }
    }
    Ok(out)
}

/// Encode `frame` as a baseline JPEG, flattening alpha over `bg`.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn encode_jpeg(frame: &FrameRGBA, quality: u8, bg: [u8; 4]) -> HueforgeResult<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(HueforgeError::validation(format!(
            "jpeg quality must be within 1..=100 (got {quality})"
        )));
    }
    let rgb = flatten_to_rgb8(frame, bg)?;

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .write_image(
            &rgb,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| HueforgeError::encode(format!("jpeg encode: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/export/jpeg.rs"]
mod tests;
