use crate::export::jpeg::JpegOpts;

/// Default preview width and height in pixels.
pub const DEFAULT_PREVIEW_SIZE: u32 = 1000;

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    /// Preview buffer width.
    pub preview_width: u32,
    /// Preview buffer height.
    pub preview_height: u32,
    /// JPEG encoder settings used by raster exports.
    pub jpeg: JpegOpts,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_SIZE,
            preview_height: DEFAULT_PREVIEW_SIZE,
            jpeg: JpegOpts::default(),
        }
    }
}

impl SessionOpts {
    /// Defaults overridden by `HUEFORGE_PREVIEW_SIZE` and `HUEFORGE_JPEG_QUALITY`.
    ///
    /// Malformed values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        if let Some((w, h)) = lookup("HUEFORGE_PREVIEW_SIZE").and_then(|v| parse_size(&v)) {
            opts.preview_width = w;
            opts.preview_height = h;
        }
        if let Some(q) = lookup("HUEFORGE_JPEG_QUALITY")
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
        {
            opts.jpeg.quality = q;
        }
        opts
    }

    /// Set the preview size.
    pub fn with_preview_size(mut self, width: u32, height: u32) -> Self {
        self.preview_width = width;
        self.preview_height = height;
        self
    }

    /// Set the JPEG quality (`1..=100`; checked at encode time).
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg.quality = quality;
        self
    }

    /// Set the background used to flatten alpha in JPEG exports.
    pub fn with_jpeg_background(mut self, bg_rgba: [u8; 4]) -> Self {
        self.jpeg.bg_rgba = bg_rgba;
        self
    }
}

/// `"WxH"` or a single number for a square.
fn parse_size(s: &str) -> Option<(u32, u32)> {
    let s = s.trim();
    let (w, h) = match s.split_once(['x', 'X']) {
        Some((w, h)) => (w.trim().parse().ok()?, h.trim().parse().ok()?),
        None => {
            let n = s.parse().ok()?;
            (n, n)
        }
    };
    (w > 0 && h > 0).then_some((w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
