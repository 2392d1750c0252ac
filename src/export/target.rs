use crate::foundation::error::HueforgeError;
use std::fmt;
use std::str::FromStr;

/// Export width shared by every aspect ratio.
pub const EXPORT_BASE_WIDTH: u32 = 1920;

/// Supported export aspect ratios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    /// 16:9
    #[default]
    Widescreen,
    /// 21:9
    Ultrawide,
    /// 4:3
    Standard,
    /// 1:1
    Square,
    /// 9:16
    Portrait,
    /// 3:4
    PortraitStandard,
    /// 2:3
    PortraitPhoto,
    /// 3:2
    Photo,
}

impl AspectRatio {
    /// Every ratio, in menu order.
    pub const ALL: [AspectRatio; 8] = [
        Self::Widescreen,
        Self::Ultrawide,
        Self::Standard,
        Self::Square,
        Self::Portrait,
        Self::PortraitStandard,
        Self::PortraitPhoto,
        Self::Photo,
    ];

    /// `(w, h)` ratio terms.
    pub fn terms(self) -> (u32, u32) {
        match self {
            Self::Widescreen => (16, 9),
            Self::Ultrawide => (21, 9),
            Self::Standard => (4, 3),
            Self::Square => (1, 1),
            Self::Portrait => (9, 16),
            Self::PortraitStandard => (3, 4),
            Self::PortraitPhoto => (2, 3),
            Self::Photo => (3, 2),
        }
    }

    /// Export pixel size: the base width and the proportional height, rounded.
    pub fn dimensions(self) -> (u32, u32) {
        let (w, h) = self.terms();
        let height = (f64::from(EXPORT_BASE_WIDTH) / f64::from(w) * f64::from(h)).round();
        (EXPORT_BASE_WIDTH, height as u32)
    }

    /// File-name form, e.g. `16x9`.
    pub fn file_suffix(self) -> String {
        let (w, h) = self.terms();
        format!("{w}x{h}")
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.terms();
        write!(f, "{w}:{h}")
    }
}

impl FromStr for AspectRatio {
    type Err = HueforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.to_string() == s)
            .ok_or_else(|| {
                HueforgeError::validation(format!(
                    "unsupported aspect ratio '{s}' (expected one of {})",
                    Self::ALL.map(|r| r.to_string()).join(", ")
                ))
            })
    }
}

/// Output format of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// JPEG image.
    Raster,
    /// SVG document.
    Vector,
}

impl ExportKind {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Raster => "jpg",
            Self::Vector => "svg",
        }
    }

    /// MIME type of the encoded artifact.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Raster => "image/jpeg",
            Self::Vector => "image/svg+xml",
        }
    }
}

/// What to export and at which aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExportTarget {
    /// Aspect ratio that fixes the pixel size.
    pub aspect_ratio: AspectRatio,
    /// Output format.
    pub kind: ExportKind,
}

impl ExportTarget {
    /// Build a target.
    pub fn new(aspect_ratio: AspectRatio, kind: ExportKind) -> Self {
        Self { aspect_ratio, kind }
    }

    /// Pixel size of the export.
    pub fn dimensions(self) -> (u32, u32) {
        self.aspect_ratio.dimensions()
    }

    /// Download file name, e.g. `gradient-16x9.jpg`.
    pub fn file_name(self) -> String {
        format!(
            "gradient-{}.{}",
            self.aspect_ratio.file_suffix(),
            self.kind.extension()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/target.rs"]
mod tests;
