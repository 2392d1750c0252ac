use crate::color::parse::parse_css_color;
use crate::foundation::error::HueforgeResult;
use crate::foundation::math::clamp_u8;

/// Fallback used when a stop color cannot be parsed while blending.
pub const FALLBACK_BLEND_COLOR: &str = "#ffffff";

/// sRGB color with straight alpha; channels are normalized to `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl Color {
    /// Construct from normalized components. Values are clamped to `0..=1`.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Construct from 8-bit straight RGBA.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Parse CSS color text (hex, `rgb[a]()`, `hsl[a]()`, basic names, `transparent`).
    pub fn parse(s: &str) -> HueforgeResult<Self> {
        parse_css_color(s)
    }

    /// Return `true` when alpha is exactly 1.
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Alpha-aware weighted mix: `weight` is the share of `other` (0 keeps `self`).
    ///
    /// The color weights are skewed toward the more opaque input, so mixing with a
    /// transparent color does not darken the result; alpha is mixed linearly.
    pub fn mix(self, other: Color, weight: f64) -> Self {
        let p = weight.clamp(0.0, 1.0);
        let w = 2.0 * p - 1.0;
        let a = other.a - self.a;
        let w_other = if w * a == -1.0 {
            (w + 1.0) / 2.0
        } else {
            ((w + a) / (1.0 + w * a) + 1.0) / 2.0
        };
        let w_self = 1.0 - w_other;

        Self::rgba(
            w_other * other.r + w_self * self.r,
            w_other * other.g + w_self * self.g,
            w_other * other.b + w_self * self.b,
            other.a * p + self.a * (1.0 - p),
        )
    }

    /// 8-bit straight channels, rounded.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            clamp_u8(self.r * 255.0),
            clamp_u8(self.g * 255.0),
            clamp_u8(self.b * 255.0),
        ]
    }

    /// Lowercase `#rrggbb`; alpha is dropped.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `rgba(r, g, b, a)` with integer channels and a compact alpha.
    pub fn to_rgba_string(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgba({r}, {g}, {b}, {})", format_alpha(self.a))
    }

    /// Hex when opaque, `rgba(..)` otherwise.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            self.to_hex()
        } else {
            self.to_rgba_string()
        }
    }
}

impl std::str::FromStr for Color {
    type Err = crate::foundation::error::HueforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_color(s)
    }
}

/// 50/50 blend of two CSS colors, formatted with [`Color::to_css`].
///
/// Parse failures degrade to [`FALLBACK_BLEND_COLOR`].
pub fn blend_css_colors(left: &str, right: &str) -> String {
    match (Color::parse(left), Color::parse(right)) {
        (Ok(l), Ok(r)) => l.mix(r, 0.5).to_css(),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(left, right, error = %e, "failed to blend colors, using fallback");
            FALLBACK_BLEND_COLOR.to_owned()
        }
    }
}

fn format_alpha(a: f64) -> String {
    let s = format!("{:.4}", a.clamp(0.0, 1.0));
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() { "0".to_owned() } else { s.to_owned() }
}

#[cfg(test)]
#[path = "../../tests/unit/color/model.rs"]
mod tests;
