use crate::color::model::Color;
use crate::foundation::error::{HueforgeError, HueforgeResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Fewest stops a gradient may have.
pub const MIN_STOPS: usize = 2;
/// Most stops a gradient may have.
pub const MAX_STOPS: usize = 5;
/// Upper bound of [`GradientSpec::noise`] amount.
pub const MAX_NOISE_AMOUNT: f64 = 200.0;
/// Upper bound of [`GradientSpec::blur`] radius in pixels.
pub const MAX_BLUR_RADIUS: f64 = 50.0;
/// Upper bound of the linear angle in degrees.
pub const MAX_ANGLE: f64 = 360.0;
/// Noise amount used when a preset enables noise without an amount.
pub const DEFAULT_NOISE_AMOUNT: f64 = 20.0;
/// Blur radius used when a preset enables blur without a radius.
pub const DEFAULT_BLUR_RADIUS: f64 = 12.0;
/// Angle of a freshly created or reset gradient.
pub const DEFAULT_ANGLE: f64 = 90.0;

/// Identifier of a stop, unique within one gradient.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StopId(pub u64);

impl std::fmt::Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stop-{}", self.0)
    }
}

/// One `(color, position)` anchor of a gradient.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorStop {
    /// Identity used for editing.
    pub id: StopId,
    /// CSS color text.
    pub color: String,
    /// Position in percent, `0..=100`.
    pub position: f64,
}

/// Gradient shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientShape {
    /// Directional along [`GradientSpec::angle`].
    #[default]
    Linear,
    /// Circle from the canvas centre.
    Radial,
}

/// An on/off effect whose amount survives being switched off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectToggle {
    /// Whether the effect is switched on.
    #[serde(default)]
    pub enabled: bool,
    /// Effect strength (noise amount or blur radius).
    #[serde(default)]
    pub amount: f64,
}

impl EffectToggle {
    /// Disabled toggle remembering `amount`.
    pub fn off(amount: f64) -> Self {
        Self {
            enabled: false,
            amount,
        }
    }

    /// Enabled toggle with `amount`.
    pub fn on(amount: f64) -> Self {
        Self {
            enabled: true,
            amount,
        }
    }

    /// `true` when enabled with a positive amount.
    pub fn is_active(self) -> bool {
        self.enabled && self.amount > 0.0
    }

    /// The amount when active.
    pub fn active_amount(self) -> Option<f64> {
        self.is_active().then_some(self.amount)
    }
}

/// Declarative description of one gradient image. Every renderer and exporter reads it.
///
/// Stops are kept sorted by ascending position (stable for equal positions).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradientSpecDef")]
pub struct GradientSpec {
    pub(crate) stops: Vec<ColorStop>,
    /// Linear or radial.
    pub shape: GradientShape,
    /// CSS angle in degrees; retained while radial.
    pub angle: f64,
    /// Additive per-pixel noise.
    pub noise: EffectToggle,
    /// Gaussian blur, amount is the radius in pixels.
    pub blur: EffectToggle,
    #[serde(skip)]
    pub(crate) next_id: u64,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self::from_parts(
            [("#00e1ff", 0.0), ("#0000ff", 100.0)],
            GradientShape::Linear,
            DEFAULT_ANGLE,
            EffectToggle::off(0.0),
            EffectToggle::off(0.0),
        )
    }
}

impl GradientSpec {
    /// Build a spec from `(color, position)` pairs, assigning fresh ids.
    ///
    /// The result is not validated; see [`GradientSpec::validate`].
    pub fn from_parts<C: Into<String>>(
        stops: impl IntoIterator<Item = (C, f64)>,
        shape: GradientShape,
        angle: f64,
        noise: EffectToggle,
        blur: EffectToggle,
    ) -> Self {
        let mut spec = Self {
            stops: Vec::new(),
            shape,
            angle,
            noise,
            blur,
            next_id: 1,
        };
        spec.replace_stops(stops);
        spec
    }

    /// Stops in ascending position order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: StopId) -> Option<&ColorStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Return `true` for [`GradientShape::Radial`].
    pub fn is_radial(&self) -> bool {
        self.shape == GradientShape::Radial
    }

    /// Check stop count, ranges and that every stop color parses.
    pub fn validate(&self) -> HueforgeResult<()> {
        let n = self.stops.len();
        if !(MIN_STOPS..=MAX_STOPS).contains(&n) {
            return Err(HueforgeError::validation(format!(
                "gradient must have {MIN_STOPS}..={MAX_STOPS} stops (got {n})"
            )));
        }
        for stop in &self.stops {
            if !stop.position.is_finite() || !(0.0..=100.0).contains(&stop.position) {
                return Err(HueforgeError::validation(format!(
                    "{} position must be within 0..=100 (got {})",
                    stop.id, stop.position
                )));
            }
            Color::parse(&stop.color)?;
        }
        if !self.angle.is_finite() {
            return Err(HueforgeError::validation("angle must be finite"));
        }
        check_amount("noise amount", self.noise.amount, MAX_NOISE_AMOUNT)?;
        check_amount("blur radius", self.blur.amount, MAX_BLUR_RADIUS)?;
        Ok(())
    }

    /// Parse and validate a spec from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> HueforgeResult<Self> {
        let spec: Self = serde_json::from_reader(r)
            .map_err(|e| HueforgeError::serde(format!("parse gradient JSON: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parse and validate a spec from a JSON string.
    pub fn from_json_str(s: &str) -> HueforgeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a spec from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> HueforgeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HueforgeError::io(format!("open gradient JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> HueforgeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HueforgeError::serde(format!("serialize gradient JSON: {e}")))
    }

    pub(crate) fn fresh_id(&mut self) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn replace_stops<C: Into<String>>(
        &mut self,
        stops: impl IntoIterator<Item = (C, f64)>,
    ) {
        let stops: Vec<(String, f64)> = stops.into_iter().map(|(c, p)| (c.into(), p)).collect();
        self.stops.clear();
        for (color, position) in stops {
            let id = self.fresh_id();
            self.stops.push(ColorStop {
                id,
                color,
                position,
            });
        }
        self.sort_stops();
    }

    pub(crate) fn sort_stops(&mut self) {
        self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    }
}

fn check_amount(what: &str, v: f64, max: f64) -> HueforgeResult<()> {
    if !v.is_finite() || !(0.0..=max).contains(&v) {
        return Err(HueforgeError::validation(format!(
            "{what} must be within 0..={max} (got {v})"
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
struct StopDef {
    #[serde(default)]
    id: Option<StopId>,
    color: String,
    position: f64,
}

#[derive(Deserialize)]
struct GradientSpecDef {
    stops: Vec<StopDef>,
    #[serde(default)]
    shape: GradientShape,
    #[serde(default = "default_angle")]
    angle: f64,
    #[serde(default)]
    noise: EffectToggle,
    #[serde(default)]
    blur: EffectToggle,
}

fn default_angle() -> f64 {
    DEFAULT_ANGLE
}

impl TryFrom<GradientSpecDef> for GradientSpec {
    type Error = String;

    fn try_from(def: GradientSpecDef) -> Result<Self, Self::Error> {
        let mut seen = std::collections::HashSet::new();
        for id in def.stops.iter().filter_map(|s| s.id) {
            if !seen.insert(id) {
                return Err(format!("duplicate stop id {}", id.0));
            }
        }

        let mut next_id = def
            .stops
            .iter()
            .filter_map(|s| s.id)
            .map(|id| id.0)
            .max()
            .unwrap_or(0)
            + 1;
        let mut stops = Vec::with_capacity(def.stops.len());
        for s in def.stops {
            let id = match s.id {
                Some(id) => id,
                None => {
                    let id = StopId(next_id);
                    next_id += 1;
                    id
                }
            };
            stops.push(ColorStop {
                id,
                color: s.color,
                position: s.position,
            });
        }

        let mut spec = Self {
            stops,
            shape: def.shape,
            angle: def.angle,
            noise: def.noise,
            blur: def.blur,
            next_id,
        };
        spec.sort_stops();
        Ok(spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/model.rs"]
mod tests;
