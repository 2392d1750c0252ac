use crate::gradient::model::{
    DEFAULT_ANGLE, DEFAULT_BLUR_RADIUS, DEFAULT_NOISE_AMOUNT, EffectToggle, GradientShape,
    GradientSpec,
};

/// An effect a preset switches on, optionally with an explicit amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetEffect {
    /// Amount to use; `None` falls back to the effect's default.
    pub amount: Option<f64>,
}

/// Named, immutable gradient template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// `(color, position)` pairs.
    pub stops: &'static [(&'static str, f64)],
    /// Linear angle, if any.
    pub angle: Option<f64>,
    /// Radial instead of linear.
    pub radial: bool,
    /// Noise switched on by this preset.
    pub noise: Option<PresetEffect>,
    /// Blur switched on by this preset.
    pub blur: Option<PresetEffect>,
}

impl Preset {
    /// Overwrite `spec` with this preset: stops get fresh ids.
    ///
    /// A radial preset without an angle keeps the current angle for later linear use.
    pub fn apply_to(&self, spec: &mut GradientSpec) {
        spec.replace_stops(self.stops.iter().copied());
        spec.shape = if self.radial {
            GradientShape::Radial
        } else {
            GradientShape::Linear
        };
        match (self.radial, self.angle) {
            (false, angle) => spec.angle = angle.unwrap_or(DEFAULT_ANGLE),
            (true, Some(angle)) => spec.angle = angle,
            (true, None) => {}
        }
        spec.noise = effect_toggle(self.noise, DEFAULT_NOISE_AMOUNT);
        spec.blur = effect_toggle(self.blur, DEFAULT_BLUR_RADIUS);
    }

    /// A fresh spec seeded from this preset.
    pub fn to_spec(&self) -> GradientSpec {
        let mut spec = GradientSpec::default();
        self.apply_to(&mut spec);
        spec
    }
}

fn effect_toggle(effect: Option<PresetEffect>, fallback: f64) -> EffectToggle {
    match effect {
        Some(e) => EffectToggle::on(e.amount.unwrap_or(fallback)),
        None => EffectToggle::off(0.0),
    }
}

const fn with_amount(amount: f64) -> Option<PresetEffect> {
    Some(PresetEffect {
        amount: Some(amount),
    })
}

/// Built-in preset catalog.
pub static PRESETS: &[Preset] = &[
    Preset {
        id: "sunset-glow",
        name: "Sunset Glow",
        stops: &[("#ff9a9e", 0.0), ("#fad0c4", 50.0), ("#fad0c4", 100.0)],
        angle: Some(42.0),
        radial: false,
        noise: None,
        blur: with_amount(16.0),
    },
    Preset {
        id: "ocean-breeze",
        name: "Ocean Breeze",
        stops: &[("#00c6ff", 0.0), ("#0072ff", 50.0), ("#152ea7", 100.0)],
        angle: Some(120.0),
        radial: false,
        noise: None,
        blur: None,
    },
    Preset {
        id: "aurora",
        name: "Aurora",
        stops: &[
            ("#051937", 0.0),
            ("#004d7a", 35.0),
            ("#008793", 68.0),
            ("#00bf72", 85.0),
            ("#a8eb12", 100.0),
        ],
        angle: None,
        radial: true,
        noise: with_amount(18.0),
        blur: None,
    },
    Preset {
        id: "pastel-dream",
        name: "Pastel Dream",
        stops: &[("#a1c4fd", 0.0), ("#c2e9fb", 50.0), ("#fbc2eb", 100.0)],
        angle: Some(75.0),
        radial: false,
        noise: None,
        blur: None,
    },
    Preset {
        id: "midnight-ember",
        name: "Midnight Ember",
        stops: &[
            ("#0f2027", 0.0),
            ("#203a43", 45.0),
            ("#2c5364", 70.0),
            ("#f05f57", 100.0),
        ],
        angle: Some(15.0),
        radial: false,
        noise: with_amount(24.0),
        blur: None,
    },
    Preset {
        id: "golden-hour",
        name: "Golden Hour",
        stops: &[("#f6d365", 0.0), ("#fda085", 100.0)],
        angle: Some(98.0),
        radial: false,
        noise: None,
        blur: with_amount(12.0),
    },
];

/// Look up a built-in preset by id.
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/preset.rs"]
mod tests;
