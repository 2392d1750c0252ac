//! Reducer over [`GradientSpec`]: every edit goes through [`GradientSpec::apply`].
//!
//! Invalid requests are rejected without touching the gradient; the return value says whether
//! the action was applied.

use crate::color::model::{Color, blend_css_colors};
use crate::foundation::random::RandomSource;
use crate::gradient::model::{
    ColorStop, GradientShape, GradientSpec, MAX_ANGLE, MAX_BLUR_RADIUS, MAX_NOISE_AMOUNT,
    MAX_STOPS, MIN_STOPS, StopId,
};
use crate::gradient::preset::find_preset;

/// One editing command.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Insert a blended stop in the widest gap.
    AddStop,
    /// Remove a stop by id.
    RemoveStop(StopId),
    /// Replace a stop's color and position.
    UpdateStop {
        /// Stop to edit.
        id: StopId,
        /// New CSS color.
        color: String,
        /// New position in percent.
        position: f64,
    },
    /// Set the linear angle in degrees (clamped to `0..=360`).
    SetAngle(f64),
    /// Switch between linear and radial.
    SetShape(GradientShape),
    /// Toggle noise.
    SetNoiseEnabled(bool),
    /// Set the noise amount (clamped to `0..=200`).
    SetNoiseAmount(f64),
    /// Toggle blur.
    SetBlurEnabled(bool),
    /// Set the blur radius (clamped to `0..=50`).
    SetBlurAmount(f64),
    /// Permute colors and redraw positions (and the angle when linear).
    Shuffle,
    /// Replace everything with a built-in preset.
    ApplyPreset(String),
    /// Back to the default gradient.
    Reset,
}

impl Action {
    /// Whether applying this action deselects the currently selected preset.
    pub fn clears_preset(&self) -> bool {
        matches!(
            self,
            Self::AddStop
                | Self::RemoveStop(_)
                | Self::UpdateStop { .. }
                | Self::Shuffle
                | Self::Reset
        )
    }
}

impl GradientSpec {
    /// Apply `action`; returns `false` (and leaves `self` untouched) when it is rejected.
    pub fn apply(&mut self, action: Action, rng: &mut dyn RandomSource) -> bool {
        let applied = match &action {
            Action::AddStop => self.add_stop(),
            Action::RemoveStop(id) => self.remove_stop(*id),
            Action::UpdateStop {
                id,
                color,
                position,
            } => self.update_stop(*id, color, *position),
            Action::SetAngle(angle) => set_clamped(&mut self.angle, *angle, MAX_ANGLE),
            Action::SetShape(shape) => {
                self.shape = *shape;
                true
            }
            Action::SetNoiseEnabled(on) => {
                self.noise.enabled = *on;
                true
            }
            Action::SetNoiseAmount(v) => set_clamped(&mut self.noise.amount, *v, MAX_NOISE_AMOUNT),
            Action::SetBlurEnabled(on) => {
                self.blur.enabled = *on;
                true
            }
            Action::SetBlurAmount(v) => set_clamped(&mut self.blur.amount, *v, MAX_BLUR_RADIUS),
            Action::Shuffle => self.shuffle(rng),
            Action::ApplyPreset(id) => self.apply_preset(id),
            Action::Reset => {
                *self = GradientSpec::default();
                true
            }
        };
        if !applied {
            tracing::debug!(?action, "gradient action rejected");
        }
        applied
    }

    /// Insert a stop in the middle of the widest gap, colored as the 50/50 blend of its
    /// neighbours. Rejected at 5 stops, below 2 stops, or when no gap exceeds 1%.
    pub fn add_stop(&mut self) -> bool {
        let n = self.stops.len();
        if !(MIN_STOPS..MAX_STOPS).contains(&n) {
            return false;
        }

        let mut insert_at = 0usize;
        let mut largest_gap = f64::NEG_INFINITY;
        for (i, pair) in self.stops.windows(2).enumerate() {
            let gap = pair[1].position - pair[0].position;
            if gap > largest_gap {
                largest_gap = gap;
                insert_at = i;
            }
        }
        if largest_gap <= 1.0 {
            return false;
        }

        let left = &self.stops[insert_at];
        let right = &self.stops[insert_at + 1];
        let mut position = (left.position + largest_gap / 2.0).round();
        if position <= left.position {
            position = left.position + 1.0;
        }
        if position >= right.position {
            position = right.position - 1.0;
        }
        let position = position.clamp(0.0, 100.0);
        let color = blend_css_colors(&left.color, &right.color);

        let id = self.fresh_id();
        self.stops.push(ColorStop {
            id,
            color,
            position,
        });
        self.sort_stops();
        true
    }

    /// Remove the stop `id`; rejected when it would leave fewer than 2 stops.
    pub fn remove_stop(&mut self, id: StopId) -> bool {
        if self.stops.len() <= MIN_STOPS {
            return false;
        }
        let before = self.stops.len();
        self.stops.retain(|s| s.id != id);
        self.stops.len() != before
    }

    /// Replace color and position of `id`. The color must parse; position is clamped.
    pub fn update_stop(&mut self, id: StopId, color: &str, position: f64) -> bool {
        if !position.is_finite() || Color::parse(color).is_err() {
            return false;
        }
        let Some(stop) = self.stops.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        stop.color = color.to_owned();
        // `+ 0.0` turns -0.0 into 0.0 so formatted output never reads `-0%`.
        stop.position = position.clamp(0.0, 100.0) + 0.0;
        self.sort_stops();
        true
    }

    /// Permute colors across the stops, pin the ends to 0 and 100, redraw unique interior
    /// positions in `1..=99`, and redraw the angle (`0..=360`) when linear.
    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) -> bool {
        let n = self.stops.len();
        if n == 0 {
            return false;
        }

        let mut colors: Vec<String> = self.stops.iter().map(|s| s.color.clone()).collect();
        for i in (1..colors.len()).rev() {
            let j = rng.next_below(i as u32 + 1) as usize;
            colors.swap(i, j);
        }

        let positions: Vec<f64> = if n <= 2 {
            [0.0, 100.0][..n].to_vec()
        } else {
            let mut pool: Vec<u32> = (1..=99).collect();
            let mut interior: Vec<u32> = (0..n - 2)
                .map(|_| {
                    let k = rng.next_below(pool.len() as u32) as usize;
                    pool.swap_remove(k)
                })
                .collect();
            interior.sort_unstable();
            std::iter::once(0.0)
                .chain(interior.into_iter().map(f64::from))
                .chain(std::iter::once(100.0))
                .collect()
        };

        for ((stop, color), position) in self.stops.iter_mut().zip(colors).zip(positions) {
            stop.color = color;
            stop.position = position;
        }
        self.sort_stops();

        if self.shape == GradientShape::Linear {
            self.angle = f64::from(rng.next_below(MAX_ANGLE as u32 + 1));
        }
        true
    }

    /// Replace the gradient with the built-in preset `id`; unknown ids are rejected.
    pub fn apply_preset(&mut self, id: &str) -> bool {
        match find_preset(id) {
            Some(preset) => {
                preset.apply_to(self);
                true
            }
            None => false,
        }
    }
}

fn set_clamped(slot: &mut f64, v: f64, max: f64) -> bool {
    if !v.is_finite() {
        return false;
    }
    *slot = v.clamp(0.0, max) + 0.0;
    true
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/edit.rs"]
mod tests;
