use crate::foundation::math::clamp_u8;
use crate::foundation::random::RandomSource;

/// Add one uniform draw in `[-amount/2, amount/2)` per pixel to R, G and B.
///
/// Alpha is left untouched. Pixels are visited in row-major order so an injected
/// sequence maps to pixels predictably.
pub(crate) fn apply_noise_rgba8(data: &mut [u8], amount: f64, rng: &mut dyn RandomSource) {
    if !amount.is_finite() || amount <= 0.0 {
        return;
    }
    for px in data.chunks_exact_mut(4) {
        let n = (rng.next_f64() - 0.5) * amount;
        for c in &mut px[..3] {
            *c = clamp_u8(f64::from(*c) + n);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/noise.rs"]
mod tests;
