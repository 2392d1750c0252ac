use crate::color::model::Color;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{HueforgeError, HueforgeResult};
use crate::foundation::math::{premul_over_px, unpremultiply_in_place};
use crate::foundation::random::RandomSource;
use crate::gradient::geometry::GradientGeometry;
use crate::gradient::model::GradientSpec;
use crate::render::backend::FrameRGBA;
use crate::render::blur::blur_rgba8_premul;
use crate::render::noise::apply_noise_rgba8;
use rayon::prelude::*;

/// Stop offsets and premultiplied colors ready for sampling.
#[derive(Clone, Debug)]
pub(crate) struct StopRamp {
    offsets: Vec<f64>,
    colors: Vec<[f32; 4]>,
}

impl StopRamp {
    pub(crate) fn from_spec(spec: &GradientSpec) -> HueforgeResult<Self> {
        if spec.stops().is_empty() {
            return Err(HueforgeError::validation("gradient has no stops"));
        }
        let mut offsets = Vec::with_capacity(spec.stops().len());
        let mut colors = Vec::with_capacity(spec.stops().len());
        for stop in spec.stops() {
            let c = Color::parse(&stop.color)?;
            offsets.push((stop.position / 100.0).clamp(0.0, 1.0));
            colors.push([
                (c.r * c.a * 255.0) as f32,
                (c.g * c.a * 255.0) as f32,
                (c.b * c.a * 255.0) as f32,
                (c.a * 255.0) as f32,
            ]);
        }
        Ok(Self { offsets, colors })
    }

    /// Premultiplied RGBA8 at offset `t`; clamps to the end colors outside the stops.
    pub(crate) fn sample(&self, t: f64) -> [u8; 4] {
        let n = self.offsets.len();
        let last = n - 1;
        if t.is_nan() || t <= self.offsets[0] {
            return quantize(self.colors[0]);
        }
        if t >= self.offsets[last] {
            return quantize(self.colors[last]);
        }
        for i in 0..last {
            let (a, b) = (self.offsets[i], self.offsets[i + 1]);
            if t < b {
                let span = b - a;
                let f = if span <= 0.0 { 1.0 } else { (t - a) / span } as f32;
                let (c0, c1) = (self.colors[i], self.colors[i + 1]);
                return quantize([
                    c0[0] + (c1[0] - c0[0]) * f,
                    c0[1] + (c1[1] - c0[1]) * f,
                    c0[2] + (c1[2] - c0[2]) * f,
                    c0[3] + (c1[3] - c0[3]) * f,
                ]);
            }
        }
        quantize(self.colors[last])
    }
}

fn quantize(c: [f32; 4]) -> [u8; 4] {
    let q = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    let a = q(c[3]);
    // Premultiplied channels must not exceed alpha.
    [q(c[0]).min(a), q(c[1]).min(a), q(c[2]).min(a), a]
}

/// Fill a `canvas`-sized premultiplied buffer with the gradient, sampling pixel centres.
pub(crate) fn fill_gradient_premul(
    canvas: Canvas,
    geometry: &GradientGeometry,
    ramp: &StopRamp,
) -> HueforgeResult<Vec<u8>> {
    let mut bytes = vec![0u8; canvas.byte_len()?];
    let stride = (canvas.width as usize) * 4;
    bytes
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let py = y as f64 + 0.5;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let t = geometry.offset_at(Point::new(x as f64 + 0.5, py));
                px.copy_from_slice(&ramp.sample(t));
            }
        });
    Ok(bytes)
}

/// Render `spec` into a `width x height` straight-alpha frame.
///
/// With `apply_effects`, an active blur renders into a buffer padded by `ceil(radius * 4)`
/// so the blur never samples past real gradient data at the crop edge, and active noise
/// is added last, inside the target rectangle only. Without noise the output is
/// deterministic.
#[tracing::instrument(skip(spec, rng), fields(shape = ?spec.shape, stops = spec.stops().len()))]
pub fn render_raster(
    spec: &GradientSpec,
    width: u32,
    height: u32,
    apply_effects: bool,
    rng: &mut dyn RandomSource,
) -> HueforgeResult<FrameRGBA> {
    let target = Canvas::new(width, height)?;
    let ramp = StopRamp::from_spec(spec)?;

    let blur_radius = spec.blur.active_amount().filter(|_| apply_effects);
    let mut data = match blur_radius {
        Some(radius) => render_blurred(spec, target, &ramp, radius)?,
        None => {
            let geometry =
                GradientGeometry::for_spec(spec, f64::from(width), f64::from(height))?;
            fill_gradient_premul(target, &geometry, &ramp)?
        }
    };
    unpremultiply_in_place(&mut data);

    if apply_effects && let Some(amount) = spec.noise.active_amount() {
        apply_noise_rgba8(&mut data, amount, rng);
    }

    Ok(FrameRGBA {
        width,
        height,
        data,
        premultiplied: false,
    })
}

fn render_blurred(
    spec: &GradientSpec,
    target: Canvas,
    ramp: &StopRamp,
    radius: f64,
) -> HueforgeResult<Vec<u8>> {
    let pad = (radius * 4.0).ceil() as u32;
    let padded = target.padded(pad)?;
    let geometry =
        GradientGeometry::for_spec(spec, f64::from(padded.width), f64::from(padded.height))?;
    let base = fill_gradient_premul(padded, &geometry, ramp)?;

    let blurred = blur_rgba8_premul(&base, padded.width, padded.height, radius)?;

    let mut out = crop(&blurred, padded, pad, target)?;
    let under = crop(&base, padded, pad, target)?;
    for (dst, base_px) in out.chunks_exact_mut(4).zip(under.chunks_exact(4)) {
        let src = [dst[0], dst[1], dst[2], dst[3]];
        let base_px = [base_px[0], base_px[1], base_px[2], base_px[3]];
        dst.copy_from_slice(&premul_over_px(base_px, src));
    }
    Ok(out)
}

fn crop(src: &[u8], from: Canvas, offset: u32, to: Canvas) -> HueforgeResult<Vec<u8>> {
    if offset.saturating_add(to.width) > from.width || offset.saturating_add(to.height) > from.height {
        return Err(HueforgeError::render("crop rectangle exceeds source buffer"));
    }
    let src_stride = (from.width as usize) * 4;
    let dst_stride = (to.width as usize) * 4;
    let mut out = Vec::with_capacity(to.byte_len()?);
    for y in 0..to.height as usize {
        let start = (y + offset as usize) * src_stride + (offset as usize) * 4;
        out.extend_from_slice(&src[start..start + dst_stride]);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
