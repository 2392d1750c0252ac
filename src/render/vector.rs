//! Standalone SVG rendition of a [`GradientSpec`].
//!
//! Blur maps to `feGaussianBlur`. Per-pixel noise has no vector equivalent, so it is
//! approximated with fractal turbulence soft-light blended over the blurred base; the
//! frequency and opacity constants below are a tuned default, not a physical model.

use crate::color::model::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{HueforgeError, HueforgeResult};
use crate::foundation::random::RandomSource;
use crate::gradient::geometry::{linear_endpoints, radial_params};
use crate::gradient::model::{GradientShape, GradientSpec, MAX_NOISE_AMOUNT};
use std::fmt::Write as _;

/// `id` of the single gradient definition.
pub const GRADIENT_ID: &str = "hueforge-gradient";
/// `id` of the effects filter, present only when blur or noise is active.
pub const FILTER_ID: &str = "hueforge-effects";

const NOISE_BASE_FREQUENCY: f64 = 0.02;
const NOISE_FREQUENCY_SPAN: f64 = 0.08;
const NOISE_MAX_OPACITY: f64 = 0.6;
const TURBULENCE_SEED_RANGE: u32 = 10_000;

/// Build a self-contained SVG document for `spec` at `width x height`.
///
/// The random source is consulted once, for the turbulence seed, and only when noise is
/// active.
#[tracing::instrument(skip(spec, rng), fields(shape = ?spec.shape))]
pub fn build_vector_document(
    spec: &GradientSpec,
    width: u32,
    height: u32,
    rng: &mut dyn RandomSource,
) -> HueforgeResult<String> {
    let canvas = Canvas::new(width, height)?;
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));

    let stops = spec
        .stops()
        .iter()
        .map(|stop| stop_element(&stop.color, stop.position))
        .collect::<Vec<_>>()
        .join("\n      ");

    let gradient = match spec.shape {
        GradientShape::Linear => {
            let (p1, p2) = linear_endpoints(spec.angle, w, h)?;
            format!(
                "<linearGradient id=\"{GRADIENT_ID}\" gradientUnits=\"userSpaceOnUse\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">\n      {stops}\n    </linearGradient>",
                p1.x, p1.y, p2.x, p2.y
            )
        }
        GradientShape::Radial => {
            let (center, radius) = radial_params(w, h)?;
            format!(
                "<radialGradient id=\"{GRADIENT_ID}\" gradientUnits=\"userSpaceOnUse\" cx=\"{}\" cy=\"{}\" r=\"{radius}\">\n      {stops}\n    </radialGradient>",
                center.x, center.y
            )
        }
    };

    let filter = effects_filter(spec, rng);
    let mut defs = gradient;
    let mut rect_filter = String::new();
    if let Some(filter) = filter {
        defs.push_str("\n    ");
        defs.push_str(&filter);
        rect_filter = format!(" filter=\"url(#{FILTER_ID})\"");
    }

    let mut svg = String::new();
    write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n  <defs>\n    {defs}\n  </defs>\n  <rect width=\"{width}\" height=\"{height}\" fill=\"url(#{GRADIENT_ID})\"{rect_filter} />\n</svg>"
    )
    .map_err(|e| HueforgeError::render(format!("format svg document: {e}")))?;
    Ok(svg)
}

fn stop_element(color: &str, position: f64) -> String {
    match Color::parse(color) {
        Ok(c) => {
            let opacity = if c.is_opaque() {
                String::new()
            } else {
                format!(" stop-opacity=\"{:.2}\"", c.a)
            };
            format!(
                "<stop offset=\"{position}%\" stop-color=\"{}\"{opacity} />",
                c.to_hex()
            )
        }
        Err(_) => format!(
            "<stop offset=\"{position}%\" stop-color=\"{}\" />",
            escape_attr(color)
        ),
    }
}

fn effects_filter(spec: &GradientSpec, rng: &mut dyn RandomSource) -> Option<String> {
    let blur = spec.blur.active_amount();
    let noise = spec.noise.active_amount();
    if blur.is_none() && noise.is_none() {
        return None;
    }

    let deviation = blur.map_or(0.0, |r| r / 2.0);
    let mut primitives = vec![format!(
        "<feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"{deviation}\" result=\"blurred\" />"
    )];

    if let Some(amount) = noise {
        let strength = (amount / MAX_NOISE_AMOUNT).min(1.0);
        let frequency = NOISE_BASE_FREQUENCY + strength * NOISE_FREQUENCY_SPAN;
        let opacity = strength * NOISE_MAX_OPACITY;
        let seed = rng.next_below(TURBULENCE_SEED_RANGE);
        primitives.push(format!(
            "<feTurbulence type=\"fractalNoise\" baseFrequency=\"{frequency:.3}\" numOctaves=\"3\" seed=\"{seed}\" result=\"noise\" />"
        ));
        primitives.push(format!(
            "<feColorMatrix in=\"noise\" type=\"matrix\" values=\"0.6 0 0 0 0 0 0.6 0 0 0 0 0 0.6 0 0 0 0 0 {opacity:.2} 0\" result=\"noiseAlpha\" />"
        ));
        primitives.push(
            "<feBlend in=\"blurred\" in2=\"noiseAlpha\" mode=\"soft-light\" result=\"withNoise\" />"
                .to_string(),
        );
    }

    Some(format!(
        "<filter id=\"{FILTER_ID}\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\" color-interpolation-filters=\"sRGB\">\n      {}\n    </filter>",
        primitives.join("\n      ")
    ))
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Check that `svg` parses as a renderable SVG tree.
pub fn validate_vector_document(svg: &str) -> HueforgeResult<()> {
    let opt = usvg::Options::default();
    usvg::Tree::from_data(svg.as_bytes(), &opt)
        .map(|_| ())
        .map_err(|e| HueforgeError::render(format!("svg document does not parse: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/vector.rs"]
mod tests;
