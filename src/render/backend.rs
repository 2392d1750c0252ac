use crate::foundation::error::HueforgeResult;
use crate::foundation::random::{EntropySource, RandomSource};
use crate::gradient::model::GradientSpec;
use crate::render::raster::render_raster;
use crate::render::vector::build_vector_document;

/// A rendered image as RGBA8 pixels.
///
/// Raster output is **straight alpha**; the `premultiplied` flag keeps that explicit at
/// API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of pixel `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// One way of turning a [`GradientSpec`] into an image at a given size.
///
/// Implementations share the gradient geometry; they are visually equivalent, not
/// bit-identical (the vector backend approximates per-pixel noise with turbulence).
pub trait GradientRenderer {
    /// Rendered artifact.
    type Output;

    /// Render `spec` at `width x height`.
    fn render(
        &mut self,
        spec: &GradientSpec,
        width: u32,
        height: u32,
    ) -> HueforgeResult<Self::Output>;
}

/// CPU raster backend producing [`FrameRGBA`].
#[derive(Debug)]
pub struct RasterRenderer<R = EntropySource> {
    rng: R,
    apply_effects: bool,
}

impl RasterRenderer<EntropySource> {
    /// Raster backend with effects on and an entropy-seeded noise source.
    pub fn new() -> Self {
        Self::with_rng(EntropySource::new())
    }
}

impl Default for RasterRenderer<EntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> RasterRenderer<R> {
    /// Raster backend with effects on and an injected noise source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            apply_effects: true,
        }
    }

    /// Turn blur and noise on or off.
    pub fn with_effects(mut self, apply_effects: bool) -> Self {
        self.apply_effects = apply_effects;
        self
    }
}

impl<R: RandomSource> GradientRenderer for RasterRenderer<R> {
    type Output = FrameRGBA;

    fn render(&mut self, spec: &GradientSpec, width: u32, height: u32) -> HueforgeResult<FrameRGBA> {
        render_raster(spec, width, height, self.apply_effects, &mut self.rng)
    }
}

/// SVG backend producing a standalone document.
#[derive(Debug)]
pub struct VectorRenderer<R = EntropySource> {
    rng: R,
}

impl VectorRenderer<EntropySource> {
    /// Vector backend with an entropy-seeded turbulence seed source.
    pub fn new() -> Self {
        Self::with_rng(EntropySource::new())
    }
}

impl Default for VectorRenderer<EntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> VectorRenderer<R> {
    /// Vector backend with an injected seed source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> GradientRenderer for VectorRenderer<R> {
    type Output = String;

    fn render(&mut self, spec: &GradientSpec, width: u32, height: u32) -> HueforgeResult<String> {
        build_vector_document(spec, width, height, &mut self.rng)
    }
}
