use crate::export::css::{to_css_text, to_utility_classes};
use crate::export::sink::{ExportArtifact, ExportSink};
use crate::export::target::{AspectRatio, ExportKind, ExportTarget};
use crate::export::{export_raster, export_to_sink, export_vector};
use crate::foundation::error::HueforgeResult;
use crate::foundation::random::{EntropySource, RandomSource};
use crate::gradient::edit::Action;
use crate::gradient::model::GradientSpec;
use crate::render::backend::FrameRGBA;
use crate::render::raster::render_raster;
use crate::session::opts::SessionOpts;

/// Live editing state: a gradient, its preview and the export settings.
///
/// Every accepted [`Action`] re-renders the preview synchronously. Exports read the
/// current spec and never modify it.
#[derive(Debug)]
pub struct GradientSession<R = EntropySource> {
    spec: GradientSpec,
    opts: SessionOpts,
    rng: R,
    preview: Option<FrameRGBA>,
    selected_preset: Option<String>,
    aspect_ratio: AspectRatio,
}

impl GradientSession<EntropySource> {
    /// Session on the default gradient with entropy-seeded randomness.
    pub fn new(opts: SessionOpts) -> Self {
        Self::with_rng(GradientSpec::default(), opts, EntropySource::new())
    }
}

impl Default for GradientSession<EntropySource> {
    fn default() -> Self {
        Self::new(SessionOpts::default())
    }
}

impl<R: RandomSource> GradientSession<R> {
    /// Session over `spec` with an injected random source.
    pub fn with_rng(spec: GradientSpec, opts: SessionOpts, rng: R) -> Self {
        let mut session = Self {
            spec,
            opts,
            rng,
            preview: None,
            selected_preset: None,
            aspect_ratio: AspectRatio::default(),
        };
        session.refresh_preview();
        session
    }

    /// Current gradient.
    pub fn spec(&self) -> &GradientSpec {
        &self.spec
    }

    /// Session configuration.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    /// Last successfully rendered preview, if any.
    pub fn preview(&self) -> Option<&FrameRGBA> {
        self.preview.as_ref()
    }

    /// Id of the preset the gradient was last loaded from, until it is edited.
    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    /// Aspect ratio used by exports.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Change the export aspect ratio.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.aspect_ratio = ratio;
    }

    /// Apply `action` and re-render the preview if it was accepted.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let clears = action.clears_preset();
        let preset = match &action {
            Action::ApplyPreset(id) => Some(id.clone()),
            _ => None,
        };
        if !self.spec.apply(action, &mut self.rng) {
            return false;
        }
        if preset.is_some() {
            self.selected_preset = preset;
        } else if clears {
            self.selected_preset = None;
        }
        self.refresh_preview();
        true
    }

    /// Re-render the preview; on failure the previous frame stays in place.
    pub fn refresh_preview(&mut self) {
        match render_raster(
            &self.spec,
            self.opts.preview_width,
            self.opts.preview_height,
            true,
            &mut self.rng,
        ) {
            Ok(frame) => self.preview = Some(frame),
            Err(e) => tracing::warn!(error = %e, "preview render failed; keeping previous frame"),
        }
    }

    /// CSS declaration for the current spec.
    pub fn css_text(&self) -> String {
        to_css_text(&self.spec)
    }

    /// Utility-class string for the current spec.
    pub fn utility_classes(&self) -> String {
        to_utility_classes(&self.spec)
    }

    /// JPEG export at the current aspect ratio.
    pub fn try_export_raster(&mut self) -> HueforgeResult<ExportArtifact> {
        export_raster(&self.spec, self.aspect_ratio, &self.opts.jpeg, &mut self.rng)
    }

    /// SVG export at the current aspect ratio.
    pub fn try_export_vector(&mut self) -> HueforgeResult<ExportArtifact> {
        export_vector(&self.spec, self.aspect_ratio, &mut self.rng)
    }

    /// Like [`Self::try_export_raster`], logging and discarding the error.
    pub fn export_raster(&mut self) -> Option<ExportArtifact> {
        self.try_export_raster()
            .map_err(|e| tracing::warn!(error = %e, "raster export failed"))
            .ok()
    }

    /// Like [`Self::try_export_vector`], logging and discarding the error.
    pub fn export_vector(&mut self) -> Option<ExportArtifact> {
        self.try_export_vector()
            .map_err(|e| tracing::warn!(error = %e, "vector export failed"))
            .ok()
    }

    /// Export as `kind` at the current aspect ratio into `sink`.
    pub fn export_into(&mut self, kind: ExportKind, sink: &mut dyn ExportSink) -> HueforgeResult<()> {
        let target = ExportTarget::new(self.aspect_ratio, kind);
        export_to_sink(&self.spec, target, &self.opts.jpeg, &mut self.rng, sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
