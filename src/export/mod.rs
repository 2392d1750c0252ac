pub(crate) mod css;
pub(crate) mod jpeg;
pub(crate) mod sink;
pub(crate) mod target;

use crate::foundation::error::HueforgeResult;
use crate::foundation::random::RandomSource;
use crate::gradient::model::GradientSpec;
use crate::render::raster::render_raster;
use crate::render::vector::build_vector_document;
use jpeg::{JpegOpts, encode_jpeg};
use sink::{ExportArtifact, ExportSink};
use target::{AspectRatio, ExportKind, ExportTarget};

/// Render `spec` at the export size of `ratio` with effects on and encode it as JPEG.
#[tracing::instrument(skip(spec, opts, rng), fields(aspect = %ratio))]
pub fn export_raster(
    spec: &GradientSpec,
    ratio: AspectRatio,
    opts: &JpegOpts,
    rng: &mut dyn RandomSource,
) -> HueforgeResult<ExportArtifact> {
    let target = ExportTarget::new(ratio, ExportKind::Raster);
    let (width, height) = target.dimensions();
    let frame = render_raster(spec, width, height, true, rng)?;
    let bytes = encode_jpeg(&frame, opts.quality, opts.bg_rgba)?;
    tracing::debug!(width, height, bytes = bytes.len(), "raster export encoded");
    Ok(ExportArtifact {
        file_name: target.file_name(),
        mime: target.kind.mime(),
        bytes,
    })
}

/// Build the SVG document for `spec` at the export size of `ratio`.
#[tracing::instrument(skip(spec, rng), fields(aspect = %ratio))]
pub fn export_vector(
    spec: &GradientSpec,
    ratio: AspectRatio,
    rng: &mut dyn RandomSource,
) -> HueforgeResult<ExportArtifact> {
    let target = ExportTarget::new(ratio, ExportKind::Vector);
    let (width, height) = target.dimensions();
    let svg = build_vector_document(spec, width, height, rng)?;
    Ok(ExportArtifact {
        file_name: target.file_name(),
        mime: target.kind.mime(),
        bytes: svg.into_bytes(),
    })
}

/// Produce the artifact for `target` and hand it to `sink`.
pub fn export_to_sink(
    spec: &GradientSpec,
    target: ExportTarget,
    opts: &JpegOpts,
    rng: &mut dyn RandomSource,
    sink: &mut dyn ExportSink,
) -> HueforgeResult<()> {
    let artifact = match target.kind {
        ExportKind::Raster => export_raster(spec, target.aspect_ratio, opts, rng)?,
        ExportKind::Vector => export_vector(spec, target.aspect_ratio, rng)?,
    };
    sink.deliver(artifact)
}

#[cfg(test)]
#[path = "../../tests/unit/export/mod.rs"]
mod tests;
