//! Hueforge turns a declarative gradient description into pixels, SVG and CSS.
//!
//! A [`GradientSpec`] (2 to 5 color stops, linear or radial shape, optional blur and
//! noise) flows one way through the pipeline:
//!
//! - [`GradientGeometry`] places the gradient line or circle on a target size
//! - [`render_raster`] fills a straight-alpha [`FrameRGBA`], with blur and noise
//! - [`build_vector_document`] emits an equivalent standalone SVG
//! - [`to_css_text`] / [`to_utility_classes`] describe it as CSS
//! - [`export_raster`] / [`export_vector`] produce downloadable [`ExportArtifact`]s
//!
//! Interactive use goes through [`GradientSession`], which applies [`Action`]s and keeps a
//! live preview.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod export;
mod foundation;
mod gradient;
mod render;
mod session;

pub use crate::foundation::core::{Canvas, Point, Rgba8Premul, Vec2};
pub use crate::foundation::error::{HueforgeError, HueforgeResult};
pub use crate::foundation::random::{EntropySource, RandomSource, SeededSource, SequenceSource};

pub use crate::color::model::{Color, FALLBACK_BLEND_COLOR, blend_css_colors};

pub use crate::gradient::edit::Action;
pub use crate::gradient::geometry::{GradientGeometry, linear_endpoints, radial_params};
pub use crate::gradient::model::{
    ColorStop, DEFAULT_ANGLE, DEFAULT_BLUR_RADIUS, DEFAULT_NOISE_AMOUNT, EffectToggle,
    GradientShape, GradientSpec, MAX_ANGLE, MAX_BLUR_RADIUS, MAX_NOISE_AMOUNT, MAX_STOPS,
    MIN_STOPS, StopId,
};
pub use crate::gradient::preset::{PRESETS, Preset, PresetEffect, find_preset};

pub use crate::render::backend::{FrameRGBA, GradientRenderer, RasterRenderer, VectorRenderer};
pub use crate::render::raster::render_raster;
pub use crate::render::vector::{
    FILTER_ID, GRADIENT_ID, build_vector_document, validate_vector_document,
};

pub use crate::export::css::{gradient_value, stop_list, to_css_text, to_utility_classes};
pub use crate::export::jpeg::{DEFAULT_JPEG_QUALITY, JpegOpts, encode_jpeg};
pub use crate::export::sink::{DirSink, ExportArtifact, ExportSink, InMemorySink, ensure_parent_dir};
pub use crate::export::target::{AspectRatio, EXPORT_BASE_WIDTH, ExportKind, ExportTarget};
pub use crate::export::{export_raster, export_to_sink, export_vector};

pub use crate::session::opts::{DEFAULT_PREVIEW_SIZE, SessionOpts};
pub use crate::session::state::GradientSession;
