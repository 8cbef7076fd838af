//! Core data model for babyplots-rs.
//!
//! This crate provides the types that make up a babyplots scene document:
//! - [`SceneOptions`] for global display settings and pixel dimensions
//! - [`PlotRecord`], a closed sum type over the eight plot kinds
//! - Typed option sets with per-key defaults ([`PlotOptions`] and friends)
//! - [`VisualizationDocument`], the JSON wire format read by the engine

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Option structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod document;
pub mod error;
pub mod options;
pub mod plot;
pub mod plot_options;

pub use document::VisualizationDocument;
pub use error::{BabyplotsError, Result};
pub use options::{is_hex_color, parse_pixels, Dimension, SceneOptions, UpAxis, ViewSize};
pub use plot::{
    ColorBy, ColorVar, CoordinatePlot, CoordinatePlotKind, Coordinates, ImageAttributes,
    ImageStackPlot, MeshObjectPlot, MeshStreamPlot, PlotRecord,
};
pub use plot_options::{
    AxisOptions, ImageStackOptions, IntoOptions, LegendOptions, MeshObjectOptions,
    MeshStreamOptions, OptionSet, PlotOptions,
};

// Re-export glam types for convenience
pub use glam::Vec3;
