//! babyplots-rs: build babyplots 3D visualization scenes in Rust.
//!
//! A [`Babyplot`] collects plots (point clouds, heat maps, image stacks,
//! meshes) into a scene document that the babyplots browser engine renders.
//! The scene is exported as JSON or as a standalone HTML page.
//!
//! # Quick Start
//!
//! ```no_run
//! use babyplots_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let mut scene = Babyplot::builder().width(800).turntable(true).build()?;
//!     scene.add_plot(
//!         vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!         CoordinatePlotKind::PointCloud,
//!         ColorBy::Values,
//!         vec![0.1, 0.5, 0.9],
//!         json!({"colorScale": "Viridis", "showLegend": true}),
//!     )?;
//!
//!     let config = OutputConfig::from_file("babyplots.js")?;
//!     scene.save_html("scene.html", &config)?;
//!     Ok(())
//! }
//! ```
//!
//! # Plot kinds
//!
//! - Coordinate plots ([`CoordinatePlotKind`]): point clouds, shape clouds,
//!   heat maps, surfaces and lines
//! - Image stacks, sparsified from dense arrays or image files
//! - Mesh streams (animated frame sequences) and mesh objects
//!
//! # Options
//!
//! Every plot kind has a typed option set ([`PlotOptions`],
//! [`ImageStackOptions`], [`MeshStreamOptions`], [`MeshObjectOptions`]).
//! Options are passed either typed or as a JSON object; JSON keys are merged
//! over the defaults and unknown keys are rejected.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

mod image_stack;
mod init;
mod mesh;
mod output;
mod plots;
mod scene;

pub use init::init_logging;
pub use scene::{Babyplot, BabyplotBuilder};

// Re-export core types
pub use babyplots_core::{
    is_hex_color, parse_pixels, AxisOptions, BabyplotsError, ColorBy, ColorVar, CoordinatePlot,
    CoordinatePlotKind, Coordinates, Dimension, ImageAttributes, ImageStackOptions,
    ImageStackPlot, IntoOptions, LegendOptions, MeshObjectOptions, MeshObjectPlot,
    MeshStreamOptions, MeshStreamPlot, OptionSet, PlotOptions, PlotRecord, Result, SceneOptions,
    UpAxis, Vec3, ViewSize, VisualizationDocument,
};

// Re-export output types
pub use babyplots_render::{
    display_id, render_fragment, render_page, sanitize_identifier, write_html, write_json,
    EngineSource, OutputConfig, View,
};

// Re-export input types
pub use babyplots_structures::{
    encode, encode_volume, flat_index, load_mesh_object, read_image, read_mesh_file, read_stack,
    read_tiff_stack, unflatten_index, ColorSource, Column, SparseImage, Table, Threshold,
    DEFAULT_THRESHOLD,
};

pub use serde_json::{json, Map, Value};
