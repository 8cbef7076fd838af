//! The scene document handed to the rendering engine.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::{SceneOptions, UpAxis};
use crate::plot::PlotRecord;

/// Root object of the wire format: global display settings plus the ordered
/// plot list. Plot order is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationDocument {
    pub turntable: bool,
    pub rotation_rate: f64,
    pub background_color: String,
    pub x_scale: f64,
    pub y_scale: f64,
    pub z_scale: f64,
    pub shape_legend_title: String,
    pub up_axis: UpAxis,
    pub plots: Vec<PlotRecord>,
}

impl Default for VisualizationDocument {
    fn default() -> Self {
        Self::from_options(&SceneOptions::default(), Vec::new())
    }
}

impl VisualizationDocument {
    /// Assembles a document from scene settings and plot records.
    pub fn from_options(options: &SceneOptions, plots: Vec<PlotRecord>) -> Self {
        Self {
            turntable: options.turntable,
            rotation_rate: options.rotation_rate,
            background_color: options.background_color.clone(),
            x_scale: options.x_scale,
            y_scale: options.y_scale,
            z_scale: options.z_scale,
            shape_legend_title: options.shape_legend_title.clone(),
            up_axis: options.up_axis,
            plots,
        }
    }

    /// Returns the number of plots.
    pub fn num_plots(&self) -> usize {
        self.plots.len()
    }

    /// Encodes the document as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the document as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document, e.g. one exported from the engine's UI.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
