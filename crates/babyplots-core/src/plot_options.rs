//! Per-plot option sets and their defaults.
//!
//! Every plot kind has a typed option set whose fields default individually.
//! Dynamic options (a JSON object) are merged over those defaults with
//! [`OptionSet::from_overrides`], which rejects keys the plot kind does not
//! recognize.

use glam::Vec3;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BabyplotsError, Result};
use crate::plot::ColorVar;

/// A typed, fully defaulted set of plot options.
pub trait OptionSet: Default + Serialize + DeserializeOwned {
    /// Returns every key this option set serializes.
    fn known_keys() -> Vec<String> {
        match serde_json::to_value(Self::default()) {
            Ok(Value::Object(map)) => map.into_iter().map(|(key, _)| key).collect(),
            _ => Vec::new(),
        }
    }

    /// Merges `overrides` over the defaults.
    ///
    /// Fails on the first key that is not part of this option set, or on a
    /// value of the wrong type.
    fn from_overrides(plot_type: &str, overrides: Map<String, Value>) -> Result<Self> {
        let known = Self::known_keys();
        if let Some(key) = overrides.keys().find(|key| !known.contains(key)) {
            return Err(BabyplotsError::UnknownOption {
                plot_type: plot_type.to_string(),
                key: key.clone(),
            });
        }

        log::debug!("merging {} option override(s) for {plot_type}", overrides.len());
        serde_json::from_value(Value::Object(overrides)).map_err(|e| {
            BabyplotsError::InvalidOption {
                plot_type: plot_type.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Like [`OptionSet::from_overrides`] but accepts any JSON value.
    ///
    /// `null` yields the defaults; anything other than an object is an error.
    fn from_value(plot_type: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::from_overrides(plot_type, map),
            other => Err(BabyplotsError::InvalidOption {
                plot_type: plot_type.to_string(),
                message: format!("expected an object of options, got {other}"),
            }),
        }
    }
}

/// Anything that can become the option set `T` of a plot.
///
/// Implemented by the typed option sets themselves and by dynamic JSON
/// objects, which are merged over the defaults.
pub trait IntoOptions<T> {
    fn into_options(self, plot_type: &str) -> Result<T>;
}

impl<T: OptionSet> IntoOptions<T> for Value {
    fn into_options(self, plot_type: &str) -> Result<T> {
        T::from_value(plot_type, self)
    }
}

impl<T: OptionSet> IntoOptions<T> for Map<String, Value> {
    fn into_options(self, plot_type: &str) -> Result<T> {
        T::from_overrides(plot_type, self)
    }
}

macro_rules! impl_typed_options {
    ($($ty:ty),*) => {
        $(
            impl IntoOptions<$ty> for $ty {
                fn into_options(self, _plot_type: &str) -> Result<$ty> {
                    Ok(self)
                }
            }
        )*
    };
}

impl_typed_options!(
    PlotOptions,
    ImageStackOptions,
    MeshStreamOptions,
    MeshObjectOptions
);

/// Legend and font settings shared by several plot kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegendOptions {
    pub show_legend: bool,
    pub font_size: f64,
    pub font_color: String,
    pub legend_title: Option<String>,
    pub legend_title_font_size: f64,
    pub legend_title_font_color: String,
    pub legend_position: Option<String>,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show_legend: false,
            font_size: 11.0,
            font_color: "black".to_string(),
            legend_title: None,
            legend_title_font_size: 16.0,
            legend_title_font_color: "black".to_string(),
            legend_position: None,
        }
    }
}

/// Axis, label and tick line settings shared by several plot kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisOptions {
    pub show_axes: [bool; 3],
    pub axis_labels: [String; 3],
    pub axis_colors: [String; 3],
    pub tick_breaks: [f64; 3],
    pub show_tick_lines: [[bool; 2]; 3],
    pub tick_line_colors: [[String; 2]; 3],
}

impl Default for AxisOptions {
    fn default() -> Self {
        let tick_color = || ["#aaaaaa".to_string(), "#aaaaaa".to_string()];
        Self {
            show_axes: [false; 3],
            axis_labels: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            axis_colors: [
                "#666666".to_string(),
                "#666666".to_string(),
                "#666666".to_string(),
            ],
            tick_breaks: [2.0; 3],
            show_tick_lines: [[false; 2]; 3],
            tick_line_colors: [tick_color(), tick_color(), tick_color()],
        }
    }
}

impl AxisOptions {
    /// Shows all three axes with the given labels.
    pub fn labeled(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            show_axes: [true; 3],
            axis_labels: [x.into(), y.into(), z.into()],
            ..Self::default()
        }
    }
}

/// Options for point clouds, shape clouds, heat maps, surfaces and lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotOptions {
    pub name: Option<String>,
    pub size: f64,
    pub color_scale: String,
    pub custom_color_scale: Vec<String>,
    pub color_scale_inverted: bool,
    /// Category order for the legend, as names or numeric codes.
    pub sorted_categories: ColorVar,
    #[serde(flatten)]
    pub legend: LegendOptions,
    pub legend_show_shape: bool,
    #[serde(flatten)]
    pub axes: AxisOptions,
    pub has_animation: bool,
    pub animation_targets: Option<Vec<Vec<f64>>>,
    pub animation_delay: Option<f64>,
    pub animation_duration: Option<f64>,
    pub animation_loop: bool,
    pub colnames: Option<Vec<String>>,
    pub rownames: Option<Vec<String>>,
    pub shape: Option<String>,
    pub shading: bool,
    pub dp_info: Option<Vec<String>>,
    pub labels: Option<Vec<String>>,
    pub label_size: Option<f64>,
    pub label_color: Option<String>,
    pub add_cluster_labels: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            name: None,
            size: 1.0,
            color_scale: "Oranges".to_string(),
            custom_color_scale: Vec::new(),
            color_scale_inverted: false,
            sorted_categories: ColorVar::default(),
            legend: LegendOptions::default(),
            legend_show_shape: false,
            axes: AxisOptions::default(),
            has_animation: false,
            animation_targets: None,
            animation_delay: None,
            animation_duration: None,
            animation_loop: false,
            colnames: None,
            rownames: None,
            shape: None,
            shading: true,
            dp_info: None,
            labels: None,
            label_size: None,
            label_color: None,
            add_cluster_labels: false,
        }
    }
}

impl OptionSet for PlotOptions {}

impl PlotOptions {
    /// Creates plot options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the plot name shown in the shape legend.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the point size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the named color scale.
    pub fn with_color_scale(mut self, color_scale: impl Into<String>) -> Self {
        self.color_scale = color_scale.into();
        self
    }

    /// Shows the color legend with the given title.
    pub fn with_legend(mut self, title: impl Into<String>) -> Self {
        self.legend.show_legend = true;
        self.legend.legend_title = Some(title.into());
        self
    }

    /// Replaces the axis settings.
    pub fn with_axes(mut self, axes: AxisOptions) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the glyph shape used by shape clouds.
    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Animates the points towards `targets`.
    pub fn with_animation(mut self, targets: Vec<Vec<f64>>, delay: f64, duration: f64) -> Self {
        self.has_animation = true;
        self.animation_targets = Some(targets);
        self.animation_delay = Some(delay);
        self.animation_duration = Some(duration);
        self
    }
}

/// Options for image stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageStackOptions {
    pub size: f64,
    pub color_scale: Option<String>,
    #[serde(flatten)]
    pub legend: LegendOptions,
    #[serde(flatten)]
    pub axes: AxisOptions,
    pub intensity_mode: String,
    pub channel_colors: Vec<String>,
    pub channel_opacities: Vec<f64>,
}

impl Default for ImageStackOptions {
    fn default() -> Self {
        Self {
            size: 1.0,
            color_scale: None,
            legend: LegendOptions::default(),
            axes: AxisOptions::default(),
            intensity_mode: "alpha".to_string(),
            channel_colors: vec![
                "#ff0000".to_string(),
                "#00ff00".to_string(),
                "#0000ff".to_string(),
            ],
            channel_opacities: vec![1.0, 1.0, 1.0],
        }
    }
}

impl OptionSet for ImageStackOptions {}

impl ImageStackOptions {
    /// Creates image stack options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the voxel size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets per-channel colors and opacities.
    pub fn with_channels(mut self, colors: Vec<String>, opacities: Vec<f64>) -> Self {
        self.channel_colors = colors;
        self.channel_opacities = opacities;
        self
    }
}

/// Options for streamed mesh sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeshStreamOptions {
    pub mesh_rotation: Vec3,
    pub mesh_offset: Vec3,
    pub clear_coat: bool,
    pub clear_coat_intensity: f64,
}

impl Default for MeshStreamOptions {
    fn default() -> Self {
        Self {
            mesh_rotation: Vec3::ZERO,
            mesh_offset: Vec3::ZERO,
            clear_coat: false,
            clear_coat_intensity: 1.0,
        }
    }
}

impl OptionSet for MeshStreamOptions {}

/// Options for a single mesh object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeshObjectOptions {
    pub mesh_scaling: Vec3,
    pub mesh_rotation: Vec3,
    pub mesh_offset: Vec3,
    #[serde(flatten)]
    pub legend: LegendOptions,
    #[serde(flatten)]
    pub axes: AxisOptions,
}

impl Default for MeshObjectOptions {
    fn default() -> Self {
        Self {
            mesh_scaling: Vec3::ONE,
            mesh_rotation: Vec3::ZERO,
            mesh_offset: Vec3::ZERO,
            legend: LegendOptions::default(),
            axes: AxisOptions::default(),
        }
    }
}

impl OptionSet for MeshObjectOptions {}

impl MeshObjectOptions {
    /// Creates mesh object options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mesh transform: scaling, rotation (radians) and offset.
    pub fn with_transform(mut self, scaling: Vec3, rotation: Vec3, offset: Vec3) -> Self {
        self.mesh_scaling = scaling;
        self.mesh_rotation = rotation;
        self.mesh_offset = offset;
        self
    }
}
