//! Plot records: one visualization layer of a scene.
//!
//! [`PlotRecord`] is a closed sum type over the eight plot kinds the engine
//! understands. Each variant carries only the fields its kind needs plus a
//! fully defaulted option set, and serializes as one flat object tagged by
//! `plotType`.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{BabyplotsError, Result};
use crate::plot_options::{ImageStackOptions, MeshObjectOptions, MeshStreamOptions, PlotOptions};

/// Plot kinds built from point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinatePlotKind {
    PointCloud,
    ShapeCloud,
    HeatMap,
    Surface,
    Line,
}

impl CoordinatePlotKind {
    /// Returns the wire name of this plot kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PointCloud => "pointCloud",
            Self::ShapeCloud => "shapeCloud",
            Self::HeatMap => "heatMap",
            Self::Surface => "surface",
            Self::Line => "line",
        }
    }

    /// Whether coordinates describe a value grid rather than a list of points.
    pub fn is_grid(self) -> bool {
        matches!(self, Self::HeatMap | Self::Surface)
    }
}

impl fmt::Display for CoordinatePlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoordinatePlotKind {
    type Err = BabyplotsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pointCloud" => Ok(Self::PointCloud),
            "shapeCloud" => Ok(Self::ShapeCloud),
            "heatMap" => Ok(Self::HeatMap),
            "surface" => Ok(Self::Surface),
            "line" => Ok(Self::Line),
            _ => Err(BabyplotsError::config(format!(
                "unknown plot type '{s}', expected one of pointCloud, shapeCloud, heatMap, surface, line"
            ))),
        }
    }
}

/// How the color variable maps onto colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBy {
    /// Discrete categories, one color per distinct value.
    Categories,
    /// Numeric values mapped through a color scale.
    Values,
    /// Colors given directly as hex strings.
    Direct,
}

impl ColorBy {
    /// Returns the wire name of this color mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Values => "values",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for ColorBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorBy {
    type Err = BabyplotsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "categories" => Ok(Self::Categories),
            "values" => Ok(Self::Values),
            "direct" => Ok(Self::Direct),
            _ => Err(BabyplotsError::config(format!(
                "unknown color mode '{s}', expected one of categories, values, direct"
            ))),
        }
    }
}

/// Point coordinates, one row per point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates(Vec<Vec<f64>>);

impl Coordinates {
    /// Returns the number of rows (points).
    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    /// Returns the total number of values across all rows.
    pub fn num_values(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    /// Consumes the coordinates, returning the nested rows.
    pub fn into_inner(self) -> Vec<Vec<f64>> {
        self.0
    }

    /// Checks that every row has the same width.
    pub fn check_rectangular(&self) -> Result<()> {
        let Some(first) = self.0.first() else {
            return Ok(());
        };
        let width = first.len();
        match self.0.iter().position(|row| row.len() != width) {
            Some(row) => Err(BabyplotsError::config(format!(
                "coordinate row {row} has {} values, expected {width}",
                self.0[row].len()
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<Vec<f64>>> for Coordinates {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }
}

impl<const N: usize> From<Vec<[f64; N]>> for Coordinates {
    fn from(rows: Vec<[f64; N]>) -> Self {
        Self(rows.into_iter().map(|row| row.to_vec()).collect())
    }
}

impl<const N: usize> From<&[[f64; N]]> for Coordinates {
    fn from(rows: &[[f64; N]]) -> Self {
        Self(rows.iter().map(|row| row.to_vec()).collect())
    }
}

impl From<Vec<Vec3>> for Coordinates {
    fn from(points: Vec<Vec3>) -> Self {
        Self::from(points.as_slice())
    }
}

impl From<&[Vec3]> for Coordinates {
    fn from(points: &[Vec3]) -> Self {
        Self(
            points
                .iter()
                .map(|p| p.to_array().iter().map(|&v| f64::from(v)).collect())
                .collect(),
        )
    }
}

impl From<ArrayView2<'_, f64>> for Coordinates {
    fn from(array: ArrayView2<'_, f64>) -> Self {
        Self(array.rows().into_iter().map(|row| row.to_vec()).collect())
    }
}

impl From<Array2<f64>> for Coordinates {
    fn from(array: Array2<f64>) -> Self {
        Self::from(array.view())
    }
}

impl From<Array2<f32>> for Coordinates {
    fn from(array: Array2<f32>) -> Self {
        Self::from(array.mapv(f64::from))
    }
}

/// The per-point variable used for coloring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorVar {
    /// Numeric values (for `values`) or numeric category codes.
    Values(Vec<f64>),
    /// Category names or hex colors.
    Labels(Vec<String>),
}

impl Default for ColorVar {
    fn default() -> Self {
        Self::Values(Vec::new())
    }
}

impl ColorVar {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Labels(labels) => labels.len(),
        }
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for ColorVar {
    fn from(values: Vec<f64>) -> Self {
        Self::Values(values)
    }
}

impl From<Vec<f32>> for ColorVar {
    fn from(values: Vec<f32>) -> Self {
        Self::Values(values.into_iter().map(f64::from).collect())
    }
}

impl From<Vec<i32>> for ColorVar {
    fn from(values: Vec<i32>) -> Self {
        Self::Values(values.into_iter().map(f64::from).collect())
    }
}

impl From<Array1<f64>> for ColorVar {
    fn from(values: Array1<f64>) -> Self {
        Self::Values(values.to_vec())
    }
}

impl From<Vec<String>> for ColorVar {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

impl From<Vec<&str>> for ColorVar {
    fn from(labels: Vec<&str>) -> Self {
        Self::Labels(labels.into_iter().map(str::to_string).collect())
    }
}

/// A point cloud, shape cloud, heat map, surface or line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatePlot {
    pub coordinates: Coordinates,
    pub color_by: ColorBy,
    pub color_var: ColorVar,
    pub options: PlotOptions,
}

impl CoordinatePlot {
    /// Builds a coordinate plot, checking its shape.
    ///
    /// Coordinate rows must share one width, and `color_var` must have one
    /// entry per point (grid kinds also accept one entry per cell).
    pub fn new(
        kind: CoordinatePlotKind,
        coordinates: Coordinates,
        color_by: ColorBy,
        color_var: ColorVar,
        options: PlotOptions,
    ) -> Result<Self> {
        coordinates.check_rectangular()?;

        let expected = coordinates.num_points();
        let actual = color_var.len();
        let per_cell = kind.is_grid() && actual == coordinates.num_values();
        if actual != expected && !per_cell {
            return Err(BabyplotsError::SizeMismatch { expected, actual });
        }

        Ok(Self {
            coordinates,
            color_by,
            color_var,
            options,
        })
    }
}

/// Image stack attributes. `dim` is `[x, y, z, channels]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttributes {
    pub dim: [usize; 4],
}

impl ImageAttributes {
    /// Creates attributes for an `x` by `y` by `z` stack with `channels` channels.
    pub fn new(x: usize, y: usize, z: usize, channels: usize) -> Self {
        Self {
            dim: [x, y, z, channels],
        }
    }

    /// Returns the number of entries in the flattened stack.
    pub fn num_values(&self) -> usize {
        self.dim.iter().product()
    }
}

/// A sparse volumetric image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageStackPlot {
    pub values: Vec<f32>,
    pub indices: Vec<u64>,
    pub attributes: ImageAttributes,
    pub options: ImageStackOptions,
}

impl ImageStackPlot {
    /// Builds an image stack plot; `values` and `indices` must be parallel.
    pub fn new(
        values: Vec<f32>,
        indices: Vec<u64>,
        attributes: ImageAttributes,
        options: ImageStackOptions,
    ) -> Result<Self> {
        if values.len() != indices.len() {
            return Err(BabyplotsError::SizeMismatch {
                expected: values.len(),
                actual: indices.len(),
            });
        }
        Ok(Self {
            values,
            indices,
            attributes,
            options,
        })
    }
}

/// A sequence of mesh files played back as an animation.
///
/// Frame `i` is fetched from `{root_url}/{file_prefix}{i}{file_suffix}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStreamPlot {
    pub root_url: String,
    pub file_prefix: String,
    pub file_suffix: String,
    pub file_iterator_start: i64,
    pub file_iterator_end: i64,
    /// Delay between frames in milliseconds.
    pub frame_delay: u64,
    pub options: MeshStreamOptions,
}

impl MeshStreamPlot {
    /// Builds a mesh stream plot.
    ///
    /// The iterator range must not be reversed and the frame delay must be
    /// positive.
    pub fn new(
        root_url: impl Into<String>,
        file_prefix: impl Into<String>,
        file_suffix: impl Into<String>,
        file_iterator_start: i64,
        file_iterator_end: i64,
        frame_delay: u64,
        options: MeshStreamOptions,
    ) -> Result<Self> {
        if file_iterator_start > file_iterator_end {
            return Err(BabyplotsError::config(format!(
                "mesh stream start index {file_iterator_start} is after end index {file_iterator_end}"
            )));
        }
        if frame_delay == 0 {
            return Err(BabyplotsError::config("mesh stream frame delay must be positive"));
        }
        Ok(Self {
            root_url: root_url.into(),
            file_prefix: file_prefix.into(),
            file_suffix: file_suffix.into(),
            file_iterator_start,
            file_iterator_end,
            frame_delay,
            options,
        })
    }

    /// Returns the number of frames in the stream.
    pub fn num_frames(&self) -> u64 {
        self.file_iterator_start.abs_diff(self.file_iterator_end) + 1
    }
}

/// A single mesh, stored as the raw scene file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshObjectPlot {
    pub mesh_string: String,
    pub options: MeshObjectOptions,
}

/// One layer of a scene, tagged by `plotType` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plotType", rename_all = "camelCase")]
pub enum PlotRecord {
    PointCloud(CoordinatePlot),
    ShapeCloud(CoordinatePlot),
    HeatMap(CoordinatePlot),
    Surface(CoordinatePlot),
    Line(CoordinatePlot),
    ImageStack(ImageStackPlot),
    MeshStream(MeshStreamPlot),
    MeshObject(MeshObjectPlot),
}

impl PlotRecord {
    /// Wraps a coordinate plot in the variant for `kind`.
    pub fn coordinate(kind: CoordinatePlotKind, plot: CoordinatePlot) -> Self {
        match kind {
            CoordinatePlotKind::PointCloud => Self::PointCloud(plot),
            CoordinatePlotKind::ShapeCloud => Self::ShapeCloud(plot),
            CoordinatePlotKind::HeatMap => Self::HeatMap(plot),
            CoordinatePlotKind::Surface => Self::Surface(plot),
            CoordinatePlotKind::Line => Self::Line(plot),
        }
    }

    /// Returns the wire name of this record's plot type.
    pub fn plot_type(&self) -> &'static str {
        match self {
            Self::PointCloud(_) => "pointCloud",
            Self::ShapeCloud(_) => "shapeCloud",
            Self::HeatMap(_) => "heatMap",
            Self::Surface(_) => "surface",
            Self::Line(_) => "line",
            Self::ImageStack(_) => "imageStack",
            Self::MeshStream(_) => "meshStream",
            Self::MeshObject(_) => "meshObject",
        }
    }

    /// Returns the coordinate plot payload, if this is a coordinate kind.
    pub fn as_coordinate_plot(&self) -> Option<&CoordinatePlot> {
        match self {
            Self::PointCloud(plot)
            | Self::ShapeCloud(plot)
            | Self::HeatMap(plot)
            | Self::Surface(plot)
            | Self::Line(plot) => Some(plot),
            _ => None,
        }
    }
}
