//! Coordinate plots: point clouds, shape clouds, heat maps, surfaces, lines.

use crate::{
    Babyplot, ColorBy, ColorSource, ColorVar, CoordinatePlot, CoordinatePlotKind, Coordinates,
    IntoOptions, PlotOptions, PlotRecord, Result, Table,
};

impl Babyplot {
    /// Adds a coordinate plot and returns its position in the scene.
    ///
    /// `color_var` needs one entry per point. Heat maps and surfaces also
    /// accept one entry per grid cell.
    ///
    /// ```
    /// use babyplots_rs::*;
    ///
    /// let mut scene = Babyplot::new();
    /// scene
    ///     .add_plot(
    ///         vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
    ///         CoordinatePlotKind::PointCloud,
    ///         ColorBy::Categories,
    ///         vec!["a", "b"],
    ///         json!({"size": 2, "showLegend": true}),
    ///     )
    ///     .unwrap();
    /// assert_eq!(scene.len(), 1);
    /// ```
    pub fn add_plot(
        &mut self,
        coordinates: impl Into<Coordinates>,
        kind: CoordinatePlotKind,
        color_by: ColorBy,
        color_var: impl Into<ColorVar>,
        options: impl IntoOptions<PlotOptions>,
    ) -> Result<usize> {
        let options = options.into_options(kind.as_str())?;
        let plot = CoordinatePlot::new(
            kind,
            coordinates.into(),
            color_by,
            color_var.into(),
            options,
        )?;
        Ok(self.push(PlotRecord::coordinate(kind, plot)))
    }

    /// Adds a coordinate plot built from table columns.
    ///
    /// A color column is removed from the coordinate candidates. With empty
    /// `coord_columns` every other column becomes a coordinate, in table
    /// order.
    pub fn add_plot_from_table(
        &mut self,
        table: &Table,
        kind: CoordinatePlotKind,
        color_by: ColorBy,
        color: impl Into<ColorSource>,
        coord_columns: &[&str],
        options: impl IntoOptions<PlotOptions>,
    ) -> Result<usize> {
        let (coordinates, color_var) = table.to_plot_data(&color.into(), coord_columns)?;
        self.add_plot(coordinates, kind, color_by, color_var, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BabyplotsError;
    use serde_json::json;

    #[test]
    fn test_add_plot_defaults() {
        let mut scene = Babyplot::new();
        let index = scene
            .add_plot(
                vec![[0.0, 0.0, 0.0], [1.0, 2.0, 3.0]],
                CoordinatePlotKind::PointCloud,
                ColorBy::Values,
                vec![0.1, 0.9],
                PlotOptions::default(),
            )
            .unwrap();
        assert_eq!(index, 0);

        let plot = scene.plots()[0].as_coordinate_plot().unwrap();
        assert_eq!(plot.options, PlotOptions::default());
        assert_eq!(plot.coordinates.num_points(), 2);
    }

    #[test]
    fn test_add_plot_merges_dynamic_options() {
        let mut scene = Babyplot::new();
        scene
            .add_plot(
                vec![[0.0, 0.0, 0.0]],
                CoordinatePlotKind::ShapeCloud,
                ColorBy::Direct,
                vec!["#ff0000"],
                json!({"shape": "box", "size": 3.0}),
            )
            .unwrap();

        let plot = scene.plots()[0].as_coordinate_plot().unwrap();
        assert_eq!(plot.options.shape.as_deref(), Some("box"));
        assert_eq!(plot.options.size, 3.0);
        assert_eq!(plot.options.color_scale, PlotOptions::default().color_scale);
    }

    #[test]
    fn test_rejected_plot_leaves_scene_untouched() {
        let mut scene = Babyplot::new();

        let err = scene
            .add_plot(
                vec![[0.0, 0.0, 0.0]],
                CoordinatePlotKind::PointCloud,
                ColorBy::Values,
                vec![0.5],
                json!({"pointSize": 2}),
            )
            .unwrap_err();
        assert!(matches!(err, BabyplotsError::UnknownOption { ref key, .. } if key == "pointSize"));

        let err = scene
            .add_plot(
                vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                CoordinatePlotKind::Line,
                ColorBy::Values,
                vec![0.5],
                PlotOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            BabyplotsError::SizeMismatch {
                expected: 2,
                actual: 1
            }
        ));

        assert!(scene.is_empty());
    }

    #[test]
    fn test_heat_map_accepts_per_cell_colors() {
        let mut scene = Babyplot::new();
        scene
            .add_plot(
                vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
                CoordinatePlotKind::HeatMap,
                ColorBy::Values,
                vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
                PlotOptions::default(),
            )
            .unwrap();
        assert_eq!(scene.plots()[0].plot_type(), "heatMap");
    }

    #[test]
    fn test_add_plot_from_table() {
        let table = Table::new()
            .with_column("x", vec![0.0, 1.0])
            .unwrap()
            .with_column("y", vec![2.0, 3.0])
            .unwrap()
            .with_column("group", vec!["a", "b"])
            .unwrap();

        let mut scene = Babyplot::new();
        scene
            .add_plot_from_table(
                &table,
                CoordinatePlotKind::PointCloud,
                ColorBy::Categories,
                "group",
                &[],
                PlotOptions::default(),
            )
            .unwrap();

        let plot = scene.plots()[0].as_coordinate_plot().unwrap();
        assert_eq!(plot.coordinates.rows(), &[vec![0.0, 2.0], vec![1.0, 3.0]]);
        assert_eq!(plot.color_var, ColorVar::from(vec!["a", "b"]));

        let err = scene
            .add_plot_from_table(
                &table,
                CoordinatePlotKind::PointCloud,
                ColorBy::Categories,
                "cluster",
                &[],
                PlotOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, BabyplotsError::KeyNotFound(_)));
        assert_eq!(scene.len(), 1);
    }
}
