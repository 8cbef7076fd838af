#![allow(clippy::cast_precision_loss)]
//! Point cloud demonstration.
//!
//! This demo shows:
//! - A torus point cloud colored by height
//! - A shape cloud built from a table, colored by a category column
//! - A heat map with per-cell values
//!
//! The page is written to `point_cloud_demo.html`. Set `BABYPLOTS_JS` to a
//! local engine script to embed it; otherwise the engine is loaded by URL.
//!
//! Run with: cargo run --example `point_cloud_demo`

use babyplots_rs::*;
use std::f32::consts::PI;

const ENGINE_URL: &str = "https://unpkg.com/babyplots/dist/babyplots.js";

/// Generate points on a torus surface.
fn generate_torus(major_radius: f32, minor_radius: f32, n_major: usize, n_minor: usize) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(n_major * n_minor);
    for i in 0..n_major {
        let theta = 2.0 * PI * i as f32 / n_major as f32;
        for j in 0..n_minor {
            let phi = 2.0 * PI * j as f32 / n_minor as f32;
            let x = (major_radius + minor_radius * phi.cos()) * theta.cos();
            let y = minor_radius * phi.sin();
            let z = (major_radius + minor_radius * phi.cos()) * theta.sin();
            points.push(Vec3::new(x, y, z));
        }
    }
    points
}

fn output_config() -> Result<OutputConfig> {
    match std::env::var("BABYPLOTS_JS") {
        Ok(path) => OutputConfig::from_file(path),
        Err(_) => Ok(OutputConfig::from_url(ENGINE_URL)),
    }
}

fn main() -> Result<()> {
    init_logging();

    let mut scene = Babyplot::builder()
        .width(800)
        .height("600px")
        .background_color("#1e1e1eff")
        .turntable(true)
        .shape_legend_title("Groups")
        .show_ui(true)
        .build()?;

    // Torus colored by height
    let torus = generate_torus(2.0, 0.6, 64, 24);
    let heights: Vec<f32> = torus.iter().map(|p| p.y).collect();
    scene.add_plot(
        torus.as_slice(),
        CoordinatePlotKind::PointCloud,
        ColorBy::Values,
        heights,
        json!({
            "name": "torus",
            "colorScale": "Viridis",
            "showLegend": true,
            "legendTitle": "height",
        }),
    )?;

    // Clustered samples from a table
    let mut table = Table::new();
    let (mut xs, mut ys, mut zs, mut groups) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
    for (k, group) in ["alpha", "beta", "gamma"].iter().enumerate() {
        for i in 0..20 {
            let t = i as f64 / 20.0;
            xs.push(k as f64 * 2.0 - 2.0 + t * 0.5);
            ys.push(3.0 + (t * 6.0).sin() * 0.3);
            zs.push(t);
            groups.push(*group);
        }
    }
    table.push_column("x", xs)?;
    table.push_column("y", ys)?;
    table.push_column("z", zs)?;
    table.push_column("group", groups)?;
    scene.add_plot_from_table(
        &table,
        CoordinatePlotKind::ShapeCloud,
        ColorBy::Categories,
        "group",
        &[],
        PlotOptions::default()
            .with_shape("box")
            .with_size(0.5)
            .with_legend("group"),
    )?;

    // Heat map with one value per cell
    let grid: Vec<Vec<f64>> = (0..10)
        .map(|row| (0..10).map(|col| f64::from(row * col) / 81.0).collect())
        .collect();
    let cells: Vec<f64> = grid.iter().flatten().copied().collect();
    scene.add_plot(
        grid,
        CoordinatePlotKind::HeatMap,
        ColorBy::Values,
        cells,
        PlotOptions::default()
            .with_color_scale("Blues")
            .with_axes(AxisOptions::labeled("row", "value", "column")),
    )?;

    scene.save_html("point_cloud_demo.html", &output_config()?)?;
    scene.save_json_pretty("point_cloud_demo.json")?;
    println!("wrote point_cloud_demo.html with {} plot(s)", scene.len());
    Ok(())
}
