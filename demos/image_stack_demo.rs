#![allow(clippy::cast_precision_loss)]
//! Image stack demonstration.
//!
//! This demo shows:
//! - Sparsifying a synthetic two-channel volume with per-channel thresholds
//! - Loading image slices (or multi-page TIFF stacks) from files passed on the command line
//!
//! Run with: cargo run --example `image_stack_demo` [slice.png ... | stack.tif]

use babyplots_rs::*;
use ndarray::Array4;

/// Two overlapping spherical blobs, one per channel.
fn generate_blobs(size: usize) -> Array4<f32> {
    let centers = [
        [0.35, 0.5, 0.5],
        [0.65, 0.5, 0.5],
    ];
    Array4::from_shape_fn((size, size, size, 2), |(z, y, x, c)| {
        let p = [x, y, z].map(|v| v as f32 / (size - 1) as f32);
        let d2: f32 = p
            .iter()
            .zip(centers[c])
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        (-d2 * 40.0).exp()
    })
}

fn main() -> Result<()> {
    init_logging();

    let mut scene = Babyplot::builder()
        .background_color("#000000")
        .up_axis(UpAxis::PosZ)
        .build()?;

    let slices: Vec<String> = std::env::args().skip(1).collect();
    if slices.is_empty() {
        let volume = generate_blobs(32);
        scene.add_image_stack_from_array(
            volume.view(),
            &Threshold::PerChannel(vec![0.3, 0.5]),
            ImageStackOptions::new()
                .with_size(0.5)
                .with_channels(vec!["#ff00ff".into(), "#00ff00".into()], vec![0.6, 0.6]),
        )?;
    } else {
        scene.add_image_stack_from_files(
            slices.as_slice(),
            &Threshold::Global(DEFAULT_THRESHOLD),
            json!({"intensityMode": "mip"}),
        )?;
    }

    if let Some(PlotRecord::ImageStack(plot)) = scene.plots().first() {
        println!(
            "kept {} of {} voxels",
            plot.values.len(),
            plot.attributes.num_values()
        );
    }

    scene.save_html(
        "image_stack_demo.html",
        &OutputConfig::from_url("https://unpkg.com/babyplots/dist/babyplots.js"),
    )?;
    Ok(())
}
