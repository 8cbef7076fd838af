//! Integration tests for file input and output.

use babyplots_rs::*;
use image::GrayImage;

fn sample_scene() -> Babyplot {
    let mut scene = Babyplot::builder()
        .width(320)
        .height(240)
        .background_color("#202020")
        .show_ui(true)
        .build()
        .unwrap();
    scene
        .add_plot(
            vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
            CoordinatePlotKind::PointCloud,
            ColorBy::Values,
            vec![0.0, 1.0],
            PlotOptions::default(),
        )
        .unwrap();
    scene
}

#[test]
fn test_save_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let scene = sample_scene();

    scene.save_json(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, scene.to_json().unwrap());

    let doc = VisualizationDocument::from_json(&text).unwrap();
    assert_eq!(doc, scene.to_document());

    let pretty = dir.path().join("scene_pretty.json");
    scene.save_json_pretty(&pretty).unwrap();
    assert!(std::fs::read_to_string(&pretty).unwrap().contains('\n'));
}

#[test]
fn test_save_html() {
    let dir = tempfile::tempdir().unwrap();
    let engine = dir.path().join("babyplots.js");
    std::fs::write(&engine, "var Baby = { Plots: function () {} };").unwrap();
    let config = OutputConfig::from_file(&engine).unwrap().with_title("Demo");

    let path = dir.path().join("scene.html");
    let scene = sample_scene();
    scene.save_html(&path, &config).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains("var Baby = { Plots: function () {} };"));
    assert!(html.contains("width=\"320\" height=\"240\""));
    assert!(html.contains("background-color: #202020;"));
    assert!(html.contains("\"plotType\":\"pointCloud\""));
    assert!(html.contains("createButtons"));
}

#[test]
fn test_write_errors_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("scene.json");

    let err = sample_scene().save_json(&path).unwrap_err();
    assert!(matches!(err, BabyplotsError::FileWrite { .. }));
    assert!(err.to_string().contains("scene.json"));
}

#[test]
fn test_missing_engine_script() {
    let dir = tempfile::tempdir().unwrap();
    let err = OutputConfig::from_file(dir.path().join("nope.js")).unwrap_err();
    assert!(matches!(err, BabyplotsError::FileRead { .. }));
}

#[test]
fn test_add_mesh_object_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.babylon");
    std::fs::write(&path, "{\"meshes\": []}").unwrap();

    let mut scene = Babyplot::new();
    scene
        .add_mesh_object(&path, json!({"meshScaling": [2.0, 2.0, 2.0]}))
        .unwrap();

    let PlotRecord::MeshObject(plot) = &scene.plots()[0] else {
        panic!("expected a mesh object");
    };
    assert_eq!(plot.mesh_string, "{\"meshes\": []}");
    assert_eq!(plot.options.mesh_scaling, Vec3::splat(2.0));
    assert_eq!(plot.options.mesh_rotation, Vec3::ZERO);
}

#[test]
fn test_add_image_stack_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let slices = [vec![0u8, 51, 13, 230], vec![77, 0, 38, 204]];
    let paths: Vec<_> = slices
        .iter()
        .enumerate()
        .map(|(z, pixels)| {
            let path = dir.path().join(format!("slice_{z}.png"));
            GrayImage::from_raw(2, 2, pixels.clone())
                .unwrap()
                .save(&path)
                .unwrap();
            path
        })
        .collect();

    let mut scene = Babyplot::new();
    scene
        .add_image_stack_from_files(paths.as_slice(), &Threshold::default(), ImageStackOptions::default())
        .unwrap();

    let PlotRecord::ImageStack(plot) = &scene.plots()[0] else {
        panic!("expected an image stack");
    };
    assert_eq!(plot.attributes.dim, [2, 2, 2, 1]);
    assert_eq!(plot.indices, vec![1, 3, 4, 6, 7]);
    assert!(plot.values.iter().all(|&v| v > DEFAULT_THRESHOLD));
}

#[test]
fn test_add_tiff_reads_every_page() {
    use tiff::encoder::{colortype, TiffEncoder};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stack.tif");
    let mut encoder = TiffEncoder::new(std::fs::File::create(&path).unwrap()).unwrap();
    for page in [[0u8, 51, 13, 230], [77, 0, 38, 204]] {
        encoder.write_image::<colortype::Gray8>(2, 2, &page).unwrap();
    }
    drop(encoder);

    let mut scene = Babyplot::new();
    scene
        .add_tiff(&path, &Threshold::default(), json!({"intensityMode": "mip"}))
        .unwrap();

    let PlotRecord::ImageStack(plot) = &scene.plots()[0] else {
        panic!("expected an image stack");
    };
    assert_eq!(plot.attributes.dim, [2, 2, 2, 1]);
    assert_eq!(plot.indices, vec![1, 3, 4, 6, 7]);
    assert_eq!(plot.options.intensity_mode, "mip");
}
