//! Mesh demonstration.
//!
//! This demo shows:
//! - An animated mesh stream fetched frame by frame by the browser
//! - A mesh object embedded from a scene file passed on the command line
//!
//! Run with: cargo run --example `mesh_demo` [scene.babylon]

use babyplots_rs::*;

fn main() -> Result<()> {
    init_logging();

    let mut scene = Babyplot::builder().turntable(true).rotation_rate(0.005).build()?;

    scene.add_mesh_stream(
        "https://example.org/meshes",
        "cell_",
        ".glb",
        0,
        99,
        40,
        json!({"clearCoat": true, "meshOffset": [0.0, -1.0, 0.0]}),
    )?;

    if let Some(path) = std::env::args().nth(1) {
        scene.add_mesh_object(
            &path,
            MeshObjectOptions::new().with_transform(Vec3::splat(0.5), Vec3::ZERO, Vec3::X * 2.0),
        )?;
    }

    scene.save_json_pretty("mesh_demo.json")?;
    println!("{}", scene.to_json_pretty()?);
    Ok(())
}
