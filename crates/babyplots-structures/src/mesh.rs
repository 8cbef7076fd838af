//! Mesh file loading.

use std::path::Path;

use babyplots_core::{BabyplotsError, MeshObjectOptions, MeshObjectPlot, Result};

/// Reads a mesh scene file verbatim.
///
/// The contents are opaque here; the engine parses them.
pub fn read_mesh_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| BabyplotsError::file_read(path, e))?;
    log::debug!("read mesh file '{}' ({} bytes)", path.display(), contents.len());
    Ok(contents)
}

/// Builds a mesh object plot from a scene file.
pub fn load_mesh_object(path: impl AsRef<Path>, options: MeshObjectOptions) -> Result<MeshObjectPlot> {
    Ok(MeshObjectPlot {
        mesh_string: read_mesh_file(path)?,
        options,
    })
}
