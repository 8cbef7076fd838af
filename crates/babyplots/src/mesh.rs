//! Mesh streams and mesh objects.

use std::path::Path;

use crate::{
    load_mesh_object, Babyplot, IntoOptions, MeshObjectOptions, MeshStreamOptions,
    MeshStreamPlot, PlotRecord, Result,
};

impl Babyplot {
    /// Adds an animated sequence of mesh files.
    ///
    /// Frame `i` is fetched by the engine from
    /// `{root_url}/{file_prefix}{i}{file_suffix}` for `i` in `start..=end`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_mesh_stream(
        &mut self,
        root_url: impl Into<String>,
        file_prefix: impl Into<String>,
        file_suffix: impl Into<String>,
        start: i64,
        end: i64,
        frame_delay_ms: u64,
        options: impl IntoOptions<MeshStreamOptions>,
    ) -> Result<usize> {
        let options = options.into_options("meshStream")?;
        let plot = MeshStreamPlot::new(
            root_url,
            file_prefix,
            file_suffix,
            start,
            end,
            frame_delay_ms,
            options,
        )?;
        log::debug!("mesh stream with {} frame(s)", plot.num_frames());
        Ok(self.push(PlotRecord::MeshStream(plot)))
    }

    /// Adds a mesh read from a scene file.
    pub fn add_mesh_object(
        &mut self,
        path: impl AsRef<Path>,
        options: impl IntoOptions<MeshObjectOptions>,
    ) -> Result<usize> {
        let options = options.into_options("meshObject")?;
        let plot = load_mesh_object(path, options)?;
        Ok(self.push(PlotRecord::MeshObject(plot)))
    }
}
