//! HTML and JSON export of a scene.

use std::path::Path;

use crate::{render_fragment, render_page, write_html, write_json, Babyplot, OutputConfig, Result, View};

impl Babyplot {
    /// Returns the view settings used for HTML output.
    pub fn view(&self) -> View {
        View {
            size: self.view_size(),
            show_ui: self.options().show_ui,
        }
    }

    /// Renders the scene as a standalone HTML page.
    pub fn to_html(&self, config: &OutputConfig) -> Result<String> {
        render_page(&self.to_document(), self.view(), config)
    }

    /// Renders the scene as a canvas plus scripts for embedding into an
    /// existing page, using `id` as the canvas element id.
    pub fn to_html_fragment(&self, config: &OutputConfig, id: &str) -> Result<String> {
        render_fragment(&self.to_document(), self.view(), config, id)
    }

    /// Writes the scene as a standalone HTML page.
    pub fn save_html(&self, path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
        write_html(path, &self.to_document(), self.view(), config)
    }

    /// Writes the scene document as a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path, &self.to_document(), false)
    }

    /// Writes the scene document as an indented JSON file.
    pub fn save_json_pretty(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path, &self.to_document(), true)
    }
}
