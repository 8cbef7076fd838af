//! Output configuration.
//!
//! An [`OutputConfig`] is built once and passed to every HTML render call.
//! It owns the engine script (or a reference to it) and page settings.

use std::path::Path;

use babyplots_core::{BabyplotsError, Result};

/// Where the page gets the rendering engine from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSource {
    /// The engine script embedded verbatim.
    Inline(String),
    /// The engine script loaded from a URL at view time.
    Url(String),
}

/// Settings for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    engine: EngineSource,
    title: String,
    pretty_json: bool,
    fullscreen: bool,
}

impl OutputConfig {
    /// Embeds the given engine script source.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self::new(EngineSource::Inline(source.into()))
    }

    /// Reads the engine script from a file and embeds it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| BabyplotsError::file_read(path, e))?;
        log::debug!(
            "loaded engine script '{}' ({} bytes)",
            path.display(),
            source.len()
        );
        Ok(Self::from_source(source))
    }

    /// References the engine script by URL instead of embedding it.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::new(EngineSource::Url(url.into()))
    }

    fn new(engine: EngineSource) -> Self {
        Self {
            engine,
            title: "babyplots".to_string(),
            pretty_json: false,
            fullscreen: false,
        }
    }

    /// Sets the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Writes JSON files with indentation.
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Sizes the canvas to fill the browser viewport instead of the scene's
    /// pixel size.
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Returns the engine source.
    pub fn engine(&self) -> &EngineSource {
        &self.engine
    }

    /// Returns the page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether JSON output is indented.
    pub fn pretty_json(&self) -> bool {
        self.pretty_json
    }

    /// Returns whether the canvas fills the viewport.
    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }
}
