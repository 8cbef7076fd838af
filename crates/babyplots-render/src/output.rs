//! Writing scene files.

use std::path::Path;

use babyplots_core::{BabyplotsError, Result, VisualizationDocument};

use crate::config::OutputConfig;
use crate::html::{render_page, View};

/// Writes the document as a JSON file.
pub fn write_json(
    path: impl AsRef<Path>,
    document: &VisualizationDocument,
    pretty: bool,
) -> Result<()> {
    let json = if pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };
    write_file(path.as_ref(), &json)
}

/// Writes the document as a standalone HTML page.
pub fn write_html(
    path: impl AsRef<Path>,
    document: &VisualizationDocument,
    view: View,
    config: &OutputConfig,
) -> Result<()> {
    let html = render_page(document, view, config)?;
    write_file(path.as_ref(), &html)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| BabyplotsError::file_write(path, e))?;
    log::info!("wrote '{}' ({} bytes)", path.display(), contents.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let doc = VisualizationDocument::default();

        write_json(&path, &doc, false).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.to_json().unwrap());

        write_json(&path, &doc, true).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains('\n'));
        assert_eq!(VisualizationDocument::from_json(&written).unwrap(), doc);
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/scene.html");
        let err = write_html(
            &path,
            &VisualizationDocument::default(),
            View::default(),
            &OutputConfig::from_source(""),
        )
        .unwrap_err();
        assert!(matches!(err, BabyplotsError::FileWrite { .. }));
    }
}
