//! HTML rendering of scene documents.

use std::fmt::Write as _;

use babyplots_core::{Result, ViewSize, VisualizationDocument};
use uuid::Uuid;

use crate::config::{EngineSource, OutputConfig};

/// View settings that live outside the scene document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct View {
    /// Canvas size in pixels.
    pub size: ViewSize,
    /// Whether the engine shows its control buttons.
    pub show_ui: bool,
}

/// Generates a fresh element id for a canvas.
pub fn display_id() -> String {
    sanitize_identifier(&format!("babyplot_{}", Uuid::new_v4()))
}

/// Replaces every character that is not valid in an identifier with `_`.
///
/// A leading digit gets a `_` prefix.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut id: String = raw
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect();
    if id.is_empty() || id.starts_with(|ch: char| ch.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}

/// Renders the canvas and scripts for embedding into an existing page.
///
/// `id` is passed through [`sanitize_identifier`] before use.
pub fn render_fragment(
    document: &VisualizationDocument,
    view: View,
    config: &OutputConfig,
    id: &str,
) -> Result<String> {
    let id = sanitize_identifier(id);
    let json = script_json(document, config.pretty_json())?;
    let mut html = String::new();

    let (w, h) = (view.size.width, view.size.height);
    let style = if config.fullscreen() {
        "width: 100vw; height: 100vh; display: block;".to_string()
    } else {
        format!("width: {w}px; height: {h}px;")
    };
    let _ = writeln!(
        html,
        "<canvas id=\"{id}\" width=\"{w}\" height=\"{h}\" style=\"{style}\"></canvas>"
    );
    html.push_str(&engine_tag(config));
    html.push('\n');
    html.push_str("<script>\n(function () {\n");
    let _ = writeln!(html, "  var doc = {json};");
    let _ = writeln!(
        html,
        "  var vis = new Baby.Plots(\"{id}\", {{backgroundColor: doc.backgroundColor}});"
    );
    html.push_str("  vis.fromJSON(doc);\n");
    if view.show_ui {
        html.push_str("  vis.createButtons([\"json\", \"label\", \"publish\"]);\n");
    }
    html.push_str("  vis.doRender();\n})();\n</script>\n");

    Ok(html)
}

/// Renders a standalone HTML page with a freshly generated element id.
pub fn render_page(
    document: &VisualizationDocument,
    view: View,
    config: &OutputConfig,
) -> Result<String> {
    let id = display_id();
    let fragment = render_fragment(document, view, config, &id)?;

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(config.title()));
    let body_style = if config.fullscreen() {
        "margin: 0; overflow: hidden;"
    } else {
        "margin: 0;"
    };
    let _ = writeln!(
        html,
        "<style>\nbody {{ {body_style} }}\n#{id} {{ background-color: {}; }}\n</style>",
        escape_html(&document.background_color)
    );
    html.push_str("</head>\n<body>\n");
    html.push_str(&fragment);
    html.push_str("</body>\n</html>\n");

    log::debug!(
        "rendered page '{id}' with {} plot(s)",
        document.num_plots()
    );
    Ok(html)
}

/// Encodes the document as JSON that is safe inside a `<script>` block.
fn script_json(document: &VisualizationDocument, pretty: bool) -> Result<String> {
    let json = if pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };
    Ok(json.replace("</", "<\\/"))
}

fn engine_tag(config: &OutputConfig) -> String {
    match config.engine() {
        EngineSource::Inline(source) => {
            format!("<script>\n{}\n</script>", escape_script_end(source))
        }
        EngineSource::Url(url) => format!("<script src=\"{}\"></script>", escape_html(url)),
    }
}

/// Breaks up every `</script` (in any letter case) so the text cannot close
/// the enclosing script block.
fn escape_script_end(source: &str) -> String {
    let lower = source.to_ascii_lowercase();
    let mut escaped = String::with_capacity(source.len());
    let mut last = 0;
    for (pos, _) in lower.match_indices("</script") {
        escaped.push_str(&source[last..pos]);
        escaped.push_str("<\\/");
        last = pos + 2;
    }
    escaped.push_str(&source[last..]);
    escaped
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use babyplots_core::{MeshObjectOptions, MeshObjectPlot, PlotRecord};

    fn view() -> View {
        View {
            size: ViewSize {
                width: 800,
                height: 600,
            },
            show_ui: false,
        }
    }

    #[test]
    fn test_display_id_is_identifier() {
        let id = display_id();
        assert!(id.starts_with("babyplot_"));
        assert!(!id.contains('-'));
        assert!(id.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'));
        assert_ne!(id, display_id());
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(
            sanitize_identifier("1b4e28ba-2fa1-11d2"),
            "_1b4e28ba_2fa1_11d2"
        );
        assert_eq!(sanitize_identifier("plot.main"), "plot_main");
        assert_eq!(sanitize_identifier(""), "_");
    }

    #[test]
    fn test_fragment_contents() {
        let config = OutputConfig::from_source("var Baby = {};");
        let html =
            render_fragment(&VisualizationDocument::default(), view(), &config, "plot_1").unwrap();

        assert!(html.contains("<canvas id=\"plot_1\" width=\"800\" height=\"600\""));
        assert!(html.contains("var Baby = {};"));
        assert!(html.contains("new Baby.Plots(\"plot_1\""));
        assert!(html.contains("\"upAxis\":\"+y\""));
        assert!(!html.contains("createButtons"));

        let with_ui = View {
            show_ui: true,
            ..view()
        };
        let html =
            render_fragment(&VisualizationDocument::default(), with_ui, &config, "plot_1").unwrap();
        assert!(html.contains("createButtons"));
    }

    #[test]
    fn test_script_close_tag_escaped() {
        let mut doc = VisualizationDocument::default();
        doc.plots.push(PlotRecord::MeshObject(MeshObjectPlot {
            mesh_string: "</script><script>alert(1)".to_string(),
            options: MeshObjectOptions::default(),
        }));
        let config = OutputConfig::from_url("engine.js");
        let html = render_fragment(&doc, view(), &config, "plot_1").unwrap();

        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<\\/script>"));
        assert!(html.contains("<script src=\"engine.js\"></script>"));
    }

    #[test]
    fn test_pretty_json_embedding() {
        let config = OutputConfig::from_url("engine.js").with_pretty_json(true);
        let html =
            render_fragment(&VisualizationDocument::default(), view(), &config, "plot_1").unwrap();
        assert!(html.contains("\"upAxis\": \"+y\""));
    }

    #[test]
    fn test_page_wraps_fragment() {
        let config = OutputConfig::from_source("var Baby = {};").with_title("A & B");
        let html = render_page(&VisualizationDocument::default(), view(), &config).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("background-color: #ffffffff;"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_fragment_id_is_sanitized() {
        let config = OutputConfig::from_url("engine.js");
        let html = render_fragment(
            &VisualizationDocument::default(),
            view(),
            &config,
            "a\"); alert(1); (\"",
        )
        .unwrap();

        assert!(html.contains("<canvas id=\"a____alert_1_____\""));
        assert!(html.contains("new Baby.Plots(\"a____alert_1_____\""));
        assert!(!html.contains("alert(1)"));
    }

    #[test]
    fn test_engine_close_tag_escaped_in_any_case() {
        let config = OutputConfig::from_source("var a = '</SCRIPT>'; var b = '</Script >';");
        let html =
            render_fragment(&VisualizationDocument::default(), view(), &config, "plot_1").unwrap();

        assert!(html.contains("var a = '<\\/SCRIPT>'; var b = '<\\/Script >';"));
        assert!(!html.to_ascii_lowercase().contains("'</script"));
        assert_eq!(escape_script_end("a</script>b"), "a<\\/script>b");
        assert_eq!(escape_script_end("no closing tag"), "no closing tag");
    }

    #[test]
    fn test_fullscreen_canvas_fills_viewport() {
        let config = OutputConfig::from_url("engine.js").with_fullscreen(true);
        let html = render_page(&VisualizationDocument::default(), view(), &config).unwrap();

        assert!(html.contains("style=\"width: 100vw; height: 100vh; display: block;\""));
        assert!(html.contains("body { margin: 0; overflow: hidden; }"));
        assert!(!html.contains("width: 800px"));

        let sized = render_page(
            &VisualizationDocument::default(),
            view(),
            &OutputConfig::from_url("engine.js"),
        )
        .unwrap();
        assert!(sized.contains("style=\"width: 800px; height: 600px;\""));
        assert!(!sized.contains("100vw"));
    }
}
