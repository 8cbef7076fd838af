//! Scene-level configuration options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BabyplotsError, Result};

/// Global configuration options for a babyplots scene.
///
/// Width, height and `show_ui` only affect the HTML view; the remaining
/// fields are written into the scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneOptions {
    /// Width of the visualization canvas.
    pub width: Dimension,

    /// Height of the visualization canvas.
    pub height: Dimension,

    /// Background color in hex format (e.g. `"#ffffffff"`).
    pub background_color: String,

    /// Whether the camera spins around the plots at a constant speed.
    pub turntable: bool,

    /// Camera speed when `turntable` is enabled.
    pub rotation_rate: f64,

    /// Scaling factor applied to the x axis.
    pub x_scale: f64,

    /// Scaling factor applied to the y axis.
    pub y_scale: f64,

    /// Scaling factor applied to the z axis.
    pub z_scale: f64,

    /// Title of the legend listing plot names and shapes.
    pub shape_legend_title: String,

    /// Whether the engine shows its control buttons (labels, export, publish).
    pub show_ui: bool,

    /// Axis pointing up in the scene.
    pub up_axis: UpAxis,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            width: Dimension::Pixels(640),
            height: Dimension::Pixels(480),
            background_color: "#ffffffff".to_string(),
            turntable: false,
            rotation_rate: 0.01,
            x_scale: 1.0,
            y_scale: 1.0,
            z_scale: 1.0,
            shape_legend_title: String::new(),
            show_ui: false,
            up_axis: UpAxis::PosY,
        }
    }
}

impl SceneOptions {
    /// Creates scene options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas width.
    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    /// Sets the canvas height.
    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Enables or disables the turntable camera.
    pub fn with_turntable(mut self, turntable: bool) -> Self {
        self.turntable = turntable;
        self
    }

    /// Sets the turntable rotation rate.
    pub fn with_rotation_rate(mut self, rate: f64) -> Self {
        self.rotation_rate = rate;
        self
    }

    /// Sets the per-axis scaling factors.
    pub fn with_scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x_scale = x;
        self.y_scale = y;
        self.z_scale = z;
        self
    }

    /// Sets the shape legend title.
    pub fn with_shape_legend_title(mut self, title: impl Into<String>) -> Self {
        self.shape_legend_title = title.into();
        self
    }

    /// Shows or hides the engine control buttons.
    pub fn with_show_ui(mut self, show_ui: bool) -> Self {
        self.show_ui = show_ui;
        self
    }

    /// Sets the up axis.
    pub fn with_up_axis(mut self, up_axis: UpAxis) -> Self {
        self.up_axis = up_axis;
        self
    }

    /// Checks every field and resolves the canvas size in pixels.
    pub fn validate(&self) -> Result<ViewSize> {
        let width = self.width.to_pixels()?;
        let height = self.height.to_pixels()?;
        if !is_hex_color(&self.background_color) {
            return Err(BabyplotsError::config(format!(
                "background color '{}' is not a hex color",
                self.background_color
            )));
        }
        Ok(ViewSize { width, height })
    }
}

/// Resolved canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewSize {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// A pixel dimension as supplied by the caller.
///
/// Accepts a bare integer or a string of digits with an optional `px`
/// suffix. Interpretation is deferred to [`Dimension::to_pixels`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// A pixel count.
    Pixels(u32),
    /// Textual form, e.g. `"800"` or `"800px"`.
    Text(String),
}

impl Dimension {
    /// Interprets this dimension as a pixel count.
    pub fn to_pixels(&self) -> Result<u32> {
        match self {
            Self::Pixels(0) => Err(BabyplotsError::config("pixel dimension must be positive")),
            Self::Pixels(px) => Ok(*px),
            Self::Text(text) => parse_pixels(text),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Pixels(px)
    }
}

impl From<&str> for Dimension {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Dimension {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Parses `"800"` or `"800px"` into a pixel count.
pub fn parse_pixels(text: &str) -> Result<u32> {
    let digits = text.strip_suffix("px").unwrap_or(text);
    let invalid = || BabyplotsError::config(format!("'{text}' is not a pixel dimension"));

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(px) => Ok(px),
    }
}

/// Returns whether `color` is a `#` followed by 3, 4, 6 or 8 hex digits.
pub fn is_hex_color(color: &str) -> bool {
    color.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

/// The axis that points up in the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UpAxis {
    #[serde(rename = "+x")]
    PosX,
    #[serde(rename = "-x")]
    NegX,
    #[default]
    #[serde(rename = "+y")]
    PosY,
    #[serde(rename = "-y")]
    NegY,
    #[serde(rename = "+z")]
    PosZ,
    #[serde(rename = "-z")]
    NegZ,
}

impl UpAxis {
    /// Returns the wire name of this axis.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PosX => "+x",
            Self::NegX => "-x",
            Self::PosY => "+y",
            Self::NegY => "-y",
            Self::PosZ => "+z",
            Self::NegZ => "-z",
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpAxis {
    type Err = BabyplotsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+x" => Ok(Self::PosX),
            "-x" => Ok(Self::NegX),
            "+y" => Ok(Self::PosY),
            "-y" => Ok(Self::NegY),
            "+z" => Ok(Self::PosZ),
            "-z" => Ok(Self::NegZ),
            _ => Err(BabyplotsError::config(format!("unknown up axis '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_options_default() {
        let options = SceneOptions::default();
        assert_eq!(options.width, Dimension::Pixels(640));
        assert_eq!(options.height, Dimension::Pixels(480));
        assert_eq!(options.background_color, "#ffffffff");
        assert!(!options.turntable);
        assert_eq!(options.rotation_rate, 0.01);
        assert_eq!(options.up_axis, UpAxis::PosY);
        assert_eq!(
            options.validate().unwrap(),
            ViewSize {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn test_parse_pixels() {
        assert_eq!(parse_pixels("800px").unwrap(), 800);
        assert_eq!(parse_pixels("800").unwrap(), 800);
        assert!(matches!(
            parse_pixels("800em"),
            Err(BabyplotsError::Config(_))
        ));
        assert!(parse_pixels("px").is_err());
        assert!(parse_pixels("").is_err());
        assert!(parse_pixels("100%").is_err());
        assert!(parse_pixels("-5px").is_err());
        assert!(parse_pixels("0").is_err());
        assert!(parse_pixels(" 800").is_err());
    }

    #[test]
    fn test_dimension_from_number_and_text() {
        assert_eq!(Dimension::from(1024).to_pixels().unwrap(), 1024);
        assert_eq!(Dimension::from("600px").to_pixels().unwrap(), 600);
        assert!(Dimension::from(0).to_pixels().is_err());
    }

    #[test]
    fn test_dimension_deserializes_number_or_string() {
        let options: SceneOptions =
            serde_json::from_str(r#"{"width": 800, "height": "600px"}"#).unwrap();
        assert_eq!(options.width, Dimension::Pixels(800));
        assert_eq!(options.height, Dimension::Text("600px".to_string()));
        assert_eq!(options.validate().unwrap().height, 600);
        // Unspecified fields keep their defaults.
        assert_eq!(options.background_color, "#ffffffff");
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#ffffffff"));
        assert!(is_hex_color("#A0b1C2"));
        assert!(!is_hex_color("ffffff"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("#12345"));

        let options = SceneOptions::new().with_background_color("white");
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_up_axis_names() {
        for name in ["+x", "-x", "+y", "-y", "+z", "-z"] {
            let axis: UpAxis = name.parse().unwrap();
            assert_eq!(axis.to_string(), name);
            assert_eq!(serde_json::to_value(axis).unwrap(), name);
        }
        assert!("y".parse::<UpAxis>().is_err());
    }
}
