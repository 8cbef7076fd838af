//! The scene builder.

use crate::{
    Dimension, PlotRecord, Result, SceneOptions, UpAxis, ViewSize, VisualizationDocument,
};

/// A babyplots visualization: global display settings plus an ordered list
/// of plots.
///
/// Plots are only ever appended; their order is the render order. The scene
/// can be serialized at any time, including while empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Babyplot {
    options: SceneOptions,
    size: ViewSize,
    plots: Vec<PlotRecord>,
}

impl Default for Babyplot {
    fn default() -> Self {
        Self::new()
    }
}

impl Babyplot {
    /// Creates an empty scene with default settings (640x480, white background).
    pub fn new() -> Self {
        Self {
            options: SceneOptions::default(),
            size: ViewSize::default(),
            plots: Vec::new(),
        }
    }

    /// Starts building a scene with custom settings.
    pub fn builder() -> BabyplotBuilder {
        BabyplotBuilder::default()
    }

    /// Creates an empty scene from scene options.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if width or height is not a pixel value
    /// or the background color is not a hex color.
    pub fn with_options(options: SceneOptions) -> Result<Self> {
        let size = options.validate()?;
        log::debug!(
            "created scene {}x{} (up axis {})",
            size.width,
            size.height,
            options.up_axis
        );
        Ok(Self {
            options,
            size,
            plots: Vec::new(),
        })
    }

    /// Returns the scene options.
    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    /// Returns the resolved canvas size.
    pub fn view_size(&self) -> ViewSize {
        self.size
    }

    /// Returns the plots in render order.
    pub fn plots(&self) -> &[PlotRecord] {
        &self.plots
    }

    /// Returns the number of plots.
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// Returns true if no plot has been added.
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Appends a record and returns its position.
    pub(crate) fn push(&mut self, record: PlotRecord) -> usize {
        let index = self.plots.len();
        log::debug!("added {} plot at position {index}", record.plot_type());
        self.plots.push(record);
        index
    }

    /// Builds the scene document from the current state.
    ///
    /// Every call reflects the plots added so far; the scene itself is left
    /// untouched.
    pub fn to_document(&self) -> VisualizationDocument {
        VisualizationDocument::from_options(&self.options, self.plots.clone())
    }

    /// Encodes the scene document as JSON.
    pub fn to_json(&self) -> Result<String> {
        self.to_document().to_json()
    }

    /// Encodes the scene document as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        self.to_document().to_json_pretty()
    }
}

/// Builder for [`Babyplot`].
///
/// ```
/// use babyplots_rs::*;
///
/// let scene = Babyplot::builder()
///     .width("800px")
///     .height(600)
///     .turntable(true)
///     .up_axis(UpAxis::PosZ)
///     .build()
///     .unwrap();
/// assert_eq!(scene.view_size().width, 800);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BabyplotBuilder {
    options: SceneOptions,
}

impl BabyplotBuilder {
    /// Sets the canvas width (`800` or `"800px"`).
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.options.width = width.into();
        self
    }

    /// Sets the canvas height (`600` or `"600px"`).
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.options.height = height.into();
        self
    }

    /// Sets the background color in hex format.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.options.background_color = color.into();
        self
    }

    /// Spins the camera around the plots.
    pub fn turntable(mut self, turntable: bool) -> Self {
        self.options.turntable = turntable;
        self
    }

    /// Sets the turntable speed.
    pub fn rotation_rate(mut self, rate: f64) -> Self {
        self.options.rotation_rate = rate;
        self
    }

    /// Sets the x axis scaling factor.
    pub fn x_scale(mut self, scale: f64) -> Self {
        self.options.x_scale = scale;
        self
    }

    /// Sets the y axis scaling factor.
    pub fn y_scale(mut self, scale: f64) -> Self {
        self.options.y_scale = scale;
        self
    }

    /// Sets the z axis scaling factor.
    pub fn z_scale(mut self, scale: f64) -> Self {
        self.options.z_scale = scale;
        self
    }

    /// Sets the title of the shape legend.
    pub fn shape_legend_title(mut self, title: impl Into<String>) -> Self {
        self.options.shape_legend_title = title.into();
        self
    }

    /// Shows the engine control buttons.
    pub fn show_ui(mut self, show_ui: bool) -> Self {
        self.options.show_ui = show_ui;
        self
    }

    /// Sets the up axis.
    pub fn up_axis(mut self, up_axis: UpAxis) -> Self {
        self.options.up_axis = up_axis;
        self
    }

    /// Validates the settings and creates the scene.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed dimensions or colors.
    pub fn build(self) -> Result<Babyplot> {
        Babyplot::with_options(self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BabyplotsError;

    #[test]
    fn test_new_scene_defaults() {
        let scene = Babyplot::new();
        assert!(scene.is_empty());
        assert_eq!(scene.view_size(), ViewSize::default());
        assert_eq!(scene.options(), &SceneOptions::default());
        assert_eq!(scene, Babyplot::builder().build().unwrap());
    }

    #[test]
    fn test_builder_parses_dimensions() {
        let scene = Babyplot::builder()
            .width("800px")
            .height("800")
            .build()
            .unwrap();
        assert_eq!(
            scene.view_size(),
            ViewSize {
                width: 800,
                height: 800
            }
        );

        let err = Babyplot::builder().width("800em").build().unwrap_err();
        assert!(matches!(err, BabyplotsError::Config(_)));
    }

    #[test]
    fn test_builder_rejects_bad_color() {
        assert!(Babyplot::builder()
            .background_color("#xyz")
            .build()
            .is_err());
    }

    #[test]
    fn test_document_settings() {
        let scene = Babyplot::builder()
            .turntable(true)
            .rotation_rate(0.05)
            .x_scale(2.0)
            .shape_legend_title("Samples")
            .show_ui(true)
            .up_axis(UpAxis::NegZ)
            .build()
            .unwrap();
        let doc = scene.to_document();
        assert!(doc.turntable);
        assert_eq!(doc.rotation_rate, 0.05);
        assert_eq!(doc.x_scale, 2.0);
        assert_eq!(doc.y_scale, 1.0);
        assert_eq!(doc.shape_legend_title, "Samples");
        assert_eq!(doc.up_axis, UpAxis::NegZ);
        assert!(doc.plots.is_empty());
    }
}
