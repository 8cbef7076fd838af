//! Volumetric image stacks.

use std::path::Path;

use ndarray::{ArrayView3, ArrayView4};

use crate::{
    encode, encode_volume, read_stack, read_tiff_stack, Babyplot, ImageAttributes, ImageStackOptions,
    ImageStackPlot, IntoOptions, PlotRecord, Result, SparseImage, Threshold,
};

const PLOT_TYPE: &str = "imageStack";

impl Babyplot {
    /// Adds an already sparsified image stack.
    ///
    /// `values` and `indices` are parallel lists over the stack flattened in
    /// `(Z, C, Y, X)` order.
    pub fn add_image_stack(
        &mut self,
        values: Vec<f32>,
        indices: Vec<u64>,
        attributes: ImageAttributes,
        options: impl IntoOptions<ImageStackOptions>,
    ) -> Result<usize> {
        let options = options.into_options(PLOT_TYPE)?;
        let plot = ImageStackPlot::new(values, indices, attributes, options)?;
        Ok(self.push(PlotRecord::ImageStack(plot)))
    }

    /// Sparsifies a dense `(Z, Y, X, C)` array and adds it.
    pub fn add_image_stack_from_array(
        &mut self,
        stack: ArrayView4<'_, f32>,
        threshold: &Threshold,
        options: impl IntoOptions<ImageStackOptions>,
    ) -> Result<usize> {
        let sparse = encode(stack, threshold)?;
        self.add_sparse_image(sparse, options)
    }

    /// Sparsifies a single-channel `(Z, Y, X)` volume and adds it.
    pub fn add_image_volume(
        &mut self,
        volume: ArrayView3<'_, f32>,
        threshold: &Threshold,
        options: impl IntoOptions<ImageStackOptions>,
    ) -> Result<usize> {
        let sparse = encode_volume(volume, threshold)?;
        self.add_sparse_image(sparse, options)
    }

    /// Decodes image files, one z-slice each in the given order, and adds the
    /// sparsified stack.
    pub fn add_image_stack_from_files<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        threshold: &Threshold,
        options: impl IntoOptions<ImageStackOptions>,
    ) -> Result<usize> {
        let stack = read_stack(paths)?;
        self.add_image_stack_from_array(stack.view(), threshold, options)
    }

    /// Decodes a TIFF file, one z-slice per page, and adds the sparsified
    /// stack.
    pub fn add_tiff(
        &mut self,
        path: impl AsRef<Path>,
        threshold: &Threshold,
        options: impl IntoOptions<ImageStackOptions>,
    ) -> Result<usize> {
        let stack = read_tiff_stack(path)?;
        self.add_image_stack_from_array(stack.view(), threshold, options)
    }

    fn add_sparse_image(
        &mut self,
        sparse: SparseImage,
        options: impl IntoOptions<ImageStackOptions>,
    ) -> Result<usize> {
        let SparseImage {
            values,
            indices,
            attributes,
        } = sparse;
        self.add_image_stack(values, indices, attributes, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BabyplotsError;
    use ndarray::{Array3, Array4};
    use serde_json::json;

    #[test]
    fn test_add_image_stack_record() {
        let mut scene = Babyplot::new();
        scene
            .add_image_stack(
                vec![0.5, 0.7],
                vec![3, 9],
                ImageAttributes::new(4, 4, 1, 1),
                json!({"intensityMode": "mip"}),
            )
            .unwrap();

        let PlotRecord::ImageStack(plot) = &scene.plots()[0] else {
            panic!("expected an image stack");
        };
        assert_eq!(plot.options.intensity_mode, "mip");
        assert_eq!(plot.options.color_scale, None);
        assert_eq!(plot.attributes.dim, [4, 4, 1, 1]);
    }

    #[test]
    fn test_mismatched_sparse_lists() {
        let mut scene = Babyplot::new();
        let err = scene
            .add_image_stack(
                vec![0.5],
                vec![3, 9],
                ImageAttributes::new(4, 4, 1, 1),
                ImageStackOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, BabyplotsError::SizeMismatch { .. }));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_add_image_volume() {
        let volume = Array3::from_shape_vec(
            (2, 2, 2),
            vec![0.0, 0.2, 0.05, 0.9, 0.3, 0.0, 0.15, 0.8],
        )
        .unwrap();

        let mut scene = Babyplot::new();
        scene
            .add_image_volume(volume.view(), &Threshold::default(), ImageStackOptions::default())
            .unwrap();

        let PlotRecord::ImageStack(plot) = &scene.plots()[0] else {
            panic!("expected an image stack");
        };
        assert_eq!(plot.values, vec![0.2, 0.9, 0.3, 0.15, 0.8]);
        assert_eq!(plot.indices, vec![1, 3, 4, 6, 7]);
        assert_eq!(plot.attributes.dim, [2, 2, 2, 1]);
    }

    #[test]
    fn test_channel_threshold_mismatch() {
        let stack = Array4::<f32>::zeros((1, 2, 2, 2));
        let mut scene = Babyplot::new();
        let err = scene
            .add_image_stack_from_array(
                stack.view(),
                &Threshold::PerChannel(vec![0.5]),
                ImageStackOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, BabyplotsError::Config(_)));
        assert!(scene.is_empty());
    }
}
