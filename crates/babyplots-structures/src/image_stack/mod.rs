//! Image stack encoding.
//!
//! Converts a dense `(Z, Y, X, C)` intensity array into the sparse form read
//! by the engine: parallel `values`/`indices` lists over the stack flattened
//! in `(Z, C, Y, X)` order, plus `dim = [X, Y, Z, C]`.

mod decode;

pub use decode::{read_image, read_stack, read_tiff_stack};

use babyplots_core::{BabyplotsError, ImageAttributes, ImageStackOptions, ImageStackPlot, Result};
use ndarray::{ArrayView3, ArrayView4, Axis};

/// Global threshold used when none is given.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Which voxels survive sparsification.
#[derive(Debug, Clone, PartialEq)]
pub enum Threshold {
    /// Keep values strictly greater than the threshold, in every channel.
    Global(f32),
    /// Zero values below the channel's threshold, then keep values above zero.
    PerChannel(Vec<f32>),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Global(DEFAULT_THRESHOLD)
    }
}

impl Threshold {
    /// Returns a survival test for channel-tagged values.
    fn survival_test(&self, channels: usize) -> Result<impl Fn(usize, f32) -> bool + '_> {
        if let Self::PerChannel(cutoffs) = self {
            if cutoffs.len() != channels {
                return Err(BabyplotsError::config(format!(
                    "got {} channel thresholds for an image with {channels} channel(s)",
                    cutoffs.len()
                )));
            }
        }

        Ok(move |channel: usize, value: f32| match self {
            Self::Global(threshold) => value > *threshold,
            Self::PerChannel(cutoffs) => value >= cutoffs[channel] && value > 0.0,
        })
    }
}

/// The sparse form of an image stack.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseImage {
    /// Intensities of the surviving voxels.
    pub values: Vec<f32>,
    /// Flat `(Z, C, Y, X)` indices of the surviving voxels, ascending.
    pub indices: Vec<u64>,
    /// Stack dimensions as `[X, Y, Z, C]`.
    pub attributes: ImageAttributes,
}

impl SparseImage {
    /// Returns the number of surviving voxels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no voxel survived.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Builds an image stack plot from this sparse image.
    pub fn into_plot(self, options: ImageStackOptions) -> Result<ImageStackPlot> {
        ImageStackPlot::new(self.values, self.indices, self.attributes, options)
    }
}

/// Computes the flat index of a voxel in `(Z, C, Y, X)` order.
///
/// `dim` is `[X, Y, Z, C]`, as stored in [`ImageAttributes`].
pub fn flat_index(dim: [usize; 4], z: usize, y: usize, x: usize, c: usize) -> u64 {
    let [nx, ny, _, nc] = dim;
    (((z * nc + c) * ny + y) * nx + x) as u64
}

/// Splits a flat index back into `(z, y, x, c)`.
pub fn unflatten_index(dim: [usize; 4], index: u64) -> (usize, usize, usize, usize) {
    let [nx, ny, _, nc] = dim;
    let index = index as usize;
    let x = index % nx;
    let y = (index / nx) % ny;
    let c = (index / (nx * ny)) % nc;
    let z = index / (nx * ny * nc);
    (z, y, x, c)
}

/// Sparsifies a `(Z, Y, X, C)` stack.
///
/// Fails if the stack has an empty axis, or if per-channel thresholds do not
/// match the channel count. A stack with no surviving voxel is not an error.
pub fn encode(stack: ArrayView4<'_, f32>, threshold: &Threshold) -> Result<SparseImage> {
    let (nz, ny, nx, nc) = stack.dim();
    if nz == 0 || ny == 0 || nx == 0 || nc == 0 {
        return Err(BabyplotsError::config(format!(
            "image stack has an empty axis (z={nz}, y={ny}, x={nx}, c={nc})"
        )));
    }
    let survives = threshold.survival_test(nc)?;
    let attributes = ImageAttributes::new(nx, ny, nz, nc);

    let mut values = Vec::new();
    let mut indices = Vec::new();

    // Logical iteration over the permuted view walks (Z, C, Y, X) in
    // ascending flat index order.
    let reordered = stack.permuted_axes([0, 3, 1, 2]);
    for ((z, c, y, x), &value) in reordered.indexed_iter() {
        if survives(c, value) {
            values.push(value);
            indices.push(flat_index(attributes.dim, z, y, x, c));
        }
    }

    log::debug!(
        "encoded {nx}x{ny}x{nz} image stack with {nc} channel(s): kept {} of {} voxels",
        values.len(),
        attributes.num_values()
    );

    Ok(SparseImage {
        values,
        indices,
        attributes,
    })
}

/// Sparsifies a single-channel `(Z, Y, X)` stack.
pub fn encode_volume(volume: ArrayView3<'_, f32>, threshold: &Threshold) -> Result<SparseImage> {
    encode(volume.insert_axis(Axis(3)), threshold)
}
