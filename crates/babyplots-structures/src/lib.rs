//! Data inputs for babyplots-rs.
//!
//! This crate turns raw data into plot records:
//! - Image stacks: decoding slices and sparsifying dense intensity arrays
//! - Tables: splitting named columns into coordinates and colors
//! - Meshes: loading scene files for mesh object plots

// Index arithmetic on image stacks intentionally casts between usize and u64
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod image_stack;
pub mod mesh;
pub mod table;

pub use image_stack::{
    encode, encode_volume, flat_index, read_image, read_stack, read_tiff_stack, unflatten_index,
    SparseImage, Threshold, DEFAULT_THRESHOLD,
};
pub use mesh::{load_mesh_object, read_mesh_file};
pub use table::{ColorSource, Column, Table};
