//! Decoding image files into dense `(Z, Y, X, C)` stacks.
//!
//! Plain images give one z-slice each. TIFF files give one z-slice per page,
//! so a multi-page TIFF holds a whole stack.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use babyplots_core::{BabyplotsError, Result};
use image::{DynamicImage, ImageError};
use ndarray::{s, Array3, Array4, ArrayView4, Axis};
use tiff::decoder::{Decoder, DecodingResult};
use tiff::{ColorType, TiffError};

/// Reads an image file as a stack.
///
/// TIFF files give one slice per page; other formats a single slice.
pub fn read_image(path: impl AsRef<Path>) -> Result<Array4<f32>> {
    let path = path.as_ref();
    if is_tiff(path) {
        return read_tiff_stack(path);
    }
    let slice = read_slice(path)?;
    Ok(slice.insert_axis(Axis(0)))
}

/// Reads every page of a TIFF file into a `(Z, Y, X, C)` stack, page `i`
/// being slice `z = i`.
///
/// Unsigned integer samples are normalized to `[0, 1]`, float samples are
/// kept as they are. Alpha is dropped. All pages must share size and
/// channel count.
pub fn read_tiff_stack(path: impl AsRef<Path>) -> Result<Array4<f32>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| BabyplotsError::file_read(path, e))?;
    let mut decoder = Decoder::new(BufReader::new(file)).map_err(|e| tiff_error(path, e))?;

    let mut pages = Vec::new();
    loop {
        pages.push(read_tiff_page(path, &mut decoder)?);
        if !decoder.more_images() {
            break;
        }
        decoder.next_image().map_err(|e| tiff_error(path, e))?;
    }

    log::debug!("read {} page(s) from '{}'", pages.len(), path.display());
    let stacks: Vec<_> = pages
        .into_iter()
        .map(|page| page.insert_axis(Axis(0)))
        .collect();
    join_slices(&stacks, |i| format!("page {i} of '{}'", path.display()))
}

/// Reads the files in the order given into one `(Z, Y, X, C)` stack.
///
/// Each file contributes its slices as read by [`read_image`]. Grayscale
/// images give one channel and color images three; alpha is dropped.
/// Samples are normalized to `[0, 1]`. Every slice must have the same size
/// and channel count.
pub fn read_stack<P: AsRef<Path>>(paths: &[P]) -> Result<Array4<f32>> {
    if paths.is_empty() {
        return Err(BabyplotsError::config("an image stack needs at least one slice"));
    }

    let stacks = paths
        .iter()
        .map(read_image)
        .collect::<Result<Vec<_>>>()?;
    let stack = join_slices(&stacks, |i| format!("'{}'", paths[i].as_ref().display()))?;

    let (nz, ny, nx, nc) = stack.dim();
    log::debug!(
        "read image stack of {nz} slice(s) from {} file(s), {nx}x{ny} with {nc} channel(s)",
        paths.len()
    );
    Ok(stack)
}

/// Concatenates stacks along z, checking that slice shapes agree.
fn join_slices(stacks: &[Array4<f32>], describe: impl Fn(usize) -> String) -> Result<Array4<f32>> {
    let Some(first) = stacks.first() else {
        return Err(BabyplotsError::config("an image stack needs at least one slice"));
    };
    let (_, ny, nx, nc) = first.dim();
    if let Some((i, stack)) = stacks
        .iter()
        .enumerate()
        .find(|(_, stack)| {
            let (_, h, w, c) = stack.dim();
            (h, w, c) != (ny, nx, nc)
        })
    {
        let (_, h, w, c) = stack.dim();
        return Err(BabyplotsError::config(format!(
            "{} is {w}x{h} with {c} channel(s), expected {nx}x{ny} with {nc} channel(s)",
            describe(i)
        )));
    }

    let views: Vec<ArrayView4<'_, f32>> = stacks.iter().map(|stack| stack.view()).collect();
    ndarray::concatenate(Axis(0), &views)
        .map_err(|e| BabyplotsError::config(format!("cannot stack image slices: {e}")))
}

fn is_tiff(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff"))
}

fn tiff_error(path: &Path, error: TiffError) -> BabyplotsError {
    match error {
        TiffError::IoError(source) => BabyplotsError::file_read(path, source),
        other => BabyplotsError::ImageDecode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

/// Decodes the current TIFF page into a `(Y, X, C)` array.
fn read_tiff_page(path: &Path, decoder: &mut Decoder<BufReader<File>>) -> Result<Array3<f32>> {
    let (width, height) = decoder.dimensions().map_err(|e| tiff_error(path, e))?;
    let color = decoder.colortype().map_err(|e| tiff_error(path, e))?;
    let unsupported = |what: String| BabyplotsError::ImageDecode {
        path: path.to_path_buf(),
        message: what,
    };

    let channels = match color {
        ColorType::Gray(_) | ColorType::GrayA(_) => 1,
        ColorType::RGB(_) | ColorType::RGBA(_) => 3,
        other => return Err(unsupported(format!("unsupported TIFF color type {other:?}"))),
    };
    if matches!(color, ColorType::GrayA(_) | ColorType::RGBA(_)) {
        log::warn!("dropping alpha channel of {color:?} TIFF page");
    }

    let samples: Vec<f32> = match decoder.read_image().map_err(|e| tiff_error(path, e))? {
        DecodingResult::U8(data) => data.into_iter().map(|v| f32::from(v) / 255.0).collect(),
        DecodingResult::U16(data) => data.into_iter().map(|v| f32::from(v) / 65535.0).collect(),
        DecodingResult::U32(data) => data
            .into_iter()
            .map(|v| (f64::from(v) / f64::from(u32::MAX)) as f32)
            .collect(),
        DecodingResult::F32(data) => data,
        DecodingResult::F64(data) => data.into_iter().map(|v| v as f32).collect(),
        _ => return Err(unsupported(format!("unsupported TIFF sample format in {color:?} page"))),
    };

    let per_pixel = usize::from(color.num_samples());
    let page = Array3::from_shape_vec((height as usize, width as usize, per_pixel), samples)
        .map_err(|e| unsupported(e.to_string()))?;
    if per_pixel == channels {
        Ok(page)
    } else {
        Ok(page.slice(s![.., .., ..channels]).to_owned())
    }
}

/// Decodes one image into a `(Y, X, C)` array.
fn read_slice(path: &Path) -> Result<Array3<f32>> {
    let img = image::open(path).map_err(|e| match e {
        ImageError::IoError(source) => BabyplotsError::file_read(path, source),
        other => BabyplotsError::ImageDecode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;
    to_array(&img).map_err(|message| BabyplotsError::ImageDecode {
        path: path.to_path_buf(),
        message,
    })
}

fn to_array(img: &DynamicImage) -> std::result::Result<Array3<f32>, String> {
    let color = img.color();
    if color.has_alpha() {
        log::warn!("dropping alpha channel of {color:?} image");
    }

    let (width, height) = (img.width() as usize, img.height() as usize);
    let (channels, samples) = if color.has_color() {
        (3, img.to_rgb32f().into_raw())
    } else {
        (1, img.to_luma32f().into_raw())
    };

    Array3::from_shape_vec((height, width, channels), samples).map_err(|e| e.to_string())
}
