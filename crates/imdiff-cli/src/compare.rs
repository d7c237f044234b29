use std::path::{Path, PathBuf};

use imdiff_image::{ops, Image, ImageError};
use imdiff_imgproc::{color, diff, metrics};
use imdiff_io::{read_image_any, GenericImage, IoError};

/// Stabilizing constant added to the relative error denominator.
pub const RELATIVE_EPS: f32 = 1e-6;

/// Named configuration for one comparison run.
pub struct CompareConfig {
    /// Display title for the candidate image.
    pub candidate_title: String,
    /// Path to the candidate image.
    pub candidate_path: PathBuf,
    /// Display title for the reference image.
    pub reference_title: String,
    /// Path to the reference image.
    pub reference_path: PathBuf,
}

/// An error type for the comparison pipeline.
#[derive(thiserror::Error, Debug)]
pub enum CompareError {
    /// Error while reading or decoding an input image.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Error while operating on the pixel data.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// The intensity grids and scalar metrics produced by one comparison.
pub struct CompareOutput {
    /// Candidate intensity grid in [0, 1].
    pub candidate: Image<f32, 1>,
    /// Reference intensity grid in its native numeric range.
    pub reference: Image<f32, 1>,
    /// Per-pixel signed error, candidate minus reference.
    pub error: Image<f32, 1>,
    /// Per-pixel relative error.
    pub relative_error: Image<f32, 1>,
    /// Root mean squared error over the full grids.
    pub rmse: f32,
    /// Relative root mean squared error over the full grids.
    pub relative_rmse: f32,
}

fn to_intensity<const C: usize>(
    img: &Image<u8, C>,
    scale: f32,
) -> Result<Image<f32, 1>, CompareError> {
    let mut img_f32 = Image::<f32, C>::from_size_val(img.size(), 0.0)?;
    ops::cast_and_scale(img, &mut img_f32, scale)?;

    let mut gray = Image::<f32, 1>::from_size_val(img.size(), 0.0)?;
    color::gray_from_channel_mean(&img_f32, &mut gray)?;

    Ok(gray)
}

fn load_intensity(path: &Path, scale: f32) -> Result<Image<f32, 1>, CompareError> {
    let gray = match read_image_any(path)? {
        GenericImage::L8(img) => to_intensity(&img, scale)?,
        GenericImage::La8(img) => to_intensity(&img, scale)?,
        GenericImage::Rgb8(img) => to_intensity(&img, scale)?,
        GenericImage::Rgba8(img) => to_intensity(&img, scale)?,
    };

    Ok(gray)
}

/// Run the full comparison pipeline for the given configuration.
///
/// Loads both images, reduces them to grayscale intensity, computes the error
/// and relative error grids and the two scalar metrics.
///
/// The candidate is normalized by 1/255 (assumed 8-bit encoded) while the
/// reference is taken in its native numeric range.
pub fn compare(config: &CompareConfig) -> Result<CompareOutput, CompareError> {
    let candidate = load_intensity(&config.candidate_path, 1.0 / 255.0)?;
    let reference = load_intensity(&config.reference_path, 1.0)?;

    let mut error = Image::from_size_val(candidate.size(), 0.0)?;
    diff::pixel_diff(&candidate, &reference, &mut error)?;

    let mut relative_error = Image::from_size_val(candidate.size(), 0.0)?;
    diff::relative_diff(&candidate, &reference, &mut relative_error, RELATIVE_EPS)?;

    let rmse = metrics::rmse(&candidate, &reference)?;
    let relative_rmse = metrics::relative_rmse(&candidate, &reference, RELATIVE_EPS)?;

    Ok(CompareOutput {
        candidate,
        reference,
        error,
        relative_error,
        rmse,
        relative_rmse,
    })
}
