//! Colormap rendering of intensity grids for visualization.
//!
//! Maps a single-channel f32 image to an RGB8 image over a fixed value range,
//! clamping values outside of it. Two ramps are provided: a linear grayscale
//! ramp for intensity panels and a diverging blue-white-red ramp for signed
//! error panels.

use imdiff_image::{Image, ImageError};

use crate::parallel;

/// Endpoints of the diverging ramp, low to mid to high.
const DIVERGING_LOW: [f32; 3] = [59.0, 76.0, 192.0];
const DIVERGING_MID: [f32; 3] = [221.0, 221.0, 221.0];
const DIVERGING_HIGH: [f32; 3] = [180.0, 4.0, 38.0];

fn normalize_to_range(x: f32, vmin: f32, vmax: f32) -> f32 {
    ((x - vmin) / (vmax - vmin)).clamp(0.0, 1.0)
}

/// Render an intensity image as RGB8 with a linear grayscale ramp.
///
/// Values are mapped linearly from `[vmin, vmax]` to black..white and clamped
/// outside the range.
///
/// # Arguments
///
/// * `src` - The input intensity image with shape (H, W, 1).
/// * `dst` - The output RGB image with shape (H, W, 3).
/// * `vmin` - The value mapped to black.
/// * `vmax` - The value mapped to white.
///
/// # Example
///
/// ```
/// use imdiff_image::{Image, ImageSize};
/// use imdiff_imgproc::colormap::grayscale_from_range;
///
/// let src = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![0.0, 1.0],
/// ).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
///
/// grayscale_from_range(&src, &mut dst, 0.0, 1.0).unwrap();
/// assert_eq!(dst.as_slice(), &[0, 0, 0, 255, 255, 255]);
/// ```
pub fn grayscale_from_range(
    src: &Image<f32, 1>,
    dst: &mut Image<u8, 3>,
    vmin: f32,
    vmax: f32,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    debug_assert!(vmin < vmax);

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let t = normalize_to_range(src_pixel[0], vmin, vmax);
        let v = (t * 255.0).round() as u8;
        dst_pixel[0] = v;
        dst_pixel[1] = v;
        dst_pixel[2] = v;
    });

    Ok(())
}

/// Render a signed error image as RGB8 with a diverging blue-white-red ramp.
///
/// `vmin` maps to blue, the midpoint of the range to near-white and `vmax` to
/// red; values outside the range are clamped. Use a symmetric range
/// (`vmin == -vmax`) so that zero error lands on the neutral midpoint.
///
/// # Arguments
///
/// * `src` - The input error image with shape (H, W, 1).
/// * `dst` - The output RGB image with shape (H, W, 3).
/// * `vmin` - The value mapped to the blue end.
/// * `vmax` - The value mapped to the red end.
pub fn diverging_from_range(
    src: &Image<f32, 1>,
    dst: &mut Image<u8, 3>,
    vmin: f32,
    vmax: f32,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    debug_assert!(vmin < vmax);

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let t = normalize_to_range(src_pixel[0], vmin, vmax);
        // interpolate in two halves through the neutral midpoint
        let (a, b, s) = if t < 0.5 {
            (DIVERGING_LOW, DIVERGING_MID, t * 2.0)
        } else {
            (DIVERGING_MID, DIVERGING_HIGH, (t - 0.5) * 2.0)
        };
        for (out, (lo, hi)) in dst_pixel.iter_mut().zip(a.iter().zip(b.iter())) {
            *out = (lo + (hi - lo) * s).round() as u8;
        }
    });

    Ok(())
}
