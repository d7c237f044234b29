//! Per-pixel difference grids between two images.

use imdiff_image::{Image, ImageError};

use crate::parallel;

/// Compute the per-pixel signed difference between two images.
///
/// Each destination cell is `src1 - src2` at the same position.
///
/// # Arguments
///
/// * `src1` - The first input image with shape (H, W, C).
/// * `src2` - The second input image with shape (H, W, C).
/// * `dst` - The output difference image with shape (H, W, C).
///
/// # Example
///
/// ```
/// use imdiff_image::{Image, ImageSize};
/// use imdiff_imgproc::diff::pixel_diff;
///
/// let a = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![0.5, 1.0],
/// ).unwrap();
/// let b = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![0.25, 1.0],
/// ).unwrap();
/// let mut d = Image::<f32, 1>::from_size_val(a.size(), 0.0).unwrap();
///
/// pixel_diff(&a, &b, &mut d).unwrap();
/// assert_eq!(d.as_slice(), &[0.25, 0.0]);
/// ```
pub fn pixel_diff<const C: usize>(
    src1: &Image<f32, C>,
    src2: &Image<f32, C>,
    dst: &mut Image<f32, C>,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }
    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val_two(src1, src2, dst, |a, b, out| {
        *out = a - b;
    });

    Ok(())
}

/// Compute the per-pixel relative difference between two images.
///
/// Each destination cell is `(src1 - src2) / (max(src1, src2) + eps)`. The
/// additive `eps` keeps the denominator away from zero when both inputs are
/// zero at the same position.
///
/// # Arguments
///
/// * `src1` - The first input image with shape (H, W, C).
/// * `src2` - The second input image with shape (H, W, C).
/// * `dst` - The output relative difference image with shape (H, W, C).
/// * `eps` - The stabilizing constant added to the denominator.
pub fn relative_diff<const C: usize>(
    src1: &Image<f32, C>,
    src2: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    eps: f32,
) -> Result<(), ImageError> {
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }
    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val_two(src1, src2, dst, |a, b, out| {
        *out = (a - b) / (a.max(*b) + eps);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use imdiff_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_pixel_diff() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 0.5, 1.0, 1.0],
        )?;
        let b = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 0.25, 1.5, 1.0],
        )?;
        let mut d = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;

        super::pixel_diff(&a, &b, &mut d)?;

        assert_eq!(d.as_slice(), &[0.0, 0.25, -0.5, 0.0]);

        Ok(())
    }

    #[test]
    fn test_relative_diff() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![1.0, 0.5],
        )?;
        let b = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.5, 1.0],
        )?;
        let mut d = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;

        super::relative_diff(&a, &b, &mut d, 1e-6)?;

        assert_relative_eq!(d.as_slice()[0], 0.5, epsilon = 1e-5);
        assert_relative_eq!(d.as_slice()[1], -0.5, epsilon = 1e-5);

        Ok(())
    }

    #[test]
    fn test_relative_diff_zero_pixels() -> Result<(), ImageError> {
        // both inputs zero at the same position must not divide by zero
        let a = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let b = a.clone();
        let mut d = Image::<f32, 1>::from_size_val(a.size(), f32::NAN)?;

        super::relative_diff(&a, &b, &mut d, 1e-6)?;

        assert!(d.as_slice().iter().all(|v| *v == 0.0));

        Ok(())
    }

    #[test]
    fn test_diff_size_mismatch() -> Result<(), ImageError> {
        let a = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let b = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;
        let mut d = Image::<f32, 1>::from_size_val(a.size(), 0.0)?;

        let res = super::pixel_diff(&a, &b, &mut d);
        assert!(matches!(res, Err(ImageError::InvalidImageSize(..))));

        Ok(())
    }
}
