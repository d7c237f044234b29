use imdiff_image::{Image, ImageError};

use crate::parallel;

/// Reduce a multi-channel pixel to a single intensity by averaging its channels.
///
/// Every channel contributes with the same weight, alpha included. For a
/// single-channel input this is a plain copy.
///
/// # Arguments
///
/// * `src` - The input image with C channels.
/// * `dst` - The output intensity image with 1 channel.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use imdiff_image::{Image, ImageSize};
/// use imdiff_imgproc::color::gray_from_channel_mean;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![1f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// gray_from_channel_mean(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.get([0, 0, 0]), Some(&1.0f32));
/// ```
pub fn gray_from_channel_mean<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, 1>,
) -> Result<(), ImageError>
where
    T: Send + Sync + num_traits::Float,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let num_channels = T::from(C).ok_or(ImageError::CastError)?;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let sum = src_pixel.iter().fold(T::zero(), |acc, &v| acc + v);
        dst_pixel[0] = sum / num_channels;
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use imdiff_image::{Image, ImageError, ImageSize};

    #[test]
    fn gray_from_rgb_mean() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0.0, 0.5, 1.0, 1.0, 1.0, 1.0],
        )?;
        let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::gray_from_channel_mean(&image, &mut gray)?;

        assert_eq!(gray.as_slice(), &[0.5, 1.0]);

        Ok(())
    }

    #[test]
    fn gray_from_rgba_includes_alpha() -> Result<(), ImageError> {
        let image = Image::<f32, 4>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![1.0, 1.0, 1.0, 0.0],
        )?;
        let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::gray_from_channel_mean(&image, &mut gray)?;

        assert_eq!(gray.as_slice(), &[0.75]);

        Ok(())
    }

    #[test]
    fn gray_from_single_channel_is_copy() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.25, 0.75],
        )?;
        let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::gray_from_channel_mean(&image, &mut gray)?;

        assert_eq!(gray.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn gray_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let mut gray = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            0.0,
        )?;

        let res = super::gray_from_channel_mean(&image, &mut gray);
        assert!(matches!(res, Err(ImageError::InvalidImageSize(..))));

        Ok(())
    }
}
