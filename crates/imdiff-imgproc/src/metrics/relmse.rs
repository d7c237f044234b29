use imdiff_image::{Image, ImageError};

/// Compute the relative mean squared error (relMSE) between two images.
///
/// Each squared difference is normalized by the larger of the two compared
/// values plus a stabilizing constant:
///
/// $ relMSE = \frac{1}{n} \sum_{i=1}^{n} \left( \frac{I_1 - I_2}{\max(I_1, I_2) + \epsilon} \right)^2 $
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
/// * `eps` - The stabilizing constant added to the denominator.
///
/// # Returns
///
/// The relative mean squared error between the two images.
pub fn relative_mse<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
    eps: f32,
) -> Result<f32, ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.rows(),
            image1.cols(),
            image2.rows(),
            image2.cols(),
        ));
    }

    let relmse = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(a, b)| ((a - b) / (a.max(*b) + eps)).powi(2))
        .sum::<f32>();

    Ok(relmse / (image1.numel() as f32))
}

/// Compute the relative root mean squared error between two images.
///
/// $ rel\ rMSE = \sqrt{relMSE} $
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
/// * `eps` - The stabilizing constant added to the denominator.
///
/// # Example
///
/// ```
/// use imdiff_image::{Image, ImageSize};
/// use imdiff_imgproc::metrics::relative_rmse;
///
/// let image1 = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 1,
///   },
///   vec![0f32, 1f32],
/// )
/// .unwrap();
///
/// let image2 = image1.clone();
///
/// let relmse = relative_rmse(&image1, &image2, 1e-6).unwrap();
/// assert_eq!(relmse, 0f32);
/// ```
pub fn relative_rmse<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
    eps: f32,
) -> Result<f32, ImageError> {
    Ok(relative_mse(image1, image2, eps)?.sqrt())
}
