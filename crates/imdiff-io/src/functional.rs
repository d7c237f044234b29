use std::path::Path;

use imdiff_image::{Image, ImageSize};

use crate::error::IoError;

/// A decoded image in one of the supported 8-bit pixel layouts.
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl GenericImage {
    /// Get the size of the decoded image in pixels.
    pub fn size(&self) -> ImageSize {
        match self {
            GenericImage::L8(img) => img.size(),
            GenericImage::La8(img) => img.size(),
            GenericImage::Rgb8(img) => img.size(),
            GenericImage::Rgba8(img) => img.size(),
        }
    }

    /// Get the number of channels of the decoded image.
    pub fn num_channels(&self) -> usize {
        match self {
            GenericImage::L8(img) => img.num_channels(),
            GenericImage::La8(img) => img.num_channels(),
            GenericImage::Rgb8(img) => img.num_channels(),
            GenericImage::Rgba8(img) => img.num_channels(),
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate
/// with automatic format detection.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the decoded pixel data.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    // decode the data directly from memory
    let img = image::ImageReader::new(std::io::Cursor::new(&mmap))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = match img.color() {
        image::ColorType::L8 => {
            GenericImage::L8(Image::<u8, 1>::new(size, img.into_luma8().into_raw())?)
        }
        image::ColorType::La8 => {
            GenericImage::La8(Image::<u8, 2>::new(size, img.into_luma_alpha8().into_raw())?)
        }
        image::ColorType::Rgb8 => {
            GenericImage::Rgb8(Image::<u8, 3>::new(size, img.into_rgb8().into_raw())?)
        }
        image::ColorType::Rgba8 => {
            GenericImage::Rgba8(Image::<u8, 4>::new(size, img.into_rgba8().into_raw())?)
        }
        other => return Err(IoError::UnsupportedImageFormat(other)),
    };

    Ok(image)
}
