#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for comparison purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// basic operations over the pixel data.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
