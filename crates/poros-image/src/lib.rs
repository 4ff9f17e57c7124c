#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image and grid types module.
mod image;

/// error types for the crate.
mod error;

pub use crate::error::ImageError;
pub use crate::image::{BinaryImage, GridSize, RgbImage};
