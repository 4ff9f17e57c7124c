#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use poros_image as image;

#[doc(inline)]
pub use poros_analysis as analysis;

#[doc(inline)]
pub use poros_io as io;

#[doc(inline)]
pub use poros_viz as viz;
