#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the crate.
mod error;

/// PNG image loading and saving.
pub mod png;

/// Export of computed pore areas.
pub mod export;

pub use crate::error::IoError;
