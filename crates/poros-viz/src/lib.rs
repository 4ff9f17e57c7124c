#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the crate.
mod error;

/// colormap utilities.
pub mod colormap;

/// pore overlay rendering.
pub mod render;

pub use crate::error::VizError;
pub use crate::render::render_pores;
