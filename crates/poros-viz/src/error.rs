use poros_image::ImageError;

/// An error type for the visualization module.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    /// Error coming from the image container.
    #[error(transparent)]
    ImageError(#[from] ImageError),

    /// Error when a pore references a pixel outside the grid.
    #[error("Pore pixel ({0}, {1}) is outside the grid")]
    PixelOutOfBounds(usize, usize),
}
