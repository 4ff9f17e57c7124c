use poros_image::ImageError;

/// An error type for pore analysis operations.
#[derive(thiserror::Error, Debug)]
pub enum PoreError {
    /// Error coming from the image container.
    #[error(transparent)]
    ImageError(#[from] ImageError),

    /// Error when a negative size threshold is supplied.
    #[error("Size threshold ({0}) must be non-negative")]
    ThresholdOutOfRange(i64),

    /// Error when the pixel area scale is not finite and positive.
    #[error("Pixel area scale ({0}) must be finite and positive")]
    InvalidPixelAreaScale(f64),

    /// Error when the number of histogram bins is invalid.
    #[error("Invalid number of histogram bins: {0}")]
    InvalidHistogramBins(usize),

    /// Error when the histogram range is empty or reversed.
    #[error("Invalid histogram range: ({0}, {1})")]
    InvalidHistogramRange(f64, f64),

    /// Internal invariant violation: the traversal did not reach every pixel.
    #[error("Traversal left {0} pixels unvisited")]
    IncompleteTraversal(usize),
}
