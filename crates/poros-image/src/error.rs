/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when exactly one grid dimension is zero.
    #[error("Grid has a zero extent in one dimension ({0}x{1})")]
    ZeroGridExtent(usize, usize),

    /// Error when a pixel value is not 0 or 1.
    #[error("Pixel value {0} at ({1}, {2}) is not binary")]
    NonBinaryValue(u8, usize, usize),

    /// Error when a coordinate falls outside the grid.
    #[error("Coordinate ({0}, {1}) is out of bounds for grid {2}x{3}")]
    CoordOutOfBounds(usize, usize, usize, usize),

    /// Error when two grids are expected to have the same size.
    #[error("Grid sizes do not match ({0}x{1} != {2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),
}
