use crate::error::ImageError;

/// Grid size in pixels
///
/// A struct to represent the size of a pixel grid as rows and columns.
///
/// # Examples
///
/// ```
/// use poros_image::GridSize;
///
/// let size = GridSize { rows: 20, cols: 10 };
///
/// assert_eq!(size.rows, 20);
/// assert_eq!(size.cols, 10);
/// assert_eq!(size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Number of rows in the grid
    pub rows: usize,
    /// Number of columns in the grid
    pub cols: usize,
}

impl GridSize {
    /// Total number of pixels in the grid.
    pub fn num_pixels(&self) -> usize {
        self.rows * self.cols
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "GridSize {{ rows: {}, cols: {} }}", self.rows, self.cols)
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            rows: size[0],
            cols: size[1],
        }
    }
}

/// A binary (black/white) image stored row-major with values in {0, 1}.
///
/// Value 0 is the black background, value 1 is white foreground. The
/// constructor rejects any other encoding; binarize upstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    size: GridSize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// Create a new binary image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in pixels.
    /// * `data` - The row-major pixel data, every value 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length does not match the grid size,
    /// if any value is not 0 or 1, or if exactly one dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use poros_image::{BinaryImage, GridSize};
    ///
    /// let image = BinaryImage::new(
    ///     GridSize { rows: 2, cols: 2 },
    ///     vec![0, 1, 1, 0],
    /// ).unwrap();
    ///
    /// assert_eq!(image.num_white_pixels(), 2);
    /// ```
    pub fn new(size: GridSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if (size.rows == 0) != (size.cols == 0) {
            return Err(ImageError::ZeroGridExtent(size.rows, size.cols));
        }

        if data.len() != size.num_pixels() {
            return Err(ImageError::InvalidDataLength(data.len(), size.num_pixels()));
        }

        if let Some(idx) = data.iter().position(|&v| v > 1) {
            return Err(ImageError::NonBinaryValue(
                data[idx],
                idx / size.cols,
                idx % size.cols,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new binary image filled with a constant value.
    pub fn from_size_val(size: GridSize, val: u8) -> Result<Self, ImageError> {
        Self::new(size, vec![val; size.num_pixels()])
    }

    /// The size of the grid.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    /// Number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// Total number of pixels.
    pub fn num_pixels(&self) -> usize {
        self.size.num_pixels()
    }

    /// Number of white (foreground) pixels.
    pub fn num_white_pixels(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    /// The pixel value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size.rows && col < self.size.cols {
            Some(self.data[row * self.size.cols + col])
        } else {
            None
        }
    }

    /// Set the pixel at `(row, col)` to a binary value.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is out of bounds or the value is
    /// not 0 or 1.
    pub fn set(&mut self, row: usize, col: usize, val: u8) -> Result<(), ImageError> {
        if row >= self.size.rows || col >= self.size.cols {
            return Err(ImageError::CoordOutOfBounds(
                row,
                col,
                self.size.rows,
                self.size.cols,
            ));
        }
        if val > 1 {
            return Err(ImageError::NonBinaryValue(val, row, col));
        }
        self.data[row * self.size.cols + col] = val;
        Ok(())
    }

    /// The raw row-major pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The raw row-major pixel data, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// An 8-bit RGB image stored row-major with interleaved channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    size: GridSize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Create a new RGB image from interleaved pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if the data length does not match `rows * cols * 3`.
    pub fn new(size: GridSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if data.len() != size.num_pixels() * 3 {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.num_pixels() * 3,
            ));
        }
        Ok(Self { size, data })
    }

    /// Create a new RGB image filled with a constant channel value.
    pub fn from_size_val(size: GridSize, val: u8) -> Result<Self, ImageError> {
        Self::new(size, vec![val; size.num_pixels() * 3])
    }

    /// The size of the image.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of rows in the image.
    pub fn rows(&self) -> usize {
        self.size.rows
    }

    /// Number of columns in the image.
    pub fn cols(&self) -> usize {
        self.size.cols
    }

    /// The RGB values at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        if row < self.size.rows && col < self.size.cols {
            let idx = (row * self.size.cols + col) * 3;
            Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
        } else {
            None
        }
    }

    /// Set the RGB values at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, color: [u8; 3]) -> Result<(), ImageError> {
        if row >= self.size.rows || col >= self.size.cols {
            return Err(ImageError::CoordOutOfBounds(
                row,
                col,
                self.size.rows,
                self.size.cols,
            ));
        }
        let idx = (row * self.size.cols + col) * 3;
        self.data[idx..idx + 3].copy_from_slice(&color);
        Ok(())
    }

    /// The raw interleaved pixel data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The raw interleaved pixel data, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
