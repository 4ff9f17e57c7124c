/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// The PNG layout is not the expected single-channel 8-bit.
    #[error("Unsupported png layout: {0}")]
    UnsupportedPngLayout(String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] poros_image::ImageError),

    /// Error when a dataset name is missing from an areas file.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// Error to serialize the exported areas.
    #[error("Failed to serialize areas. {0}")]
    JsonError(#[from] serde_json::Error),
}
