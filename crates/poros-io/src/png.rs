use std::fs::{self, File};
use std::path::Path;

use png::{BitDepth, ColorType, Decoder, Encoder};
use poros_image::{BinaryImage, GridSize, RgbImage};

use crate::error::IoError;

/// Read a single-channel 8-bit PNG and binarize it.
///
/// Pixels strictly greater than `threshold` become white (1), the rest
/// black (0).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
/// * `threshold` - The binarization cut, conventionally 127.
///
/// # Returns
///
/// A binary image ready for pore analysis.
pub fn read_binary_image_png(
    file_path: impl AsRef<Path>,
    threshold: u8,
) -> Result<BinaryImage, IoError> {
    let (buf, size) = read_png_mono8_impl(file_path)?;
    let data = buf.iter().map(|&v| u8::from(v > threshold)).collect();
    Ok(BinaryImage::new(size, data)?)
}

/// Read a single-channel 8-bit PNG as raw grayscale data.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// The row-major pixel data and the grid size.
pub fn read_image_png_mono8(
    file_path: impl AsRef<Path>,
) -> Result<(Vec<u8>, GridSize), IoError> {
    read_png_mono8_impl(file_path)
}

// utility function to read and validate a mono8 png file
fn read_png_mono8_impl(file_path: impl AsRef<Path>) -> Result<(Vec<u8>, GridSize), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if let Some(extension) = file_path.extension() {
        if extension != "png" {
            return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
        }
    } else {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.color_type != ColorType::Grayscale || info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedPngLayout(format!(
            "expected 8-bit grayscale, got {:?} {:?}",
            info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());
    let size = GridSize {
        rows: info.height as usize,
        cols: info.width as usize,
    };

    Ok((buf, size))
}

/// Writes the given RGB overlay to the given file path as an 8-bit PNG.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The RGB image data.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &RgbImage,
) -> Result<(), IoError> {
    write_png_impl(
        file_path,
        image.as_slice(),
        image.size(),
        ColorType::Rgb,
    )
}

/// Writes the given binary grid to the given file path as an 8-bit
/// grayscale PNG (0 black, 1 white as 255).
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The binary image data.
pub fn write_binary_image_png(
    file_path: impl AsRef<Path>,
    image: &BinaryImage,
) -> Result<(), IoError> {
    let buf: Vec<u8> = image.as_slice().iter().map(|&v| v * 255).collect();
    write_png_impl(file_path, &buf, image.size(), ColorType::Grayscale)
}

fn write_png_impl(
    file_path: impl AsRef<Path>,
    image_data: &[u8],
    image_size: GridSize,
    color_type: ColorType,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(file, image_size.cols as u32, image_size.rows as u32);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(image_data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_binary_roundtrip() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("bw.png");

        #[rustfmt::skip]
        let image = BinaryImage::new(
            GridSize { rows: 2, cols: 3 },
            vec![
                1, 0, 1, //
                0, 1, 0, //
            ],
        )?;

        write_binary_image_png(&file_path, &image)?;
        assert!(file_path.exists());

        let image_back = read_binary_image_png(&file_path, 127)?;
        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn write_read_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("overlay.png");

        let size = GridSize { rows: 2, cols: 2 };
        let image = RgbImage::new(size, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9])?;
        write_image_png_rgb8(&file_path, &image)?;

        let (buf, size_back) = {
            let file = fs::File::open(&file_path)?;
            let mut reader = Decoder::new(file)
                .read_info()
                .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
            let mut buf = vec![0; reader.output_buffer_size()];
            let info = reader
                .next_frame(&mut buf)
                .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
            buf.truncate(info.buffer_size());
            (
                buf,
                GridSize {
                    rows: info.height as usize,
                    cols: info.width as usize,
                },
            )
        };
        assert_eq!(size_back, size);
        assert_eq!(buf, image.as_slice());
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = read_binary_image_png("no/such/file.png", 127);
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn wrong_extension_is_an_error() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.jpg");
        std::fs::write(&file_path, b"not a png")?;
        let res = read_binary_image_png(&file_path, 127);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }
}
