use poros_image::{BinaryImage, ImageError};

use crate::{errors::PoreError, traversal::Pore};

/// Filters pores by pixel count, erasing undersized pores to background.
///
/// `dst` receives a copy of `src` with every pore of fewer than `min_size`
/// pixels set to 0; the retained pores are returned in their original
/// relative order. `src` itself is never modified, so the caller keeps the
/// unfiltered grid. A `min_size` of 0 retains everything.
///
/// Re-running the filter on its own output with the same threshold is a
/// no-op.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size.
///
/// # Examples
///
/// ```
/// use poros_analysis::{filter::filter_pores_by_size, traversal::find_pores};
/// use poros_image::{BinaryImage, GridSize};
///
/// let image = BinaryImage::new(
///     GridSize { rows: 1, cols: 5 },
///     vec![1, 0, 1, 1, 1],
/// ).unwrap();
///
/// let pores = find_pores(&image).unwrap();
/// let mut filtered = image.clone();
/// let retained = filter_pores_by_size(&image, &mut filtered, pores, 2).unwrap();
///
/// assert_eq!(retained.len(), 1);
/// assert_eq!(filtered.as_slice(), &[0, 0, 1, 1, 1]);
/// ```
pub fn filter_pores_by_size(
    src: &BinaryImage,
    dst: &mut BinaryImage,
    pores: Vec<Pore>,
    min_size: usize,
) -> Result<Vec<Pore>, PoreError> {
    if src.size() != dst.size() {
        return Err(PoreError::ImageError(ImageError::InvalidImageSize(
            src.rows(),
            src.cols(),
            dst.rows(),
            dst.cols(),
        )));
    }

    dst.as_slice_mut().copy_from_slice(src.as_slice());

    let mut retained = Vec::with_capacity(pores.len());
    for pore in pores {
        if pore.len() < min_size {
            for &(i, j) in pore.pixels() {
                dst.set(i, j, 0)?;
            }
        } else {
            retained.push(pore);
        }
    }

    Ok(retained)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::find_pores;
    use poros_image::GridSize;

    fn grid(rows: usize, cols: usize, data: Vec<u8>) -> BinaryImage {
        BinaryImage::new(GridSize { rows, cols }, data).unwrap()
    }

    #[test]
    fn zero_threshold_is_a_noop() -> Result<(), PoreError> {
        let image = grid(2, 2, vec![1, 0, 0, 1]);
        let pores = find_pores(&image)?;
        let mut filtered = image.clone();
        let retained = filter_pores_by_size(&image, &mut filtered, pores, 0)?;
        assert_eq!(retained.len(), 1);
        assert_eq!(filtered, image);
        Ok(())
    }

    #[test]
    fn undersized_pore_is_erased() -> Result<(), PoreError> {
        #[rustfmt::skip]
        let image = grid(4, 4, vec![
            1, 1, 1, 1, //
            1, 1, 1, 1, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
        ]);
        let pores = find_pores(&image)?;
        assert_eq!(pores.len(), 1);

        let mut filtered = image.clone();
        let retained = filter_pores_by_size(&image, &mut filtered, pores, 10)?;
        assert!(retained.is_empty());
        assert_eq!(filtered.num_white_pixels(), 0);
        // the source grid keeps its pixels
        assert_eq!(image.num_white_pixels(), 8);
        Ok(())
    }

    #[test]
    fn threshold_equal_to_size_retains() -> Result<(), PoreError> {
        #[rustfmt::skip]
        let image = grid(3, 3, vec![
            0, 0, 0, //
            0, 1, 0, //
            0, 0, 0, //
        ]);
        let pores = find_pores(&image)?;

        let mut filtered = image.clone();
        let retained = filter_pores_by_size(&image, &mut filtered, pores.clone(), 1)?;
        assert_eq!(retained.len(), 1);
        assert_eq!(filtered.num_white_pixels(), 1);

        let retained = filter_pores_by_size(&image, &mut filtered, pores, 2)?;
        assert!(retained.is_empty());
        assert_eq!(filtered.num_white_pixels(), 0);
        Ok(())
    }

    #[test]
    fn filter_is_idempotent() -> Result<(), PoreError> {
        #[rustfmt::skip]
        let image = grid(3, 5, vec![
            1, 0, 1, 1, 0, //
            0, 0, 1, 1, 0, //
            1, 0, 0, 0, 1, //
        ]);
        let pores = find_pores(&image)?;

        let mut once = image.clone();
        let retained = filter_pores_by_size(&image, &mut once, pores, 2)?;

        let mut twice = once.clone();
        let retained_again =
            filter_pores_by_size(&once, &mut twice, retained.clone(), 2)?;

        assert_eq!(retained, retained_again);
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn retention_is_monotone_in_threshold() -> Result<(), PoreError> {
        #[rustfmt::skip]
        let image = grid(4, 6, vec![
            1, 1, 0, 1, 0, 1, //
            1, 1, 0, 0, 0, 1, //
            0, 0, 0, 0, 0, 0, //
            1, 0, 1, 1, 1, 0, //
        ]);
        let pores = find_pores(&image)?;

        let mut prev_count = usize::MAX;
        let mut prev_pixels = usize::MAX;
        for min_size in 0..6 {
            let mut filtered = image.clone();
            let retained =
                filter_pores_by_size(&image, &mut filtered, pores.clone(), min_size)?;
            let pixels: usize = retained.iter().map(|p| p.len()).sum();
            assert!(retained.len() <= prev_count);
            assert!(pixels <= prev_pixels);
            assert_eq!(filtered.num_white_pixels(), pixels);
            prev_count = retained.len();
            prev_pixels = pixels;
        }
        Ok(())
    }

    #[test]
    fn size_mismatch_is_rejected() -> Result<(), PoreError> {
        let image = grid(2, 2, vec![1, 0, 0, 1]);
        let pores = find_pores(&image)?;
        let mut wrong = grid(3, 3, vec![0; 9]);
        let res = filter_pores_by_size(&image, &mut wrong, pores, 1);
        assert!(matches!(
            res,
            Err(PoreError::ImageError(ImageError::InvalidImageSize(
                2, 2, 3, 3
            )))
        ));
        Ok(())
    }
}
