use crate::{errors::PoreError, traversal::Pore};

/// Computes the physical area of each pore, in pore order.
///
/// Each pore's pixel count is multiplied by `pixel_area_scale`.
pub fn pore_areas(pores: &[Pore], pixel_area_scale: f64) -> Vec<f64> {
    pores
        .iter()
        .map(|pore| pore.len() as f64 * pixel_area_scale)
        .collect()
}

/// Computes a fixed-range histogram of pore areas.
///
/// The range `(min, max)` is split into `hist.len()` equal bins and each
/// area is counted in the bin it falls into. Areas outside the range are
/// clamped into the first or last bin.
///
/// # Errors
///
/// Returns an error if `hist` is empty or the range is empty or reversed.
///
/// # Examples
///
/// ```
/// use poros_analysis::report::area_histogram;
///
/// let areas = [5.0, 15.0, 15.5, 25.0];
/// let mut hist = vec![0; 3];
///
/// area_histogram(&areas, (0.0, 30.0), &mut hist).unwrap();
/// assert_eq!(hist, vec![1, 2, 1]);
/// ```
pub fn area_histogram(
    areas: &[f64],
    range: (f64, f64),
    hist: &mut [usize],
) -> Result<(), PoreError> {
    let num_bins = hist.len();
    if num_bins == 0 {
        return Err(PoreError::InvalidHistogramBins(num_bins));
    }

    let (min, max) = range;
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(PoreError::InvalidHistogramRange(min, max));
    }

    let bin_width = (max - min) / num_bins as f64;
    for &area in areas {
        let bin = ((area - min) / bin_width).floor();
        let bin = (bin.max(0.0) as usize).min(num_bins - 1);
        hist[bin] += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::find_pores;
    use approx::assert_relative_eq;
    use poros_image::{BinaryImage, GridSize};

    #[test]
    fn areas_scale_with_pixel_size() -> Result<(), PoreError> {
        #[rustfmt::skip]
        let image = BinaryImage::new(
            GridSize { rows: 2, cols: 4 },
            vec![
                1, 1, 0, 1, //
                1, 1, 0, 0, //
            ],
        )?;
        let pores = find_pores(&image)?;
        let areas = pore_areas(&pores, 1.35 * 1.35);

        assert_eq!(areas.len(), 2);
        let total: f64 = areas.iter().sum();
        assert_relative_eq!(total, 5.0 * 1.35 * 1.35);
        Ok(())
    }

    #[test]
    fn histogram_counts_fall_in_bins() -> Result<(), PoreError> {
        let areas = [0.5, 1.5, 1.6, 9.9, 100.0, -3.0];
        let mut hist = vec![0; 10];
        area_histogram(&areas, (0.0, 10.0), &mut hist)?;
        // out-of-range values land in the edge bins
        assert_eq!(hist[0], 2);
        assert_eq!(hist[1], 2);
        assert_eq!(hist[9], 2);
        assert_eq!(hist.iter().sum::<usize>(), areas.len());
        Ok(())
    }

    #[test]
    fn histogram_rejects_empty_bins() {
        let mut hist = vec![];
        assert!(matches!(
            area_histogram(&[1.0], (0.0, 1.0), &mut hist),
            Err(PoreError::InvalidHistogramBins(0))
        ));
    }

    #[test]
    fn histogram_rejects_reversed_range() {
        let mut hist = vec![0; 4];
        assert!(matches!(
            area_histogram(&[1.0], (10.0, 0.0), &mut hist),
            Err(PoreError::InvalidHistogramRange(..))
        ));
    }
}
