use poros_analysis::traversal::Pore;
use poros_image::{BinaryImage, RgbImage};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{colormap::jet, error::VizError};

/// Renders an RGB overlay of the detected pores.
///
/// The binary grid becomes the gray base (0 black, 1 white) and each pore
/// is painted with a distinct jet colormap color. Color assignment is
/// shuffled with an RNG seeded from `seed`, so neighboring pores get
/// visually distinct hues and the output is reproducible for a fixed seed.
///
/// # Errors
///
/// Returns an error if a pore references a pixel outside the grid.
///
/// # Examples
///
/// ```
/// use poros_analysis::traversal::find_pores;
/// use poros_image::{BinaryImage, GridSize};
/// use poros_viz::render_pores;
///
/// let image = BinaryImage::new(
///     GridSize { rows: 2, cols: 2 },
///     vec![1, 0, 0, 0],
/// ).unwrap();
///
/// let pores = find_pores(&image).unwrap();
/// let overlay = render_pores(&image, &pores, 42).unwrap();
///
/// // background stays black, the pore gets a colormap color
/// assert_eq!(overlay.get(0, 1), Some([0, 0, 0]));
/// assert_ne!(overlay.get(0, 0), Some([255, 255, 255]));
/// ```
pub fn render_pores(bw: &BinaryImage, pores: &[Pore], seed: u64) -> Result<RgbImage, VizError> {
    let size = bw.size();
    let mut img = RgbImage::from_size_val(size, 0)?;

    // gray base from the binary grid
    let img_data = img.as_slice_mut();
    for (idx, &v) in bw.as_slice().iter().enumerate() {
        let px = v * 255;
        img_data[idx * 3..idx * 3 + 3].copy_from_slice(&[px, px, px]);
    }

    let mut color_ids: Vec<usize> = (0..pores.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    color_ids.shuffle(&mut rng);

    let denom = pores.len().max(1) as f32;
    for (pore, &color_id) in pores.iter().zip(color_ids.iter()) {
        let color = jet(color_id as f32 / denom);
        for &(row, col) in pore.pixels() {
            if bw.get(row, col).is_none() {
                return Err(VizError::PixelOutOfBounds(row, col));
            }
            img.set(row, col, color)?;
        }
    }

    Ok(img)
}
