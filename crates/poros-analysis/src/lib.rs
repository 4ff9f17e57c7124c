#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for pore analysis.
pub mod errors;

/// Neighbor enumeration over the pixel grid.
pub mod neighborhood;

/// The dual-queue traversal engine that partitions white pixels into pores.
pub mod traversal;

/// Size-based filtering of detected pores.
pub mod filter;

/// Run configuration and its validation.
pub mod config;

/// Pore area computation and histograms.
pub mod report;

/// Disjoint-set labeling, used as an independent oracle in tests.
pub mod union_find;

use poros_image::BinaryImage;

use crate::{
    config::PoreConfig,
    errors::PoreError,
    filter::filter_pores_by_size,
    report::pore_areas,
    traversal::{find_pores, Pore},
};

/// The result of a full pore analysis run.
#[derive(Debug, Clone)]
pub struct PoreAnalysis {
    /// The input grid with every undersized pore erased to background.
    pub filtered: BinaryImage,
    /// The retained pores, in discovery order.
    pub pores: Vec<Pore>,
    /// Physical area of each retained pore, in pore order.
    pub areas: Vec<f64>,
}

/// Runs the full pipeline on a binary image: pore detection, size
/// filtering, and area computation.
///
/// The input grid is not modified; the filtered grid is returned as part
/// of the analysis.
///
/// # Examples
///
/// ```
/// use poros_analysis::{analyze, config::PoreConfig};
/// use poros_image::{BinaryImage, GridSize};
///
/// let image = BinaryImage::new(
///     GridSize { rows: 2, cols: 2 },
///     vec![1, 1, 0, 0],
/// ).unwrap();
///
/// let config = PoreConfig::new(1.0, 0).unwrap();
/// let analysis = analyze(&image, &config).unwrap();
///
/// assert_eq!(analysis.pores.len(), 1);
/// assert_eq!(analysis.areas, vec![2.0]);
/// ```
pub fn analyze(bw: &BinaryImage, config: &PoreConfig) -> Result<PoreAnalysis, PoreError> {
    let pores = find_pores(bw)?;

    let mut filtered = bw.clone();
    let pores = filter_pores_by_size(bw, &mut filtered, pores, config.size_threshold)?;

    let areas = pore_areas(&pores, config.pixel_area_scale);

    log::debug!(
        "retained {} pores covering {} pixels",
        pores.len(),
        filtered.num_white_pixels()
    );

    Ok(PoreAnalysis {
        filtered,
        pores,
        areas,
    })
}
