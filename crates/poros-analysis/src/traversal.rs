use std::collections::VecDeque;

use poros_image::BinaryImage;

use crate::{errors::PoreError, neighborhood::neighbors_8};

/// Per-pixel traversal state.
///
/// A pixel transitions `Unvisited -> Queued -> Processed` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelStatus {
    /// The pixel has not been seen yet.
    #[default]
    Unvisited,
    /// The pixel sits in one of the two queues.
    Queued,
    /// The pixel has been popped and its neighbors enqueued.
    Processed,
}

/// A maximal 8-connected region of white pixels, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pore {
    pixels: Vec<(usize, usize)>,
}

impl Pore {
    /// The pixel coordinates `(row, col)` of the pore, in discovery order.
    pub fn pixels(&self) -> &[(usize, usize)] {
        &self.pixels
    }

    /// The number of pixels in the pore.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the pore has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether the pore contains the given coordinate.
    pub fn contains(&self, coord: (usize, usize)) -> bool {
        self.pixels.contains(&coord)
    }
}

/// Partitions the white pixels of a binary image into maximal 8-connected
/// pores using a dual-queue breadth-first traversal.
///
/// Every pixel is visited exactly once. The white queue has absolute
/// priority over the black queue, so a pore can only grow while white
/// pixels remain queued and is sealed the instant the white queue drains.
/// Runs in O(pixel count) time and auxiliary space; no state survives
/// between calls.
///
/// An empty grid yields an empty list.
///
/// # Examples
///
/// ```
/// use poros_analysis::traversal::find_pores;
/// use poros_image::{BinaryImage, GridSize};
///
/// // two pores separated by a black column
/// let image = BinaryImage::new(
///     GridSize { rows: 1, cols: 5 },
///     vec![1, 1, 0, 1, 1],
/// ).unwrap();
///
/// let pores = find_pores(&image).unwrap();
/// assert_eq!(pores.len(), 2);
/// ```
pub fn find_pores(bw: &BinaryImage) -> Result<Vec<Pore>, PoreError> {
    let size = bw.size();
    if size.num_pixels() == 0 {
        return Ok(Vec::new());
    }

    let data = bw.as_slice();
    let cols = size.cols;

    let mut w_queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut b_queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut status = vec![PixelStatus::Unvisited; size.num_pixels()];

    let mut pore: Vec<(usize, usize)> = Vec::new();
    let mut pores: Vec<Pore> = Vec::new();
    let mut n_notvisited = size.num_pixels();

    // seed the traversal at the origin
    if data[0] == 1 {
        w_queue.push_back((0, 0));
    } else {
        b_queue.push_back((0, 0));
    }
    status[0] = PixelStatus::Queued;
    n_notvisited -= 1;

    loop {
        // white pixels take priority so a pore is fully collected before
        // any background pixel advances the frontier
        let loc = if let Some(loc) = w_queue.pop_front() {
            pore.push(loc);
            loc
        } else {
            // the white queue drained: seal the pore under construction
            if !pore.is_empty() {
                pores.push(Pore {
                    pixels: std::mem::take(&mut pore),
                });
            }
            match b_queue.pop_front() {
                Some(loc) => loc,
                None => break,
            }
        };

        status[loc.0 * cols + loc.1] = PixelStatus::Processed;

        for (i, j) in neighbors_8(loc, size) {
            let idx = i * cols + j;
            if status[idx] == PixelStatus::Unvisited {
                if data[idx] == 1 {
                    w_queue.push_back((i, j));
                } else {
                    b_queue.push_back((i, j));
                }
                status[idx] = PixelStatus::Queued;
                n_notvisited -= 1;
            }
        }
    }

    // the lattice is fully connected under 8-adjacency, so a non-zero
    // count here is a defect in the engine, not a property of the input
    if n_notvisited != 0 {
        return Err(PoreError::IncompleteTraversal(n_notvisited));
    }

    log::trace!("traversal found {} pores", pores.len());

    Ok(pores)
}
