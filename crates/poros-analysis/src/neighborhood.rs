use poros_image::GridSize;

/// Returns the in-bounds 8-connected neighbors of a coordinate.
///
/// The 3x3 offset window around `(row, col)` is scanned column-major
/// (column offset outer, row offset inner), skipping the center, and
/// offsets landing outside the grid are dropped. Diagonal neighbors are
/// included.
///
/// # Examples
///
/// ```
/// use poros_analysis::neighborhood::neighbors_8;
/// use poros_image::GridSize;
///
/// let size = GridSize { rows: 3, cols: 3 };
///
/// assert_eq!(neighbors_8((1, 1), size).len(), 8);
/// assert_eq!(neighbors_8((0, 0), size).len(), 3);
/// ```
pub fn neighbors_8(coord: (usize, usize), size: GridSize) -> Vec<(usize, usize)> {
    let (row, col) = (coord.0 as i64, coord.1 as i64);
    let (rows, cols) = (size.rows as i64, size.cols as i64);

    let mut neighbors = Vec::with_capacity(8);
    for dj in -1i64..=1 {
        for di in -1i64..=1 {
            if di == 0 && dj == 0 {
                continue;
            }
            let r = row + di;
            let c = col + dj;
            if r >= 0 && r < rows && c >= 0 && c < cols {
                neighbors.push((r as usize, c as usize));
            }
        }
    }

    neighbors
}
