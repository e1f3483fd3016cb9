//! Square sticker grid for a single face.
//!
//! Cells are stored row-major. The grid knows how to rotate itself a
//! quarter turn and how to read/write a single row or column ("strip"),
//! which is all the move engine needs from it.

use std::ops::Index;

use smallvec::SmallVec;

use super::face::ColorIndex;

/// One row or column of stickers.
///
/// Inline storage covers cubes up to 8×8 without allocating.
pub type Strip = SmallVec<[ColorIndex; 8]>;

/// A row or column of a face grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Col(usize),
}

impl Line {
    /// Row or column number.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Line::Row(i) | Line::Col(i) => i,
        }
    }
}

/// An `n×n` grid of colour indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    size: usize,
    cells: Vec<ColorIndex>,
}

impl FaceGrid {
    /// Create a grid with every cell set to `color`.
    #[must_use]
    pub fn filled(size: usize, color: ColorIndex) -> Self {
        Self {
            size,
            cells: vec![color; size * size],
        }
    }

    /// Build a grid from row-major cells. Returns `None` if the cell count
    /// is not `size * size`.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<ColorIndex>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[ColorIndex] {
        &self.cells
    }

    /// Cell at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> ColorIndex {
        self.cells[row * self.size + col]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> {
        self.cells.chunks(self.size)
    }

    /// Whether every cell holds the same colour.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        match self.cells.split_first() {
            Some((first, rest)) => rest.iter().all(|c| c == first),
            None => true,
        }
    }

    /// Number of cells holding `color`.
    #[must_use]
    pub fn count(&self, color: ColorIndex) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    // === Rotation ===

    /// Rotate the grid 90° clockwise in place.
    ///
    /// Source `(i, j)` lands on `(j, n-1-i)`. Every destination is also a
    /// source, so the cells are read from a snapshot.
    pub fn rotate_clockwise(&mut self) {
        let n = self.size;
        let snapshot = self.cells.clone();
        for i in 0..n {
            for j in 0..n {
                self.cells[j * n + (n - 1 - i)] = snapshot[i * n + j];
            }
        }
    }

    /// Rotate the grid 90° counter-clockwise in place (three clockwise turns).
    pub fn rotate_counterclockwise(&mut self) {
        for _ in 0..3 {
            self.rotate_clockwise();
        }
    }

    /// Clockwise-rotated copy of this grid.
    #[must_use]
    pub fn rotated_clockwise(&self) -> Self {
        let mut out = self.clone();
        out.rotate_clockwise();
        out
    }

    // === Strips ===

    /// Read a row or column. Columns are read top to bottom.
    #[must_use]
    pub fn read_line(&self, line: Line) -> Strip {
        let n = self.size;
        match line {
            Line::Row(r) => self.cells[r * n..(r + 1) * n].iter().copied().collect(),
            Line::Col(c) => (0..n).map(|r| self.cells[r * n + c]).collect(),
        }
    }

    /// Overwrite a row or column with `values`.
    ///
    /// With `reversed`, element `k` of the line receives `values[n-1-k]`.
    pub(crate) fn write_line(&mut self, line: Line, values: &[ColorIndex], reversed: bool) {
        let n = self.size;
        debug_assert_eq!(values.len(), n);
        for k in 0..n {
            let value = if reversed { values[n - 1 - k] } else { values[k] };
            let cell = match line {
                Line::Row(r) => r * n + k,
                Line::Col(c) => k * n + c,
            };
            self.cells[cell] = value;
        }
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = ColorIndex;

    fn index(&self, (row, col): (usize, usize)) -> &ColorIndex {
        &self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(size: usize) -> FaceGrid {
        let cells = (0..size * size).map(|i| i as ColorIndex).collect();
        FaceGrid::from_cells(size, cells).unwrap()
    }

    #[test]
    fn test_filled_is_uniform() {
        let grid = FaceGrid::filled(4, 3);
        assert!(grid.is_uniform());
        assert_eq!(grid.count(3), 16);
        assert_eq!(grid.count(0), 0);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(FaceGrid::from_cells(3, vec![0; 8]).is_none());
        assert!(FaceGrid::from_cells(3, vec![0; 9]).is_some());
    }

    #[test]
    fn test_rotate_clockwise_3x3() {
        // 0 1 2      6 3 0
        // 3 4 5  ->  7 4 1
        // 6 7 8      8 5 2
        let mut grid = numbered(3);
        grid.rotate_clockwise();
        assert_eq!(grid.cells(), &[6, 3, 0, 7, 4, 1, 8, 5, 2]);
    }

    #[test]
    fn test_rotate_clockwise_maps_cells() {
        for n in 2..=6 {
            let original = numbered(n);
            let rotated = original.rotated_clockwise();
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(rotated[(j, n - 1 - i)], original[(i, j)]);
                }
            }
        }
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let original = numbered(5);
        let mut grid = original.clone();
        for _ in 0..4 {
            grid.rotate_clockwise();
        }
        assert_eq!(grid, original);
    }

    #[test]
    fn test_counterclockwise_undoes_clockwise() {
        let original = numbered(4);
        let mut grid = original.clone();
        grid.rotate_clockwise();
        grid.rotate_counterclockwise();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_read_line() {
        let grid = numbered(3);
        assert_eq!(grid.read_line(Line::Row(1)).as_slice(), &[3, 4, 5]);
        assert_eq!(grid.read_line(Line::Col(2)).as_slice(), &[2, 5, 8]);
    }

    #[test]
    fn test_write_line_reversed() {
        let mut grid = numbered(3);
        grid.write_line(Line::Col(0), &[10, 11, 12], true);
        assert_eq!(grid.read_line(Line::Col(0)).as_slice(), &[12, 11, 10]);

        grid.write_line(Line::Row(2), &[20, 21, 22], false);
        assert_eq!(grid.read_line(Line::Row(2)).as_slice(), &[20, 21, 22]);
        // Corner shared by the row and column was overwritten by the row.
        assert_eq!(grid[(2, 0)], 20);
    }

    #[test]
    fn test_rows_iterator() {
        let grid = numbered(2);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 3][..]]);
    }
}
