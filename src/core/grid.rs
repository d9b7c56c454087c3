//! Rectangular grid geometry with orthogonal, non-wrapping adjacency.
//!
//! A cell index is `row * columns + column`. The grid knows nothing about
//! pieces or terrain; it only maps indices to positions and neighbors.
//!
//! ## Usage
//!
//! ```
//! use kingdom_rules::core::Grid;
//!
//! let grid = Grid::new(4, 4);
//!
//! // Corner cells have two neighbors: down and right.
//! assert_eq!(grid.neighbors(0).unwrap().as_slice(), &[4, 1]);
//!
//! // Interior cells have four, in up/down/left/right order.
//! assert_eq!(grid.neighbors(5).unwrap().as_slice(), &[1, 9, 4, 6]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::BoardError;

/// Index of a cell in row-major order.
pub type CellIndex = usize;

/// Up to four orthogonal neighbors of a cell.
pub type Neighbors = SmallVec<[CellIndex; 4]>;

/// Immutable `rows x columns` index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create a grid. Either dimension may be zero, giving an empty grid.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows * self.columns
    }

    /// Total number of cells, or `None` if `rows * columns` overflows.
    #[must_use]
    pub const fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that `index` addresses a cell of this grid.
    pub fn check_index(&self, index: CellIndex) -> Result<(), BoardError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange { index, len: self.len() })
        }
    }

    /// Cell index for a row/column pair, if it lies on the grid.
    #[must_use]
    pub fn index_of(&self, row: usize, column: usize) -> Option<CellIndex> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }

    /// Row/column pair for a cell index.
    pub fn position_of(&self, index: CellIndex) -> Result<(usize, usize), BoardError> {
        self.check_index(index)?;
        Ok((index / self.columns, index % self.columns))
    }

    /// Orthogonal neighbors of `index`, in up/down/left/right order.
    pub fn neighbors(&self, index: CellIndex) -> Result<Neighbors, BoardError> {
        self.check_index(index)?;
        Ok(self.adjacent(index))
    }

    /// Visit each neighbor of `index` for which `predicate` holds.
    ///
    /// Neighbors are visited in up/down/left/right order.
    pub fn for_each_adjacent(
        &self,
        index: CellIndex,
        mut predicate: impl FnMut(CellIndex) -> bool,
        mut action: impl FnMut(CellIndex),
    ) -> Result<(), BoardError> {
        for neighbor in self.neighbors(index)? {
            if predicate(neighbor) {
                action(neighbor);
            }
        }
        Ok(())
    }

    /// Neighbors of an index already known to be in range.
    pub(crate) fn adjacent(&self, index: CellIndex) -> Neighbors {
        debug_assert!(index < self.len(), "cell index {index} out of range");

        let row = index / self.columns;
        let column = index % self.columns;
        let mut out = Neighbors::new();

        if row > 0 {
            out.push(index - self.columns);
        }
        if row + 1 < self.rows {
            out.push(index + self.columns);
        }
        if column > 0 {
            out.push(index - 1);
        }
        if column + 1 < self.columns {
            out.push(index + 1);
        }
        out
    }

    /// True if any in-range neighbor of `index` satisfies `predicate`.
    pub(crate) fn any_adjacent(&self, index: CellIndex, predicate: impl Fn(CellIndex) -> bool) -> bool {
        self.adjacent(index).into_iter().any(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_position_roundtrip() {
        let grid = Grid::new(3, 5);
        for index in 0..grid.len() {
            let (row, column) = grid.position_of(index).unwrap();
            assert_eq!(grid.index_of(row, column), Some(index));
        }
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 5), None);
    }

    #[test]
    fn test_neighbors_no_wraparound() {
        let grid = Grid::new(3, 4);

        // End of first row must not see the start of the second.
        assert_eq!(grid.neighbors(3).unwrap().as_slice(), &[7, 2]);
        // Start of second row must not see the end of the first.
        assert_eq!(grid.neighbors(4).unwrap().as_slice(), &[0, 8, 5]);
        // Bottom-right corner.
        assert_eq!(grid.neighbors(11).unwrap().as_slice(), &[7, 10]);
    }

    #[test]
    fn test_single_row_and_column() {
        assert_eq!(Grid::new(1, 3).neighbors(1).unwrap().as_slice(), &[0, 2]);
        assert_eq!(Grid::new(3, 1).neighbors(1).unwrap().as_slice(), &[0, 2]);
        assert!(Grid::new(1, 1).neighbors(0).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let grid = Grid::new(2, 2);
        assert_eq!(
            grid.neighbors(4),
            Err(BoardError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(grid.position_of(4).is_err());
        assert!(Grid::new(0, 0).check_index(0).is_err());
    }

    #[test]
    fn test_checked_len() {
        assert_eq!(Grid::new(11, 16).checked_len(), Some(176));
        assert_eq!(Grid::new(usize::MAX, 2).checked_len(), None);
    }

    #[test]
    fn test_for_each_adjacent_filters() {
        let grid = Grid::new(3, 3);
        let mut seen = Vec::new();
        grid.for_each_adjacent(4, |n| n % 2 == 1, |n| seen.push(n)).unwrap();
        assert_eq!(seen, vec![1, 7, 3, 5]);

        let mut evens = Vec::new();
        grid.for_each_adjacent(4, |n| n == 3, |n| evens.push(n)).unwrap();
        assert_eq!(evens, vec![3]);
    }

    #[test]
    fn test_any_adjacent() {
        let grid = Grid::new(3, 3);
        assert!(grid.any_adjacent(0, |n| n == 1));
        assert!(!grid.any_adjacent(0, |n| n == 4));
    }
}
