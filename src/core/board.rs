//! Board snapshot: a grid plus one [`Cell`] per index.
//!
//! Cells are held in an `im::Vector`, so cloning a board to take a
//! snapshot is O(1) and a single-cell write only copies one chunk.
//!
//! ## Usage
//!
//! ```
//! use kingdom_rules::core::{Board, Cell, Grid, Piece, PieceKind};
//!
//! let mut board = Board::empty(Grid::new(2, 3));
//! let snapshot = board.clone();
//!
//! board.place_piece(4, Piece::civ(PieceKind::Temple)).unwrap();
//!
//! assert!(board.get(4).unwrap().has_piece());
//! assert!(!snapshot.get(4).unwrap().has_piece());
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, SpecialMarker, Terrain};
use super::error::BoardError;
use super::grid::{CellIndex, Grid};
use super::piece::Piece;

/// A fully materialized board.
///
/// Deserialization goes through [`Board::new`], so a decoded board always
/// has exactly one cell per grid index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    grid: Grid,
    cells: Vector<Cell>,
}

/// Unchecked wire shape of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    grid: Grid,
    cells: Vector<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let BoardRepr { grid, cells } = repr;
        if grid.checked_len().is_none() {
            return Err(BoardError::LengthMismatch {
                expected: usize::MAX,
                actual: cells.len(),
            });
        }
        Board::new(grid, cells)
    }
}

impl Board {
    /// Build a board from a grid and exactly `grid.len()` cells.
    pub fn new(grid: Grid, cells: impl IntoIterator<Item = Cell>) -> Result<Self, BoardError> {
        let cells: Vector<Cell> = cells.into_iter().collect();
        BoardError::check_len(grid.len(), cells.len())?;
        Ok(Self { grid, cells })
    }

    /// All-ground board with no pieces.
    #[must_use]
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            cells: (0..grid.len()).map(|_| Cell::ground()).collect(),
        }
    }

    /// Board with the given terrain per cell and no pieces.
    pub fn from_terrain(grid: Grid, terrain: &[Terrain]) -> Result<Self, BoardError> {
        Self::new(grid, terrain.iter().map(|&t| Cell::new(t)))
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`.
    pub fn get(&self, index: CellIndex) -> Result<&Cell, BoardError> {
        self.cells
            .get(index)
            .ok_or(BoardError::IndexOutOfRange { index, len: self.len() })
    }

    /// Cell at an index already known to be in range.
    pub(crate) fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index]
    }

    /// Iterate over cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Iterate over `(index, cell)` pairs in index order.
    pub fn enumerate(&self) -> impl Iterator<Item = (CellIndex, &Cell)> + '_ {
        self.cells.iter().enumerate()
    }

    /// Put `piece` on the cell at `index`, returning whatever was there.
    ///
    /// This is the raw mutation hook: it performs no legality check.
    pub fn place_piece(&mut self, index: CellIndex, piece: Piece) -> Result<Option<Piece>, BoardError> {
        let len = self.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })?;

        tracing::trace!(
            target: "kingdom_rules::board",
            index,
            kind = %piece.kind(),
            ruler = piece.is_ruler(),
            "board.place_piece"
        );
        Ok(cell.piece.replace(piece))
    }

    /// Take the piece off the cell at `index`.
    pub fn remove_piece(&mut self, index: CellIndex) -> Result<Option<Piece>, BoardError> {
        let len = self.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })?;
        Ok(cell.piece.take())
    }

    /// Set or clear the special marker at `index`.
    pub fn set_special(
        &mut self,
        index: CellIndex,
        special: Option<SpecialMarker>,
    ) -> Result<Option<SpecialMarker>, BoardError> {
        let len = self.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(&mut cell.special, special))
    }

    /// Indices of cells holding a piece equal to `piece`, ascending.
    #[must_use]
    pub fn cells_holding(&self, piece: Piece) -> Vec<CellIndex> {
        self.enumerate()
            .filter(|(_, cell)| cell.piece == Some(piece))
            .map(|(index, _)| index)
            .collect()
    }
}
