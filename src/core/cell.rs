//! Per-cell data: terrain, optional piece, optional special marker.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};

/// Terrain of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    #[default]
    Ground,
    River,
}

/// Board-level markers independent of pieces.
///
/// A marked cell is never a legal placement target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialMarker {
    /// Two kingdoms are being joined through this cell.
    Unification,
    /// The cell has been destroyed.
    Catastrophe,
}

/// One board cell.
///
/// Holding both a piece and a marker is structurally allowed (a
/// unification in progress sits on the joining tile); keeping the
/// combination meaningful is the caller's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub terrain: Terrain,
    pub piece: Option<Piece>,
    pub special: Option<SpecialMarker>,
}

impl Cell {
    /// Empty cell of the given terrain.
    #[must_use]
    pub const fn new(terrain: Terrain) -> Self {
        Self { terrain, piece: None, special: None }
    }

    #[must_use]
    pub const fn ground() -> Self {
        Self::new(Terrain::Ground)
    }

    #[must_use]
    pub const fn river() -> Self {
        Self::new(Terrain::River)
    }

    /// Set the occupying piece.
    #[must_use]
    pub const fn with_piece(mut self, piece: Piece) -> Self {
        self.piece = Some(piece);
        self
    }

    /// Set the special marker.
    #[must_use]
    pub const fn with_special(mut self, special: SpecialMarker) -> Self {
        self.special = Some(special);
        self
    }

    #[must_use]
    pub const fn has_piece(&self) -> bool {
        self.piece.is_some()
    }

    #[must_use]
    pub const fn has_special(&self) -> bool {
        self.special.is_some()
    }

    #[must_use]
    pub fn has_ruler(&self) -> bool {
        self.piece.is_some_and(|p| p.is_ruler())
    }

    /// Holds a temple of any owner, civilization or ruler.
    #[must_use]
    pub fn has_temple(&self) -> bool {
        self.piece.is_some_and(|p| p.is_temple())
    }

    #[must_use]
    pub fn has_kind(&self, kind: PieceKind) -> bool {
        self.piece.is_some_and(|p| p.kind() == kind)
    }

    #[must_use]
    pub const fn is_ground(&self) -> bool {
        matches!(self.terrain, Terrain::Ground)
    }

    #[must_use]
    pub const fn is_river(&self) -> bool {
        matches!(self.terrain, Terrain::River)
    }

    /// No piece and no marker.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        !self.has_piece() && !self.has_special()
    }
}
