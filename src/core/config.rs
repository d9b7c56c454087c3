//! Configuration types.
//!
//! - `RulesConfig`: parameters of the ruler placement rule
//! - `BoardConfig`: board dimensions plus the starting layout in board
//!   notation
//!
//! Defaults reproduce the standard game: a ruler may touch at most one
//! kingdom, must sit next to a temple, and may only be seeded on ground.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::cell::Terrain;
use crate::notation::{decode_board, NotationError};

/// Parameters of the ruler placement rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Most distinct kingdoms a placement may touch.
    pub max_adjacent_kingdoms: usize,

    /// Whether a placement needs an orthogonally adjacent temple.
    pub require_temple_adjacency: bool,

    /// Terrain on which rulers may be seeded.
    pub seed_terrain: Terrain,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_adjacent_kingdoms: 1,
            require_temple_adjacency: true,
            seed_terrain: Terrain::Ground,
        }
    }
}

impl RulesConfig {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the most kingdoms a placement may touch.
    #[must_use]
    pub fn with_max_adjacent_kingdoms(mut self, max: usize) -> Self {
        self.max_adjacent_kingdoms = max;
        self
    }

    /// Drop the temple proximity requirement.
    #[must_use]
    pub fn without_temple_requirement(mut self) -> Self {
        self.require_temple_adjacency = false;
        self
    }

    /// Set the terrain rulers may be seeded on.
    #[must_use]
    pub fn with_seed_terrain(mut self, terrain: Terrain) -> Self {
        self.seed_terrain = terrain;
        self
    }
}

const STANDARD_ROWS: usize = 11;
const STANDARD_COLUMNS: usize = 16;

#[rustfmt::skip]
const STANDARD_LAYOUT: [&str; STANDARD_ROWS * STANDARD_COLUMNS] = [
    "G","G","G","G","R","R","R","R","R","G","T","G","R","G","G","G",
    "G","T","G","G","R","G","G","G","G","G","G","G","R","G","G","T",
    "G","G","G","R","R","T","G","G","G","G","G","G","R","R","G","G",
    "R","R","R","R","G","G","G","G","G","G","G","G","G","R","R","R",
    "G","G","G","G","G","G","G","G","G","G","G","G","G","T","R","R",
    "G","G","G","G","G","G","G","G","G","G","G","G","G","G","R","G",
    "R","R","R","R","G","G","G","G","T","G","G","G","R","R","R","G",
    "G","T","G","R","R","R","R","G","G","G","G","G","R","G","G","G",
    "G","G","G","G","G","G","R","R","R","R","R","R","R","G","T","G",
    "G","G","G","G","G","T","G","G","G","G","G","G","G","G","G","G",
    "G","G","G","G","G","G","G","G","G","G","T","G","G","G","G","G",
];

/// Board dimensions and starting layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,

    /// Pipe-delimited cell tokens, one per cell in index order.
    pub layout: String,
}

impl BoardConfig {
    /// Create a board configuration from a notation layout.
    pub fn new(rows: usize, columns: usize, layout: impl Into<String>) -> Self {
        Self {
            rows,
            columns,
            layout: layout.into(),
        }
    }

    /// The standard 11x16 starting board, with treasure temples in place.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_ROWS, STANDARD_COLUMNS, STANDARD_LAYOUT.join("|"))
    }

    /// Decode the layout into a board.
    pub fn build(&self) -> Result<Board, NotationError> {
        decode_board(self.rows, self.columns, &self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    #[test]
    fn test_rules_config_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.max_adjacent_kingdoms, 1);
        assert!(config.require_temple_adjacency);
        assert_eq!(config.seed_terrain, Terrain::Ground);
        assert_eq!(RulesConfig::new(), config);
    }

    #[test]
    fn test_rules_config_builder() {
        let config = RulesConfig::new()
            .with_max_adjacent_kingdoms(2)
            .without_temple_requirement()
            .with_seed_terrain(Terrain::River);

        assert_eq!(config.max_adjacent_kingdoms, 2);
        assert!(!config.require_temple_adjacency);
        assert_eq!(config.seed_terrain, Terrain::River);
    }

    #[test]
    fn test_rules_config_serialization() {
        let config = RulesConfig::new().with_max_adjacent_kingdoms(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_standard_board() {
        let board = BoardConfig::standard().build().unwrap();
        assert_eq!(board.rows(), 11);
        assert_eq!(board.columns(), 16);
        assert_eq!(board.len(), 176);

        let treasures = board.cells_holding(Piece::treasure_temple());
        assert_eq!(treasures, vec![10, 17, 31, 37, 77, 104, 113, 142, 149, 170]);
        assert!(board.iter().all(|c| !c.has_special()));
        assert!(board.get(4).unwrap().is_river());
    }
}
