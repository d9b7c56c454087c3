//! Rules facade for the turn layer.
//!
//! Bundles a [`RulesConfig`] with the full query pipeline:
//! regions, then kingdoms, then placement legality.
//!
//! ## Usage
//!
//! ```
//! use kingdom_rules::core::{BoardConfig, Piece, PieceKind, PlayerId};
//! use kingdom_rules::rules::KingdomRules;
//!
//! let mut board = BoardConfig::standard().build().unwrap();
//! let rules = KingdomRules::default();
//!
//! let moves = rules.legal_moves(&board).unwrap();
//! assert!(!moves.is_empty());
//!
//! let king = Piece::ruler(PieceKind::Settlement, PlayerId::new(1));
//! rules.place_ruler(&mut board, moves[0], king).unwrap();
//! assert!(board.get(moves[0]).unwrap().has_ruler());
//! ```

use crate::core::{Board, BoardError, CellIndex, Piece, RulesConfig};
use crate::placement::{legal_placements_with, partition_by_terrain, TerrainSplit};
use crate::regions::{compute_kingdoms, compute_regions, piece_index, KingdomLabeling, PieceIndex, RegionLabeling};

/// Region and kingdom labelings of one board snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardAnalysis {
    pub regions: RegionLabeling,
    pub kingdoms: KingdomLabeling,
}

impl BoardAnalysis {
    /// Pieces grouped by kingdom (or ruler-less region).
    pub fn pieces(&self, board: &Board) -> Result<PieceIndex, BoardError> {
        piece_index(board, &self.kingdoms)
    }
}

/// Placement rules under a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct KingdomRules {
    config: RulesConfig,
}

impl KingdomRules {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Label regions and classify kingdoms.
    pub fn analyze(&self, board: &Board) -> Result<BoardAnalysis, BoardError> {
        let regions = compute_regions(board);
        let kingdoms = compute_kingdoms(&regions, board)?;
        Ok(BoardAnalysis { regions, kingdoms })
    }

    /// Cells where a new ruler may be seeded, ascending.
    pub fn legal_moves(&self, board: &Board) -> Result<Vec<CellIndex>, BoardError> {
        let analysis = self.analyze(board)?;
        legal_placements_with(board, &analysis.kingdoms, &self.config)
    }

    /// Legal moves split into ground and river cells.
    pub fn legal_moves_by_terrain(&self, board: &Board) -> Result<TerrainSplit, BoardError> {
        let moves = self.legal_moves(board)?;
        partition_by_terrain(board, &moves)
    }

    /// Seed `ruler` at `index` if that is a legal move.
    ///
    /// The board is left untouched on error.
    pub fn place_ruler(&self, board: &mut Board, index: CellIndex, ruler: Piece) -> Result<(), BoardError> {
        board.get(index)?;

        if !ruler.is_ruler() || !self.legal_moves(board)?.contains(&index) {
            tracing::warn!(
                target: "kingdom_rules::rules",
                index,
                ruler = ruler.is_ruler(),
                "rules.illegal_placement"
            );
            return Err(BoardError::IllegalPlacement { index });
        }

        board.place_piece(index, ruler)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, PieceKind, PlayerId};
    use crate::regions::{KingdomId, RegionId};

    fn temple_board() -> Board {
        // . . .
        // . t .
        let mut board = Board::empty(Grid::new(2, 3));
        board.place_piece(4, Piece::civ(PieceKind::Temple)).unwrap();
        board
    }

    #[test]
    fn test_analyze() {
        let mut board = temple_board();
        board.place_piece(5, Piece::ruler(PieceKind::Temple, PlayerId::new(1))).unwrap();

        let analysis = KingdomRules::default().analyze(&board).unwrap();
        assert_eq!(analysis.regions.raw(), &[0, 0, 0, 0, 1, 1]);
        assert_eq!(analysis.kingdoms.get(4), Ok(KingdomId::Kingdom(RegionId(1))));

        let pieces = analysis.pieces(&board).unwrap();
        let kingdom = pieces.get(RegionId(1)).unwrap();
        assert_eq!(kingdom.temple, vec![4]);
        assert_eq!(kingdom.rulers.len(), 1);
    }

    #[test]
    fn test_legal_moves() {
        let board = temple_board();
        let rules = KingdomRules::default();
        assert_eq!(rules.legal_moves(&board).unwrap(), vec![1, 3, 5]);

        let split = rules.legal_moves_by_terrain(&board).unwrap();
        assert_eq!(split.ground, vec![1, 3, 5]);
        assert!(split.river.is_empty());
    }

    #[test]
    fn test_place_ruler() {
        let mut board = temple_board();
        let rules = KingdomRules::default();
        let ruler = Piece::ruler(PieceKind::Settlement, PlayerId::new(1));

        rules.place_ruler(&mut board, 3, ruler).unwrap();
        assert_eq!(board.get(3).unwrap().piece, Some(ruler));

        // Occupied now.
        assert_eq!(
            rules.place_ruler(&mut board, 3, ruler),
            Err(BoardError::IllegalPlacement { index: 3 })
        );
        // No temple nearby.
        assert_eq!(
            rules.place_ruler(&mut board, 0, ruler),
            Err(BoardError::IllegalPlacement { index: 0 })
        );
    }

    #[test]
    fn test_place_ruler_rejects_civ_and_bad_index() {
        let mut board = temple_board();
        let snapshot = board.clone();
        let rules = KingdomRules::default();

        assert_eq!(
            rules.place_ruler(&mut board, 1, Piece::civ(PieceKind::Settlement)),
            Err(BoardError::IllegalPlacement { index: 1 })
        );
        assert_eq!(
            rules.place_ruler(&mut board, 6, Piece::ruler(PieceKind::Temple, PlayerId::new(1))),
            Err(BoardError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_custom_config() {
        let board = temple_board();
        let rules = KingdomRules::new(RulesConfig::new().without_temple_requirement());
        assert_eq!(rules.legal_moves(&board).unwrap(), vec![0, 1, 2, 3, 5]);
        assert!(!rules.config().require_temple_adjacency);
    }
}
