//! Legal cells for seeding a ruler.
//!
//! A cell qualifies when it is vacant (no piece, no marker), has the seed
//! terrain, touches at most `max_adjacent_kingdoms` distinct kingdoms and,
//! if required, sits next to a temple of any owner.
//!
//! Joining two kingdoms in one placement is a separate rule handled
//! elsewhere, as are conflicts that a placement would trigger afterwards.

use serde::{Deserialize, Serialize};

use super::adjacency::adjacent_kingdoms;
use crate::core::{Board, BoardError, CellIndex, RulesConfig, Terrain};
use crate::regions::KingdomLabeling;

/// Legal ruler cells under the standard rules, ascending.
///
/// ```
/// use kingdom_rules::core::{Board, Grid, Piece, PieceKind};
/// use kingdom_rules::placement::legal_ruler_placements;
/// use kingdom_rules::regions::{compute_kingdoms, compute_regions};
///
/// // . t .
/// let mut board = Board::empty(Grid::new(1, 3));
/// board.place_piece(1, Piece::civ(PieceKind::Temple)).unwrap();
///
/// let kingdoms = compute_kingdoms(&compute_regions(&board), &board).unwrap();
/// assert_eq!(legal_ruler_placements(&board, &kingdoms).unwrap(), vec![0, 2]);
/// ```
pub fn legal_ruler_placements(board: &Board, kingdoms: &KingdomLabeling) -> Result<Vec<CellIndex>, BoardError> {
    legal_placements_with(board, kingdoms, &RulesConfig::default())
}

/// Legal ruler cells under `config`, ascending.
pub fn legal_placements_with(
    board: &Board,
    kingdoms: &KingdomLabeling,
    config: &RulesConfig,
) -> Result<Vec<CellIndex>, BoardError> {
    let adjacent = adjacent_kingdoms(board, kingdoms)?;
    let grid = board.grid();

    let legal: Vec<CellIndex> = board
        .enumerate()
        .filter(|(_, cell)| cell.is_vacant() && cell.terrain == config.seed_terrain)
        .filter(|&(index, _)| adjacent[index].len() <= config.max_adjacent_kingdoms)
        .filter(|&(index, _)| {
            !config.require_temple_adjacency
                || grid.any_adjacent(index, |n| board.cell(n).has_temple())
        })
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(
        target: "kingdom_rules::placement",
        cells = board.len(),
        legal = legal.len(),
        "placement.evaluated"
    );

    Ok(legal)
}

/// Cell indices split by terrain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainSplit {
    pub ground: Vec<CellIndex>,
    pub river: Vec<CellIndex>,
}

impl TerrainSplit {
    /// Cells of one terrain.
    #[must_use]
    pub fn of(&self, terrain: Terrain) -> &[CellIndex] {
        match terrain {
            Terrain::Ground => &self.ground,
            Terrain::River => &self.river,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ground.is_empty() && self.river.is_empty()
    }
}

/// Split `cells` into ground and river lists, keeping input order.
pub fn partition_by_terrain(board: &Board, cells: &[CellIndex]) -> Result<TerrainSplit, BoardError> {
    let mut split = TerrainSplit::default();
    for &index in cells {
        match board.get(index)?.terrain {
            Terrain::Ground => split.ground.push(index),
            Terrain::River => split.river.push(index),
        }
    }
    Ok(split)
}
