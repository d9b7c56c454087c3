//! Kingdoms touching each empty cell.

use smallvec::SmallVec;

use crate::core::{Board, BoardError};
use crate::regions::{KingdomLabeling, Labeling, RegionId};

/// Distinct kingdoms orthogonally adjacent to a cell, ascending.
pub type AdjacentKingdoms = SmallVec<[RegionId; 4]>;

/// For every unowned cell, the distinct kingdoms next to it.
///
/// Cells that are already inside a region (kingdom or not) get an empty
/// set: adjacency is only evaluated from outside.
pub fn adjacent_kingdoms(board: &Board, kingdoms: &KingdomLabeling) -> Result<Vec<AdjacentKingdoms>, BoardError> {
    BoardError::check_len(board.len(), kingdoms.len())?;

    let grid = board.grid();
    let out = (0..board.len())
        .map(|index| {
            let mut touching = AdjacentKingdoms::new();
            if !kingdoms.at(index).is_unowned() {
                return touching;
            }
            for neighbor in grid.adjacent(index) {
                if let Some(kingdom) = kingdoms.at(neighbor).kingdom() {
                    if !touching.contains(&kingdom) {
                        touching.push(kingdom);
                    }
                }
            }
            touching.sort_unstable();
            touching
        })
        .collect();

    Ok(out)
}
