//! Pieces grouped by region, for strength and scoring collaborators.
//!
//! Purely a read-side summary: it never mutates the board and carries no
//! legality rules of its own.

use serde::{Deserialize, Serialize};

use super::labeler::{Labeling, RegionId};
use crate::core::{Board, BoardError, CellIndex, Piece, PieceKind, PlayerId};

/// A ruler found in a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulerEntry {
    pub kind: PieceKind,
    pub player: PlayerId,
    pub cell: CellIndex,
}

/// Pieces in one region, each list ascending by cell index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionPieces {
    pub rulers: Vec<RulerEntry>,
    pub temple: Vec<CellIndex>,
    pub settlement: Vec<CellIndex>,
    pub farm: Vec<CellIndex>,
    pub merchant: Vec<CellIndex>,
}

impl RegionPieces {
    /// Civilization cells of one kind.
    #[must_use]
    pub fn civs(&self, kind: PieceKind) -> &[CellIndex] {
        match kind {
            PieceKind::Temple => &self.temple,
            PieceKind::Settlement => &self.settlement,
            PieceKind::Farm => &self.farm,
            PieceKind::Merchant => &self.merchant,
        }
    }

    fn civs_mut(&mut self, kind: PieceKind) -> &mut Vec<CellIndex> {
        match kind {
            PieceKind::Temple => &mut self.temple,
            PieceKind::Settlement => &mut self.settlement,
            PieceKind::Farm => &mut self.farm,
            PieceKind::Merchant => &mut self.merchant,
        }
    }

    /// Ruler of `player`, if it has one here.
    #[must_use]
    pub fn ruler_of(&self, player: PlayerId, kind: PieceKind) -> Option<&RulerEntry> {
        self.rulers.iter().find(|r| r.player == player && r.kind == kind)
    }

    /// Total pieces recorded.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.rulers.len()
            + self.temple.len()
            + self.settlement.len()
            + self.farm.len()
            + self.merchant.len()
    }
}

/// Per-region piece records, indexed by region id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceIndex {
    // Slot 0 is the unlabeled bucket and always stays empty.
    regions: Vec<RegionPieces>,
}

impl PieceIndex {
    /// Record for a region, if the id is in use.
    #[must_use]
    pub fn get(&self, region: RegionId) -> Option<&RegionPieces> {
        match region.0 {
            0 => None,
            id => self.regions.get(id as usize),
        }
    }

    /// Number of region slots (highest region id).
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len().saturating_sub(1)
    }

    /// Iterate over `(region, pieces)` in ascending region order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &RegionPieces)> + '_ {
        self.regions
            .iter()
            .enumerate()
            .skip(1)
            .map(|(id, pieces)| (RegionId(id as u32), pieces))
    }

    /// Every ruler owned by `player`, with its region.
    pub fn rulers_of(&self, player: PlayerId) -> impl Iterator<Item = (RegionId, &RulerEntry)> + '_ {
        self.iter().flat_map(move |(region, pieces)| {
            pieces
                .rulers
                .iter()
                .filter(move |r| r.player == player)
                .map(move |r| (region, r))
        })
    }
}

/// Group the board's pieces by the region (or kingdom) each cell is in.
///
/// Accepts any [`Labeling`]; for kingdom labelings the record key is the
/// region magnitude regardless of sign.
pub fn piece_index(board: &Board, labeling: &impl Labeling) -> Result<PieceIndex, BoardError> {
    BoardError::check_len(board.len(), labeling.len())?;

    let mut regions = vec![RegionPieces::default(); labeling.region_count() as usize + 1];

    for (cell_index, cell) in board.enumerate() {
        let (Some(piece), Some(region)) = (cell.piece, labeling.region_of(cell_index)) else {
            continue;
        };
        let record = &mut regions[region.0 as usize];

        match piece {
            Piece::Ruler { kind, player } => record.rulers.push(RulerEntry {
                kind,
                player,
                cell: cell_index,
            }),
            Piece::Civ { kind, .. } => record.civs_mut(kind).push(cell_index),
        }
    }

    Ok(PieceIndex { regions })
}
