//! Kingdom classification.
//!
//! A region holding at least one ruler is a kingdom. Internally each cell
//! gets a [`KingdomId`]; at the interface the compact signed form is used:
//! positive for kingdoms, negative for ruler-less regions, 0 for cells
//! without a piece. The magnitude is always the region id.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::labeler::{Labeling, RegionId, RegionLabeling};
use crate::core::{Board, BoardError, CellIndex};

/// Classification of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KingdomId {
    /// No piece on the cell.
    #[default]
    Unowned,
    /// Part of a region with no ruler.
    Region(RegionId),
    /// Part of a region with at least one ruler.
    Kingdom(RegionId),
}

impl KingdomId {
    /// Decode the signed form.
    ///
    /// Fails with [`BoardError::InvalidRegionId`] if the magnitude does not
    /// fit a region id.
    ///
    /// ```
    /// use kingdom_rules::regions::{KingdomId, RegionId};
    ///
    /// assert_eq!(KingdomId::from_signed(3), Ok(KingdomId::Kingdom(RegionId(3))));
    /// assert_eq!(KingdomId::from_signed(-3), Ok(KingdomId::Region(RegionId(3))));
    /// assert_eq!(KingdomId::from_signed(0), Ok(KingdomId::Unowned));
    /// assert!(KingdomId::from_signed(1 << 32).is_err());
    /// ```
    pub fn from_signed(id: i64) -> Result<Self, BoardError> {
        if id == 0 {
            return Ok(KingdomId::Unowned);
        }
        let region = u32::try_from(id.unsigned_abs())
            .map(RegionId)
            .map_err(|_| BoardError::InvalidRegionId { id })?;
        Ok(if id > 0 {
            KingdomId::Kingdom(region)
        } else {
            KingdomId::Region(region)
        })
    }

    /// Encode as the signed form.
    #[must_use]
    pub fn to_signed(self) -> i64 {
        match self {
            KingdomId::Unowned => 0,
            KingdomId::Kingdom(region) => i64::from(region.0),
            KingdomId::Region(region) => -i64::from(region.0),
        }
    }

    /// Region the cell belongs to, whether or not it is a kingdom.
    #[must_use]
    pub fn region(self) -> Option<RegionId> {
        match self {
            KingdomId::Unowned => None,
            KingdomId::Region(region) | KingdomId::Kingdom(region) => Some(region),
        }
    }

    /// Region id if the cell is inside a kingdom.
    #[must_use]
    pub fn kingdom(self) -> Option<RegionId> {
        match self {
            KingdomId::Kingdom(region) => Some(region),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unowned(self) -> bool {
        matches!(self, KingdomId::Unowned)
    }

    #[must_use]
    pub fn is_kingdom(self) -> bool {
        matches!(self, KingdomId::Kingdom(_))
    }
}

/// Mapping `cell index -> kingdom id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KingdomLabelingRepr")]
pub struct KingdomLabeling {
    ids: Vec<KingdomId>,
    region_count: u32,
}

#[derive(Deserialize)]
struct KingdomLabelingRepr {
    ids: Vec<KingdomId>,
    region_count: u32,
}

impl TryFrom<KingdomLabelingRepr> for KingdomLabeling {
    type Error = BoardError;

    fn try_from(repr: KingdomLabelingRepr) -> Result<Self, Self::Error> {
        let regions = repr.ids.iter().filter_map(|id| id.region());
        if regions.clone().any(|region| region.0 == 0) {
            return Err(BoardError::InvalidRegionId { id: 0 });
        }
        BoardError::check_region_count(repr.region_count, regions.map(|region| region.0))?;
        Ok(Self {
            ids: repr.ids,
            region_count: repr.region_count,
        })
    }
}

impl KingdomLabeling {
    /// Decode a labeling given in signed form.
    pub fn from_signed(ids: &[i64]) -> Result<Self, BoardError> {
        let ids = ids
            .iter()
            .map(|&id| KingdomId::from_signed(id))
            .collect::<Result<Vec<_>, _>>()?;
        let region_count = ids
            .iter()
            .filter_map(|id| id.region())
            .map(|region| region.0)
            .max()
            .unwrap_or(0);
        Ok(Self { ids, region_count })
    }

    /// Encode in signed form, one entry per cell.
    #[must_use]
    pub fn to_signed(&self) -> Vec<i64> {
        self.ids.iter().map(|id| id.to_signed()).collect()
    }

    /// Classification of the cell at `index`.
    pub fn get(&self, index: CellIndex) -> Result<KingdomId, BoardError> {
        self.ids
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange { index, len: self.ids.len() })
    }

    /// Classification of an in-range cell.
    pub(crate) fn at(&self, index: CellIndex) -> KingdomId {
        self.ids[index]
    }

    /// Iterate over classifications in cell order.
    pub fn iter(&self) -> impl Iterator<Item = KingdomId> + '_ {
        self.ids.iter().copied()
    }

    /// Distinct kingdoms, ascending.
    #[must_use]
    pub fn kingdoms(&self) -> Vec<RegionId> {
        let mut kingdoms: Vec<RegionId> = self.iter().filter_map(KingdomId::kingdom).collect();
        kingdoms.sort_unstable();
        kingdoms.dedup();
        kingdoms
    }
}

impl Labeling for KingdomLabeling {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn region_count(&self) -> u32 {
        self.region_count
    }

    fn region_of(&self, index: CellIndex) -> Option<RegionId> {
        self.ids[index].region()
    }
}

/// Classify each region as kingdom or not.
///
/// Fails if the labeling does not cover the board exactly.
///
/// ```
/// use kingdom_rules::core::{Board, Grid, Piece, PieceKind, PlayerId};
/// use kingdom_rules::regions::{compute_kingdoms, compute_regions};
///
/// let mut board = Board::empty(Grid::new(1, 4));
/// board.place_piece(0, Piece::civ(PieceKind::Temple)).unwrap();
/// board.place_piece(2, Piece::civ(PieceKind::Farm)).unwrap();
/// board.place_piece(3, Piece::ruler(PieceKind::Farm, PlayerId::new(1))).unwrap();
///
/// let kingdoms = compute_kingdoms(&compute_regions(&board), &board).unwrap();
/// assert_eq!(kingdoms.to_signed(), vec![-1, 0, 2, 2]);
/// ```
pub fn compute_kingdoms(regions: &RegionLabeling, board: &Board) -> Result<KingdomLabeling, BoardError> {
    BoardError::check_len(board.len(), regions.len())?;

    let ruled: FxHashSet<RegionId> = board
        .enumerate()
        .filter(|(_, cell)| cell.has_ruler())
        .filter_map(|(index, _)| regions.region_of(index))
        .collect();

    let ids: Vec<KingdomId> = (0..regions.len())
        .map(|index| match regions.region_of(index) {
            None => KingdomId::Unowned,
            Some(region) if ruled.contains(&region) => KingdomId::Kingdom(region),
            Some(region) => KingdomId::Region(region),
        })
        .collect();

    tracing::debug!(
        target: "kingdom_rules::regions",
        regions = regions.region_count(),
        kingdoms = ruled.len(),
        "kingdoms.classified"
    );

    Ok(KingdomLabeling {
        ids,
        region_count: regions.region_count(),
    })
}
