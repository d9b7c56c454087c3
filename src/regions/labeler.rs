//! Connected-component labeling over piece-occupied cells.
//!
//! Two piece cells share a region iff a path of orthogonally adjacent
//! piece cells joins them. Empty cells are never labeled.
//!
//! ## Numbering
//!
//! Seeds are taken in ascending cell index, so region 1 is the region
//! holding the lowest-indexed piece, region 2 the next unvisited one, and
//! so on. Any seed order gives the same grouping; fixing it keeps ids
//! reproducible.

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardError, CellIndex};

/// Identifier of a labeled region. Always `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region({})", self.0)
    }
}

/// Anything that assigns cells to regions.
///
/// Implemented by both region and kingdom labelings so that read-side
/// summaries work on either.
pub trait Labeling {
    /// Number of cells covered.
    fn len(&self) -> usize;

    /// Highest region id in use.
    fn region_count(&self) -> u32;

    /// Region of an in-range cell, `None` for unlabeled cells.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use the labeling's `get` for a
    /// checked lookup.
    fn region_of(&self, index: CellIndex) -> Option<RegionId>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mapping `cell index -> region id`, 0 meaning no piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegionLabelingRepr")]
pub struct RegionLabeling {
    labels: Vec<u32>,
    region_count: u32,
}

#[derive(Deserialize)]
struct RegionLabelingRepr {
    labels: Vec<u32>,
    region_count: u32,
}

impl TryFrom<RegionLabelingRepr> for RegionLabeling {
    type Error = BoardError;

    fn try_from(repr: RegionLabelingRepr) -> Result<Self, Self::Error> {
        BoardError::check_region_count(repr.region_count, repr.labels.iter().copied())?;
        Ok(Self {
            labels: repr.labels,
            region_count: repr.region_count,
        })
    }
}

impl RegionLabeling {
    /// Wrap a raw labeling. Ids must be 0 or positive region numbers.
    #[must_use]
    pub fn from_raw(labels: Vec<u32>) -> Self {
        let region_count = labels.iter().copied().max().unwrap_or(0);
        Self { labels, region_count }
    }

    /// Raw ids in cell order.
    #[must_use]
    pub fn raw(&self) -> &[u32] {
        &self.labels
    }

    /// Region of the cell at `index`.
    pub fn get(&self, index: CellIndex) -> Result<Option<RegionId>, BoardError> {
        if index < self.labels.len() {
            Ok(self.region_of(index))
        } else {
            Err(BoardError::IndexOutOfRange { index, len: self.labels.len() })
        }
    }

    /// Cells belonging to `region`, ascending.
    #[must_use]
    pub fn cells_in(&self, region: RegionId) -> Vec<CellIndex> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == region.0)
            .map(|(index, _)| index)
            .collect()
    }

    /// Both cells are labeled and share a region.
    #[must_use]
    pub fn same_region(&self, a: CellIndex, b: CellIndex) -> bool {
        match (self.labels.get(a), self.labels.get(b)) {
            (Some(&x), Some(&y)) => x != 0 && x == y,
            _ => false,
        }
    }
}

impl Labeling for RegionLabeling {
    fn len(&self) -> usize {
        self.labels.len()
    }

    fn region_count(&self) -> u32 {
        self.region_count
    }

    fn region_of(&self, index: CellIndex) -> Option<RegionId> {
        match self.labels[index] {
            0 => None,
            id => Some(RegionId(id)),
        }
    }
}

/// Label every connected group of piece cells.
///
/// Uses an explicit work stack, so region size is not bounded by call
/// depth. Each cell is labeled at most once; the label array doubles as
/// the visited set.
///
/// ```
/// use kingdom_rules::core::{Board, Grid, Piece, PieceKind};
/// use kingdom_rules::regions::compute_regions;
///
/// let mut board = Board::empty(Grid::new(2, 3));
/// board.place_piece(0, Piece::civ(PieceKind::Settlement)).unwrap();
/// board.place_piece(1, Piece::civ(PieceKind::Temple)).unwrap();
/// board.place_piece(5, Piece::civ(PieceKind::Merchant)).unwrap();
///
/// let regions = compute_regions(&board);
/// assert_eq!(regions.raw(), &[1, 1, 0, 0, 0, 2]);
/// ```
#[must_use]
pub fn compute_regions(board: &Board) -> RegionLabeling {
    let grid = board.grid();
    let mut labels = vec![0u32; board.len()];
    let mut stack: Vec<CellIndex> = Vec::new();
    let mut next_region = 1u32;

    for (seed, cell) in board.enumerate() {
        if labels[seed] != 0 || !cell.has_piece() {
            continue;
        }

        labels[seed] = next_region;
        stack.push(seed);

        while let Some(index) = stack.pop() {
            for neighbor in grid.adjacent(index) {
                if labels[neighbor] == 0 && board.cell(neighbor).has_piece() {
                    labels[neighbor] = next_region;
                    stack.push(neighbor);
                }
            }
        }

        next_region += 1;
    }

    let labeling = RegionLabeling {
        labels,
        region_count: next_region - 1,
    };

    tracing::debug!(
        target: "kingdom_rules::regions",
        cells = board.len(),
        regions = labeling.region_count,
        "regions.labeled"
    );

    labeling
}
