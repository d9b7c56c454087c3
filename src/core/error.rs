//! Error types for board queries and mutations.
//!
//! All failures are precondition violations: the engine is deterministic,
//! so nothing here is retryable and no query is ever partially applied.

use thiserror::Error;

use super::grid::CellIndex;

/// Failure of a board query or mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A labeling or cell sequence does not cover the board exactly.
    #[error("expected {expected} cells but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A cell index outside `[0, rows * columns)`.
    #[error("cell index {index} is out of range for a board of {len} cells")]
    IndexOutOfRange { index: CellIndex, len: usize },

    /// The cell is not a legal target for seeding a ruler.
    #[error("cell {index} is not a legal ruler placement")]
    IllegalPlacement { index: CellIndex },

    /// A signed or serialized id whose magnitude is not a valid region id.
    #[error("{id} is not a valid region id")]
    InvalidRegionId { id: i64 },

    /// A labeling uses region ids above its declared region count.
    #[error("labeling declares {region_count} regions but uses region {max_label}")]
    RegionCountMismatch { region_count: u32, max_label: u32 },
}

impl BoardError {
    /// Check that `actual` matches the expected cell count.
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), BoardError> {
        if expected == actual {
            Ok(())
        } else {
            tracing::warn!(
                target: "kingdom_rules::board",
                expected,
                actual,
                "board.length_mismatch"
            );
            Err(BoardError::LengthMismatch { expected, actual })
        }
    }

    /// Check that every label fits within `region_count`.
    pub(crate) fn check_region_count(
        region_count: u32,
        labels: impl IntoIterator<Item = u32>,
    ) -> Result<(), BoardError> {
        let max_label = labels.into_iter().max().unwrap_or(0);
        if max_label <= region_count {
            Ok(())
        } else {
            Err(BoardError::RegionCountMismatch { region_count, max_label })
        }
    }
}
