//! Regions and kingdoms.
//!
//! ## Pipeline
//!
//! 1. `compute_regions`: label connected groups of piece cells
//! 2. `compute_kingdoms`: mark the regions that hold a ruler
//! 3. `piece_index`: group pieces per region for scoring collaborators
//!
//! Labelings are rebuilt from the board on every call and hold no state
//! between queries.

pub mod labeler;
pub mod kingdoms;
pub mod index;

pub use labeler::{compute_regions, Labeling, RegionId, RegionLabeling};
pub use kingdoms::{compute_kingdoms, KingdomId, KingdomLabeling};
pub use index::{piece_index, PieceIndex, RegionPieces, RulerEntry};
