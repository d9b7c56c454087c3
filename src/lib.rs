//! # kingdom-rules
//!
//! Rules engine for a territory-control tile game on a fixed grid.
//!
//! Pieces occupy cells; orthogonally connected pieces form regions; a
//! region holding a ruler is a kingdom. A new ruler may only be seeded on
//! an empty ground cell next to a temple that touches at most one kingdom.
//!
//! ## Design Principles
//!
//! 1. **Stateless queries**: every labeling is recomputed from the board
//!    snapshot passed in. Nothing is cached between calls.
//!
//! 2. **Tagged ids inside, signed ids at the edge**: kingdoms are a
//!    `KingdomId` enum internally; the compact signed form (positive
//!    kingdom, negative ruler-less region, 0 empty) is only produced on
//!    request.
//!
//! 3. **Cheap snapshots**: boards are backed by `im` persistent vectors.
//!
//! ## Modules
//!
//! - `core`: Grid geometry, cells, pieces, players, board, configuration
//! - `regions`: Region labeling, kingdom classification, piece index
//! - `placement`: Adjacent-kingdom sets and ruler placement legality
//! - `notation`: Pipe-delimited board notation
//! - `rules`: Facade bundling configuration and the query pipeline

pub mod core;
pub mod regions;
pub mod placement;
pub mod notation;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, BoardError, Cell, CellIndex, Grid,
    Piece, PieceKind, PlayerId, RulesConfig, SpecialMarker, Terrain,
};

pub use crate::regions::{
    compute_kingdoms, compute_regions, piece_index,
    KingdomId, KingdomLabeling, Labeling, PieceIndex, RegionId, RegionLabeling, RegionPieces, RulerEntry,
};

pub use crate::placement::{
    adjacent_kingdoms, legal_placements_with, legal_ruler_placements, partition_by_terrain,
    AdjacentKingdoms, TerrainSplit,
};

pub use crate::notation::{decode_board, encode_board, NotationError};

pub use crate::rules::{BoardAnalysis, KingdomRules};
