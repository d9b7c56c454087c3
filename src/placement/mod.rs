//! Ruler placement legality.
//!
//! - `adjacent_kingdoms`: distinct kingdoms touching each empty cell
//! - `legal_ruler_placements`: cells where a new ruler may be seeded
//! - `partition_by_terrain`: split a cell list into ground and river

pub mod adjacency;
pub mod evaluator;

pub use adjacency::{adjacent_kingdoms, AdjacentKingdoms};
pub use evaluator::{legal_placements_with, legal_ruler_placements, partition_by_terrain, TerrainSplit};
