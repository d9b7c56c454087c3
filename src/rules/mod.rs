//! Rules facade for the turn layer.
//!
//! `KingdomRules` runs the whole query pipeline against a board snapshot
//! and validates ruler placements before mutating the board. Scoring,
//! conflicts and turn order stay with the caller.

pub mod engine;

pub use engine::{BoardAnalysis, KingdomRules};
