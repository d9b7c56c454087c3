//! Core board types: grid geometry, cells, pieces, players, configuration.
//!
//! These are the inputs every rule reads. Nothing in this module knows
//! about regions or kingdoms.

pub mod grid;
pub mod player;
pub mod piece;
pub mod cell;
pub mod board;
pub mod config;
pub mod error;

pub use grid::{CellIndex, Grid, Neighbors};
pub use player::PlayerId;
pub use piece::{Piece, PieceKind};
pub use cell::{Cell, SpecialMarker, Terrain};
pub use board::Board;
pub use config::{BoardConfig, RulesConfig};
pub use error::BoardError;
