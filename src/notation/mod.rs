//! Textual board notation used by the persistence layer.
//!
//! The rules never read notation directly; this module turns a stored
//! layout into a [`Board`](crate::core::Board) and back.

pub mod codec;

pub use codec::{decode_board, decode_cell, encode_board, encode_cell, NotationError};
