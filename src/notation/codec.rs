//! Pipe-delimited board notation.
//!
//! One token per cell, in index order, joined by `|`:
//!
//! | token        | cell                                        |
//! |--------------|---------------------------------------------|
//! | `G` / `R`    | empty ground / river                        |
//! | `G!` / `R!`  | catastrophe on ground / river               |
//! | `G?k`        | ground civ `k` (s, t, m) under unification  |
//! | `R?f`, `R?`  | river farm under unification                |
//! | `s` `t` `m`  | ground civilization piece                   |
//! | `f`          | river farm                                  |
//! | `T`          | ground temple carrying a treasure           |
//! | `r<p><k>`    | ruler of kind `k` owned by player digit `p` |
//!
//! Rulers sit on the terrain their kind belongs to.

use thiserror::Error;

use crate::core::{Board, BoardError, Cell, CellIndex, Grid, Piece, PieceKind, PlayerId, SpecialMarker, Terrain};

/// Failure to decode or encode board notation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("unrecognized token {token:?} for cell {index}")]
    UnknownToken { index: CellIndex, token: String },

    #[error("layout has {actual} cells but the grid needs {expected}")]
    CellCount { expected: usize, actual: usize },

    #[error("cell {index} has no notation form")]
    Unencodable { index: CellIndex },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Decode a `rows x columns` board from notation.
///
/// ```
/// use kingdom_rules::notation::decode_board;
///
/// let board = decode_board(2, 2, "G|t|R|r1f").unwrap();
/// assert!(board.get(1).unwrap().has_temple());
/// assert!(board.get(3).unwrap().has_ruler());
/// ```
pub fn decode_board(rows: usize, columns: usize, text: &str) -> Result<Board, NotationError> {
    let grid = Grid::new(rows, columns);
    let tokens: Vec<&str> = if text.is_empty() {
        Vec::new()
    } else {
        text.split('|').collect()
    };

    let expected = grid.checked_len().unwrap_or(usize::MAX);
    if tokens.len() != expected {
        return Err(NotationError::CellCount {
            expected,
            actual: tokens.len(),
        });
    }

    let cells = tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            decode_cell(token).ok_or_else(|| NotationError::UnknownToken {
                index,
                token: (*token).to_string(),
            })
        })
        .collect::<Result<Vec<Cell>, NotationError>>()?;

    Ok(Board::new(grid, cells)?)
}

/// Encode a board as notation.
pub fn encode_board(board: &Board) -> Result<String, NotationError> {
    let tokens = board
        .enumerate()
        .map(|(index, cell)| encode_cell(cell).ok_or(NotationError::Unencodable { index }))
        .collect::<Result<Vec<String>, NotationError>>()?;
    Ok(tokens.join("|"))
}

/// Decode a single cell token.
#[must_use]
pub fn decode_cell(token: &str) -> Option<Cell> {
    let mut chars = token.chars();
    let head = chars.next()?;
    let rest: Vec<char> = chars.collect();

    match (head, rest.as_slice()) {
        ('G', []) => Some(Cell::ground()),
        ('R', []) => Some(Cell::river()),
        ('G', ['!']) => Some(Cell::ground().with_special(SpecialMarker::Catastrophe)),
        ('R', ['!']) => Some(Cell::river().with_special(SpecialMarker::Catastrophe)),
        ('G', ['?', k]) => {
            let kind = PieceKind::from_letter(*k).filter(|kind| kind.terrain() == Terrain::Ground)?;
            Some(
                Cell::ground()
                    .with_piece(Piece::civ(kind))
                    .with_special(SpecialMarker::Unification),
            )
        }
        ('R', ['?']) | ('R', ['?', 'f']) => Some(
            Cell::river()
                .with_piece(Piece::civ(PieceKind::Farm))
                .with_special(SpecialMarker::Unification),
        ),
        ('T', []) => Some(Cell::ground().with_piece(Piece::treasure_temple())),
        ('r', [p, k]) => {
            let player = PlayerId::from_digit(*p)?;
            let kind = PieceKind::from_letter(*k)?;
            Some(Cell::new(kind.terrain()).with_piece(Piece::ruler(kind, player)))
        }
        (k, []) => {
            let kind = PieceKind::from_letter(k)?;
            Some(Cell::new(kind.terrain()).with_piece(Piece::civ(kind)))
        }
        _ => None,
    }
}

/// Encode a single cell, if it has a notation form.
#[must_use]
pub fn encode_cell(cell: &Cell) -> Option<String> {
    let terrain = match cell.terrain {
        Terrain::Ground => 'G',
        Terrain::River => 'R',
    };

    match (cell.piece, cell.special) {
        (None, None) => Some(terrain.to_string()),
        (None, Some(SpecialMarker::Catastrophe)) => Some(format!("{terrain}!")),
        (Some(piece), _) if piece.terrain() != cell.terrain => None,
        (Some(Piece::Civ { kind, treasure: false }), Some(SpecialMarker::Unification)) => {
            Some(format!("{terrain}?{}", kind.letter()))
        }
        (Some(piece), None) if piece.is_treasure() => Some("T".to_string()),
        (Some(Piece::Civ { kind, treasure: false }), None) => Some(kind.letter().to_string()),
        (Some(Piece::Ruler { kind, player }), None) => {
            Some(format!("r{}{}", player.to_digit()?, kind.letter()))
        }
        _ => None,
    }
}
