//! Pieces: civilization tiles and player-owned rulers.
//!
//! Every piece has a [`PieceKind`] (settlement, temple, farm, merchant).
//! Civilization pieces are unowned; ruler pieces always carry the owning
//! [`PlayerId`]. The split is a closed enum so category bucketing is a
//! `match` on the tag rather than name parsing.

use serde::{Deserialize, Serialize};

use super::cell::Terrain;
use super::player::PlayerId;

/// The four piece categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Settlement,
    Temple,
    Farm,
    Merchant,
}

impl PieceKind {
    /// All kinds, in notation order.
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Settlement,
        PieceKind::Temple,
        PieceKind::Farm,
        PieceKind::Merchant,
    ];

    /// Terrain this kind may occupy. Farms live on rivers, everything else
    /// on ground.
    #[must_use]
    pub const fn terrain(self) -> Terrain {
        match self {
            PieceKind::Farm => Terrain::River,
            _ => Terrain::Ground,
        }
    }

    /// Lowercase notation letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Settlement => 's',
            PieceKind::Temple => 't',
            PieceKind::Farm => 'f',
            PieceKind::Merchant => 'm',
        }
    }

    /// Parse a lowercase notation letter.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            's' => Some(PieceKind::Settlement),
            't' => Some(PieceKind::Temple),
            'f' => Some(PieceKind::Farm),
            'm' => Some(PieceKind::Merchant),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Settlement => "settlement",
            PieceKind::Temple => "temple",
            PieceKind::Farm => "farm",
            PieceKind::Merchant => "merchant",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece occupying a cell.
///
/// ```
/// use kingdom_rules::core::{Piece, PieceKind, PlayerId};
///
/// let temple = Piece::civ(PieceKind::Temple);
/// assert!(temple.is_civ());
/// assert_eq!(temple.player(), None);
///
/// let king = Piece::ruler(PieceKind::Settlement, PlayerId::new(1));
/// assert!(king.is_ruler());
/// assert_eq!(king.player(), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// Unowned civilization tile. `treasure` only applies to temples.
    Civ { kind: PieceKind, treasure: bool },
    /// Ruler owned by a player.
    Ruler { kind: PieceKind, player: PlayerId },
}

impl Piece {
    /// A plain civilization piece.
    #[must_use]
    pub const fn civ(kind: PieceKind) -> Self {
        Piece::Civ { kind, treasure: false }
    }

    /// A temple carrying a treasure.
    #[must_use]
    pub const fn treasure_temple() -> Self {
        Piece::Civ { kind: PieceKind::Temple, treasure: true }
    }

    /// A ruler owned by `player`.
    #[must_use]
    pub const fn ruler(kind: PieceKind, player: PlayerId) -> Self {
        Piece::Ruler { kind, player }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        match *self {
            Piece::Civ { kind, .. } | Piece::Ruler { kind, .. } => kind,
        }
    }

    #[must_use]
    pub const fn is_ruler(&self) -> bool {
        matches!(self, Piece::Ruler { .. })
    }

    #[must_use]
    pub const fn is_civ(&self) -> bool {
        matches!(self, Piece::Civ { .. })
    }

    /// Any temple, owned or not.
    #[must_use]
    pub const fn is_temple(&self) -> bool {
        matches!(self.kind(), PieceKind::Temple)
    }

    #[must_use]
    pub const fn is_treasure(&self) -> bool {
        matches!(self, Piece::Civ { kind: PieceKind::Temple, treasure: true })
    }

    /// Owner, for rulers.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match *self {
            Piece::Ruler { player, .. } => Some(player),
            Piece::Civ { .. } => None,
        }
    }

    /// Terrain the piece may occupy.
    #[must_use]
    pub const fn terrain(&self) -> Terrain {
        self.kind().terrain()
    }
}
