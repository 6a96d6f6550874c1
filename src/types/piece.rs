use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use itertools::iproduct;
use strum::IntoEnumIterator;

use super::{Color, Value};

/// Represents a kind of piece in makruk.
///
/// The discriminants follow the order used by the material tables: pawn (bia), queen (met),
/// bishop (khon), knight (ma), rook (rua) and finally the king (khun).
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, strum::Display, strum::EnumIter)]
#[repr(u8)]
pub enum PieceKind {
    #[strum(serialize = "p")]
    Pawn,
    /// Moves one step diagonally.
    #[strum(serialize = "m")]
    Queen,
    /// Moves one step diagonally or one step forward.
    #[strum(serialize = "s")]
    Bishop,
    #[strum(serialize = "n")]
    Knight,
    #[strum(serialize = "r")]
    Rook,
    #[strum(serialize = "k")]
    King,
}

impl PieceKind {
    /// The kinds that count towards non-pawn material.
    pub const NON_PAWN: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Middlegame value of the piece. The king has no material value.
    #[inline]
    pub const fn value_mg(self) -> Value {
        match self {
            PieceKind::Pawn => Value::PAWN_MG,
            PieceKind::Queen => Value::QUEEN_MG,
            PieceKind::Bishop => Value::BISHOP_MG,
            PieceKind::Knight => Value::KNIGHT_MG,
            PieceKind::Rook => Value::ROOK_MG,
            PieceKind::King => Value::ZERO,
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = PieceFromCharError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'p' => Ok(PieceKind::Pawn),
            'm' => Ok(PieceKind::Queen),
            's' => Ok(PieceKind::Bishop),
            'n' => Ok(PieceKind::Knight),
            'r' => Ok(PieceKind::Rook),
            'k' => Ok(PieceKind::King),
            _ => Err(PieceFromCharError(value)),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid piece character '{0}'")]
pub struct PieceFromCharError(pub char);

/// Represents a piece, i.e. a piece kind and a color.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Piece(pub PieceKind, pub Color);

impl Piece {
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.0
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.1
    }

    /// Index in [0; 11], white pieces first.
    #[inline]
    pub const fn index(self) -> usize {
        self.color().index() * 6 + self.kind().index()
    }

    /// Iterates over all possibles value of `Piece`.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Self> {
        iproduct!(Color::iter(), PieceKind::iter()).map(|(color, kind)| Self(kind, color))
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceFromCharError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::try_from(value)?;
        let color = if value.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece(kind, color))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Color::White => write!(f, "{}", self.kind().to_string().to_ascii_uppercase()),
            Color::Black => write!(f, "{}", self.kind()),
        }
    }
}
