use std::ops::Not;

pub mod bitboard;
mod piece;
mod square;
mod value;

pub use bitboard::Bitboard;
pub use piece::*;
pub use square::*;
pub use value::*;

/// Represents a color (white or black).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::Display, strum::EnumIter)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index usable for per-color arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Not for Color {
    type Output = Self;

    /// Returns the opposite color.
    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
