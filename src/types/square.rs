use std::fmt::{self, Display, Formatter};
use std::mem;
use std::ops::Add;
use std::str::FromStr;

use strum::IntoEnumIterator;

use super::Color;

/// Squares are enumerated in a little-endian rank-file mapping.
#[rustfmt::skip]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, strum::EnumIter, strum::FromRepr)]
#[repr(u8)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Square {
    /// Converts an index in [0; 63] to a square without checking bounds.
    ///
    /// # Safety
    /// `idx` must be less than 64.
    #[inline]
    pub const unsafe fn from_unchecked(idx: u8) -> Self {
        debug_assert!(idx < 64);
        mem::transmute(idx)
    }

    #[inline]
    pub const fn from_rank_file(rank: Rank, file: File) -> Self {
        // Safety: rank and file are both in [0; 7]
        unsafe { Self::from_unchecked(8 * rank as u8 + file as u8) }
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        // Safety: the shifted index is in [0; 7]
        unsafe { mem::transmute(self as u8 >> 3) }
    }

    #[inline]
    pub const fn file(self) -> File {
        // Safety: the masked index is in [0; 7]
        unsafe { mem::transmute(self as u8 & 7) }
    }

    /// Chebyshev distance, i.e. the number of king steps between the two squares.
    #[inline]
    pub fn distance(self, other: Square) -> u8 {
        let rank_dist = (self.rank() as i8 - other.rank() as i8).unsigned_abs();
        let file_dist = (self.file() as i8 - other.file() as i8).unsigned_abs();
        rank_dist.max(file_dist)
    }

    /// Mirrors the square vertically, a1 becomes a8.
    #[inline]
    pub const fn flip_rank(self) -> Self {
        // Safety: xor with 56 keeps the index in [0; 63]
        unsafe { Self::from_unchecked(self as u8 ^ 56) }
    }

    /// Returns the square as seen from `color`'s side of the board.
    #[inline]
    pub const fn relative_to(self, color: Color) -> Self {
        match color {
            Color::White => self,
            Color::Black => self.flip_rank(),
        }
    }

    /// a1 is a dark square.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.rank() as u8 + self.file() as u8) % 2 == 0
    }

    /// Returns the square `vec` away from this one, or `None` if it falls off the board.
    #[inline]
    pub fn add_checked(self, vec: BoardVector) -> Option<Self> {
        let rank = self.rank() as i8 + vec.0;
        let file = self.file() as i8 + vec.1;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Square::from_repr((8 * rank + file) as u8)
        } else {
            None
        }
    }
}

/// Returns whether the two squares have different colors.
#[inline]
pub fn opposite_colors(a: Square, b: Square) -> bool {
    a.is_dark() != b.is_dark()
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid square '{0}'")]
pub struct ParseSquareError(String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError(s.to_string());
        match s.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                let file = File::from_repr(file - b'a').ok_or_else(err)?;
                let rank = Rank::from_repr(rank - b'1').ok_or_else(err)?;
                Ok(Square::from_rank_file(rank, file))
            }
            _ => Err(err()),
        }
    }
}

impl Rank {
    /// Iterates over the ranks above this one, closest first.
    pub fn iter_after(self) -> impl Iterator<Item = Rank> {
        Rank::iter().skip(self as usize + 1)
    }

    /// Iterates over the ranks below this one, closest first.
    pub fn iter_before(self) -> impl Iterator<Item = Rank> {
        Rank::iter().take(self as usize).rev()
    }
}

impl File {
    /// Iterates over the files right of this one, closest first.
    pub fn iter_after(self) -> impl Iterator<Item = File> {
        File::iter().skip(self as usize + 1)
    }

    /// Iterates over the files left of this one, closest first.
    pub fn iter_before(self) -> impl Iterator<Item = File> {
        File::iter().take(self as usize).rev()
    }
}

/// A (rank, file) offset on the board, as seen from white.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardVector(pub i8, pub i8);

impl BoardVector {
    pub const NORTH: Self = Self(1, 0);
    pub const NORTH_EAST: Self = Self(1, 1);
    pub const EAST: Self = Self(0, 1);
    pub const SOUTH_EAST: Self = Self(-1, 1);
    pub const SOUTH: Self = Self(-1, 0);
    pub const SOUTH_WEST: Self = Self(-1, -1);
    pub const WEST: Self = Self(0, -1);
    pub const NORTH_WEST: Self = Self(1, -1);

    /// Forward from `color`'s point of view.
    pub const fn up(color: Color) -> Self {
        match color {
            Color::White => Self::NORTH,
            Color::Black => Self::SOUTH,
        }
    }
}

impl Add for BoardVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_squares() {
        assert_eq!("a1".parse(), Ok(Square::A1));
        assert_eq!("e4".parse(), Ok(Square::E4));
        assert_eq!("h8".parse(), Ok(Square::H8));
        assert_eq!("e4".parse::<Square>().unwrap().to_string(), "e4");
    }

    #[test]
    fn rejects_invalid_squares() {
        for s in ["i4", "E4", "e0", "e9", "e", "e44", ""] {
            assert_eq!(
                s.parse::<Square>(),
                Err(ParseSquareError(s.to_string())),
                "{s}"
            );
        }
    }
}
