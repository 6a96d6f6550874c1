use std::fmt::Debug;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not, Sub, SubAssign};

use strum::IntoEnumIterator;

use super::{File, Rank, Square};

#[macro_export]
macro_rules! bb {
    ( $( $sq:expr ),* $(,)? ) => { {
        #[allow(unused_imports)]
        use $crate::types::Square::*;
        $crate::types::Bitboard::new() $(.with_sq($sq) )*
    }};
}

/// The 32 dark squares, a1 included.
pub const DARK_SQUARES: Bitboard = Bitboard(0xAA55_AA55_AA55_AA55);

#[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates an empty `Bitboard`.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns a new `Bitboard` with `sq` added.
    #[inline]
    pub const fn with_sq(self, sq: Square) -> Self {
        Bitboard(self.0 | (1 << sq as u64))
    }

    #[inline]
    pub fn add_sq(&mut self, sq: Square) {
        self.0 |= 1 << sq as u64;
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set squares.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether at least two squares are set.
    #[inline]
    pub const fn more_than_one(self) -> bool {
        self.0 & self.0.wrapping_sub(1) != 0
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 >> sq as u64) & 1 == 1
    }

    /// Returns the lowest set square.
    #[inline]
    pub fn first_sq(self) -> Option<Square> {
        self.into_iter().next()
    }

    /// Returns the lowest set square.
    ///
    /// # Safety
    /// The `Bitboard` must not be empty.
    #[inline]
    pub unsafe fn first_sq_unchecked(self) -> Square {
        debug_assert!(!self.is_empty());
        Square::from_unchecked(self.0.trailing_zeros() as u8)
    }

    /// Mirrors every square vertically.
    #[inline]
    pub const fn flip_rank(self) -> Self {
        Self(self.0.swap_bytes())
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Iter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter { bb: self }
    }
}

impl FromIterator<Square> for Bitboard {
    #[inline]
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut bb = Bitboard::new();
        for sq in iter {
            bb.add_sq(sq);
        }
        bb
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl Sub for Bitboard {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 & !rhs.0)
    }
}

impl SubAssign for Bitboard {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Self {
        Self::new().with_sq(sq)
    }
}

impl Debug for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let sq = Square::from_rank_file(rank, file);
                if self.contains(sq) {
                    write!(f, "# ")?;
                } else {
                    write!(f, ". ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct Iter {
    bb: Bitboard,
}

impl Iterator for Iter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bb.is_empty() {
            return None;
        }
        // Safety: the bitboard is not empty
        let sq = unsafe { self.bb.first_sq_unchecked() };
        self.bb.0 &= self.bb.0 - 1;
        Some(sq)
    }
}

impl FusedIterator for Iter {}
