use std::array;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use strum::IntoEnumIterator;

use crate::types::{File, Rank, Square};

/// A map of values indexed by [`Square`]. The map is represented as a fixed-size
/// array of length 64, a1 first.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SquareMap<T>([T; 64]);

impl<T> SquareMap<T> {
    #[inline]
    pub const fn new(map: [T; 64]) -> Self {
        SquareMap(map)
    }

    #[inline]
    pub fn from_fn(f: impl Fn(Square) -> T) -> Self {
        // Safety: `i` is in [0; 63]
        Self(array::from_fn(|i| f(unsafe { Square::from_unchecked(i as u8) })))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Square, &T)> {
        Square::iter().zip(self.0.iter())
    }
}

impl<T: Default + Copy> Default for SquareMap<T> {
    #[inline]
    fn default() -> Self {
        SquareMap([T::default(); 64])
    }
}

impl<T> Index<Square> for SquareMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: Square) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl<T> IndexMut<Square> for SquareMap<T> {
    #[inline]
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self.0[index as usize]
    }
}

impl<T: Debug> Debug for SquareMap<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f)?;
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let sq = Square::from_rank_file(rank, file);
                write!(f, "{:?} ", self[sq])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
