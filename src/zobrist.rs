use std::fmt::{self, Debug, Formatter};
use std::ops::BitXorAssign;

use strum::IntoEnumIterator;

use crate::tables::{Tables, MAX_PIECE_COUNT};
use crate::types::{Color, Piece, PieceKind};

pub trait ZobristKey {
    fn key(&self, tables: &Tables) -> u64;
}

/// Zobrist key for the `n`th piece of a kind and color, counting from zero.
impl ZobristKey for (Piece, usize) {
    fn key(&self, tables: &Tables) -> u64 {
        let (pce, n) = *self;
        debug_assert!(n < MAX_PIECE_COUNT);
        tables.zobrist_randoms.material[pce.index()][n]
    }
}

/// Hash of a material composition, i.e. how many pieces of each kind each color has.
///
/// Two positions have the same key exactly when they have the same material, regardless of
/// where the pieces stand or who is to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaterialKey(u64);

impl MaterialKey {
    /// Builds the key from piece counts indexed by color and then [`PieceKind::index`].
    pub fn from_counts(counts: &[[u8; 6]; 2]) -> Self {
        let tables = Tables::get();
        let mut key = Self::default();
        for color in Color::iter() {
            for kind in PieceKind::iter() {
                let count = counts[color.index()][kind.index()] as usize;
                for n in 0..count {
                    key ^= (Piece(kind, color), n).key(tables);
                }
            }
        }
        key
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl BitXorAssign<u64> for MaterialKey {
    #[inline]
    fn bitxor_assign(&mut self, rhs: u64) {
        self.0 ^= rhs;
    }
}

impl Debug for MaterialKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "MaterialKey({:#018x})", self.0)
    }
}

#[cfg(test)]
mod tests;
