use std::fmt::{Display, Formatter};

use strum::IntoEnumIterator;

use crate::square_map::SquareMap;
use crate::types::{Bitboard, Color, File, Piece, Rank, Square};

/// Piece placement, kept both as per-piece bitboards and as a square lookup.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct Pieces {
    boards: [[Bitboard; 6]; 2],
    occupied: [Bitboard; 2],
    map: SquareMap<Option<Piece>>,
}

impl Pieces {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.map[sq]
    }

    #[inline]
    pub fn get_bb(&self, pce: Piece) -> Bitboard {
        self.boards[pce.color().index()][pce.kind().index()]
    }

    #[inline]
    pub fn occupied_for(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    /// Gets a `Bitboard` of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }

    pub fn set_sq(&mut self, sq: Square, pce: Piece) {
        if self.map[sq].is_some() {
            self.unset_sq(sq);
        }
        self.boards[pce.color().index()][pce.kind().index()].add_sq(sq);
        self.occupied[pce.color().index()].add_sq(sq);
        self.map[sq] = Some(pce);
    }

    pub fn unset_sq(&mut self, sq: Square) {
        if let Some(pce) = self.map[sq].take() {
            let bb = Bitboard::from(sq);
            self.boards[pce.color().index()][pce.kind().index()] -= bb;
            self.occupied[pce.color().index()] -= bb;
        }
    }

    /// Returns the placement with colors swapped and the board flipped vertically.
    pub fn mirrored(&self) -> Self {
        let mut mirrored = Self::new();
        for (sq, pce) in self.map.iter() {
            if let Some(pce) = *pce {
                mirrored.set_sq(sq.flip_rank(), Piece(pce.kind(), !pce.color()));
            }
        }
        mirrored
    }

    /// Number of pieces of each kind, indexed by color and then [`PieceKind::index`].
    pub fn counts(&self) -> [[u8; 6]; 2] {
        let mut counts = [[0; 6]; 2];
        for pce in Piece::iter() {
            counts[pce.color().index()][pce.kind().index()] = self.get_bb(pce).len() as u8;
        }
        counts
    }
}

impl Display for Pieces {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                match self.get(Square::from_rank_file(rank, file)) {
                    None => write!(f, ". ")?,
                    Some(pce) => write!(f, "{} ", pce)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
