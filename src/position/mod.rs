use std::fmt::{Debug, Display, Formatter};

use strum::IntoEnumIterator;

use crate::tables::Tables;
use crate::types::{Bitboard, Color, Piece, PieceKind, Square, Value};
use crate::zobrist::MaterialKey;

use pieces::Pieces;

mod fen;
pub use fen::*;
mod pieces;
#[cfg(test)]
mod tests;

/// Represents a makruk position, as far as material evaluation is concerned.
#[derive(Clone)]
pub struct Position {
    pieces: Pieces,
    side_to_move: Color,
    material_key: MaterialKey,
    tables: &'static Tables,
}

impl Position {
    /// Creates the makruk starting position.
    pub fn new() -> Self {
        Position::from_fen(STARTING_FEN).unwrap()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn material_key(&self) -> MaterialKey {
        self.material_key
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pieces.get(sq)
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces.get_bb(Piece(kind, color))
    }

    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color, kind).len()
    }

    #[inline]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces.occupied_for(color)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.pieces.occupied()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.square_of(color, PieceKind::King)
    }

    /// Square of the only piece of `kind` that `color` has.
    ///
    /// # Panics
    /// Panics if `color` has no such piece. In debug builds it also panics if there is more
    /// than one.
    #[inline]
    pub fn square_of(&self, color: Color, kind: PieceKind) -> Square {
        let bb = self.pieces_of(color, kind);
        debug_assert!(!bb.more_than_one(), "{color} has several pieces of kind {kind}");
        bb.first_sq()
            .unwrap_or_else(|| panic!("{color} has no piece of kind {kind}"))
    }

    /// Midgame value of every piece except pawns and the king.
    pub fn non_pawn_material(&self, color: Color) -> Value {
        PieceKind::NON_PAWN
            .into_iter()
            .map(|kind| kind.value_mg() * self.count(color, kind) as i16)
            .fold(Value::ZERO, |acc, v| acc + v)
    }

    /// Every square attacked by `color` when the board is occupied by `occ`.
    pub fn attacks_by(&self, color: Color, occ: Bitboard) -> Bitboard {
        PieceKind::iter().fold(Bitboard::new(), |atks, kind| {
            let pce = Piece(kind, color);
            atks | self.tables.gen_attacks(self.pieces.get_bb(pce), occ, pce)
        })
    }

    /// Returns the position with colors swapped and the board flipped vertically.
    pub fn mirrored(&self) -> Self {
        Position::from_parts(self.pieces.mirrored(), !self.side_to_move, self.tables)
    }

    #[inline]
    pub(crate) fn tables(&self) -> &'static Tables {
        self.tables
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces && self.side_to_move == other.side_to_move
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{}side_to_move: {:?}\nmaterial_key: {:?}",
            self.pieces, self.side_to_move, self.material_key
        )
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.pieces)?;
        writeln!(f, "To move: {}", self.side_to_move)
    }
}
