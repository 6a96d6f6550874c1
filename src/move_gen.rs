use arrayvec::ArrayVec;

use crate::position::Position;
use crate::types::{Bitboard, Color, PieceKind, Square};

/// Legal king moves for `color`, given as destination squares.
///
/// The king may not step onto a square the opponent attacks once the king has left its
/// square, and a captured piece no longer attacks anything.
pub fn legal_king_moves(position: &Position, color: Color) -> ArrayVec<Square, 8> {
    let tables = position.tables();
    let king_sq = position.king_square(color);
    let candidates = tables.king_attacks[king_sq] - position.occupied_by(color);

    let mut moves = ArrayVec::new();
    for to in candidates {
        let occ = (position.occupied() - Bitboard::from(king_sq)).with_sq(to);
        if !is_attacked_after_capture(position, !color, to, occ) {
            moves.push(to);
        }
    }
    moves
}

/// Returns whether `color` has a legal move while owning nothing but its king.
pub fn lone_king_can_move(position: &Position, color: Color) -> bool {
    debug_assert_eq!(
        position.occupied_by(color),
        position.pieces_of(color, PieceKind::King)
    );
    !legal_king_moves(position, color).is_empty()
}

fn is_attacked_after_capture(position: &Position, attacker: Color, sq: Square, occ: Bitboard) -> bool {
    let tables = position.tables();
    position
        .occupied_by(attacker)
        .into_iter()
        .filter(|&from| from != sq)
        .filter_map(|from| position.piece_at(from).map(|pce| (from, pce)))
        .any(|(from, pce)| tables.gen_attacks_from_sq(occ, pce, from).contains(sq))
}
