use crate::eval::push_tables::{push_close, push_win, PUSH_TO_EDGES};
use crate::move_gen::lone_king_can_move;
use crate::position::Position;
use crate::types::bitboard::DARK_SQUARES;
use crate::types::{Bitboard, Color, PieceKind, Rank, Square, Value};

use super::{nearest, verify_material};

/// Whether `bb` has squares of both colors.
#[inline]
fn on_both_colors(bb: Bitboard) -> bool {
    !(bb & DARK_SQUARES).is_empty() && !(bb - DARK_SQUARES).is_empty()
}

/// Mate with KX vs K. Gives the attacking side a bonus for driving the defending king towards
/// the edge and for keeping the kings close. Known mating material is lifted into the win band.
pub(super) fn evaluate_kxk(position: &Position, strong: Color) -> Value {
    let weak = !strong;
    debug_assert!(verify_material(position, weak, Value::ZERO, 0));

    let winner_ksq = position.king_square(strong);
    let loser_ksq = position.king_square(weak);

    // Stalemate detection with lone king
    if position.side_to_move() == weak
        && !lone_king_can_move(position, weak)
        && !position
            .attacks_by(strong, position.occupied())
            .contains(loser_ksq)
    {
        return Value::DRAW;
    }

    let mut result = position.non_pawn_material(strong)
        + Value::PAWN_EG * position.count(strong, PieceKind::Pawn) as i16
        + Value::new(PUSH_TO_EDGES[loser_ksq] + push_close(winner_ksq, loser_ksq));

    for kind in [PieceKind::Bishop, PieceKind::Queen] {
        if let Some(sq) = nearest(position, strong, kind, loser_ksq) {
            result += Value::new(PUSH_TO_EDGES[loser_ksq] + push_win(sq, loser_ksq));
        }
    }

    let rooks = position.count(strong, PieceKind::Rook);
    let knights = position.count(strong, PieceKind::Knight);
    let bishops = position.count(strong, PieceKind::Bishop);
    let queens = position.count(strong, PieceKind::Queen);
    let queens_on_both_colors = on_both_colors(position.pieces_of(strong, PieceKind::Queen));

    let forced_mate = rooks >= 1
        || (bishops >= 1 && knights >= 1)
        || bishops == 2
        || (bishops >= 1 && queens >= 1)
        || (knights == 1 && queens >= 2)
        || (knights == 2 && queens >= 1)
        || (queens >= 3 && queens_on_both_colors);
    if forced_mate {
        result = (result + Value::KNOWN_WIN).min(Value::MATE_IN_MAX_PLY - Value::new(1));
    }

    // Mets of a single color cannot mate a bare king
    if queens >= 3 && rooks == 0 && knights == 0 && bishops == 0 && !queens_on_both_colors {
        return Value::DRAW;
    }

    result
}

/// Rank on which pawns of `color` promote.
#[inline]
fn promotion_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Sixth,
        Color::Black => Rank::Third,
    }
}

/// Mets and pawns vs K. Mate needs mets on both square colors, counting the mets the pawns
/// will promote to.
pub(super) fn evaluate_kqspsk(position: &Position, strong: Color) -> Value {
    let weak = !strong;
    debug_assert!(verify_material(position, weak, Value::ZERO, 0));

    let loser_ksq = position.king_square(weak);
    let pawns = position.pieces_of(strong, PieceKind::Pawn);
    let queens = position.pieces_of(strong, PieceKind::Queen);

    let result = position.non_pawn_material(strong)
        + Value::PAWN_EG * pawns.len() as i16
        - Value::PAWN_EG * position.count(weak, PieceKind::Pawn) as i16;

    if queens.len() >= 3 && on_both_colors(queens) {
        return result + Value::new(PUSH_TO_EDGES[loser_ksq]);
    }
    if queens.len() + pawns.len() < 3 {
        return Value::DRAW;
    }

    let promotion_squares: Bitboard = pawns
        .into_iter()
        .map(|sq| Square::from_rank_file(promotion_rank(strong), sq.file()))
        .collect();
    if on_both_colors(queens | promotion_squares) {
        result
    } else {
        Value::DRAW
    }
}
