use crate::eval::push_tables::{
    king_corner, push_close, PUSH_TO_OPPOSING_SIDE_EDGES, PUSH_TO_QUEEN_CORNERS,
};
use crate::position::Position;
use crate::types::{opposite_colors, Color, PieceKind, Square, Value};

use super::{queen_corner_view, verify_material};

/// Mate with KBQ vs K. Always a win; the defending king is driven into a corner the met can
/// cover when it already stands near one, towards the far side of the board otherwise.
pub(super) fn evaluate_kbqk(position: &Position, strong: Color) -> Value {
    let weak = !strong;
    debug_assert!(verify_material(
        position,
        strong,
        Value::BISHOP_MG + Value::QUEEN_MG,
        0
    ));
    debug_assert!(verify_material(position, weak, Value::ZERO, 0));

    let winner_ksq = position.king_square(strong);
    let loser_ksq = position.king_square(weak);
    let bishop_sq = position.square_of(strong, PieceKind::Bishop);
    let queen_sq = position.square_of(strong, PieceKind::Queen);

    let queen_corners = PUSH_TO_QUEEN_CORNERS[queen_corner_view(loser_ksq, queen_sq)];
    let opposing_edges = PUSH_TO_OPPOSING_SIDE_EDGES[loser_ksq.relative_to(strong)];

    let drive = match king_corner(loser_ksq) {
        Some(corner) if !opposite_colors(corner, queen_sq) => queen_corners,
        _ => opposing_edges,
    };

    Value::KNOWN_WIN
        + Value::new(
            push_close(winner_ksq, loser_ksq)
                + drive
                + (push_close(bishop_sq, winner_ksq) >> 1)
                + opposing_edges
                + (push_close(queen_sq, winner_ksq) >> 1)
                + queen_corners,
        )
}

/// Mate with KNQ vs K. Mate can only be forced in the corners of the met's color, so the
/// board is flipped to make those a1 and h8. Far from both, only king closeness is scored.
pub(super) fn evaluate_knqk(position: &Position, strong: Color) -> Value {
    let weak = !strong;
    debug_assert!(verify_material(
        position,
        strong,
        Value::KNIGHT_MG + Value::QUEEN_MG,
        0
    ));
    debug_assert!(verify_material(position, weak, Value::ZERO, 0));

    let queen_sq = position.square_of(strong, PieceKind::Queen);
    let [winner_ksq, loser_ksq, knight_sq, queen_sq] = [
        position.king_square(strong),
        position.king_square(weak),
        position.square_of(strong, PieceKind::Knight),
        queen_sq,
    ]
    .map(|sq| queen_corner_view(sq, queen_sq));

    let closeness = push_close(winner_ksq, loser_ksq);
    let corner_dist = |corner: Square| loser_ksq.distance(corner);
    if corner_dist(Square::A1) > 4 && corner_dist(Square::H8) > 4 {
        return Value::new(closeness);
    }

    let corner = if corner_dist(Square::A1) <= corner_dist(Square::H8) {
        Square::A1
    } else {
        Square::H8
    };
    let tables = position.tables();
    let smothering = winner_ksq.distance(corner) <= 4
        && !(tables.king_attacks[loser_ksq] & tables.knight_attacks[knight_sq]).is_empty();
    let win = if smothering {
        Value::KNOWN_WIN
    } else {
        Value::ZERO
    };

    win + Value::new(
        closeness
            + PUSH_TO_QUEEN_CORNERS[loser_ksq]
            + (push_close(knight_sq, winner_ksq) >> 1)
            + (push_close(queen_sq, winner_ksq) >> 1),
    )
}
