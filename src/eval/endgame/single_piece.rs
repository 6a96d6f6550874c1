use crate::eval::push_tables::{
    push_away, push_close, push_win, PUSH_TO_EDGES, PUSH_TO_OPPOSING_SIDE_EDGES,
    PUSH_TO_QUEEN_CORNERS,
};
use crate::position::Position;
use crate::types::{Color, PieceKind, Value};

use super::{nearest, queen_corner_view, verify_material};

/// Large material edge against a lone `weak_kind` (pawn, met, khon, knight or rook).
///
/// Material difference plus edge driving and king closeness. Every attacking knight, khon and
/// met type present adds a bonus for its nearest piece approaching the defending king, khon
/// and met also add their own driving table. A rook only adds edge driving.
pub(super) fn evaluate_kx_vs(position: &Position, strong: Color, weak_kind: PieceKind) -> Value {
    let weak = !strong;
    debug_assert_eq!(position.count(strong, PieceKind::Pawn), 0);
    debug_assert_eq!(position.count(weak, weak_kind), 1);

    let winner_ksq = position.king_square(strong);
    let loser_ksq = position.king_square(weak);

    let mut result = position.non_pawn_material(strong) - position.non_pawn_material(weak)
        - Value::PAWN_EG * position.count(weak, PieceKind::Pawn) as i16;

    let mut bonus = PUSH_TO_EDGES[loser_ksq] + push_close(winner_ksq, loser_ksq);
    if position.count(strong, PieceKind::Rook) > 0 {
        bonus += PUSH_TO_EDGES[loser_ksq];
    }
    if let Some(sq) = nearest(position, strong, PieceKind::Knight, loser_ksq) {
        bonus += push_win(sq, loser_ksq);
    }
    if let Some(sq) = nearest(position, strong, PieceKind::Bishop, loser_ksq) {
        bonus += push_win(sq, loser_ksq)
            + PUSH_TO_OPPOSING_SIDE_EDGES[loser_ksq.relative_to(strong)];
    }
    if let Some(sq) = nearest(position, strong, PieceKind::Queen, loser_ksq) {
        bonus += push_win(sq, loser_ksq) + PUSH_TO_QUEEN_CORNERS[queen_corner_view(loser_ksq, sq)];
    }

    result += Value::new(bonus);
    result
}

/// KR vs KN. The rook side gains by pushing the defending king to the edge and away from
/// its knight.
pub(super) fn evaluate_krkn(position: &Position, strong: Color) -> Value {
    let weak = !strong;
    debug_assert!(verify_material(position, strong, Value::ROOK_MG, 0));
    debug_assert!(verify_material(position, weak, Value::KNIGHT_MG, 0));

    let loser_ksq = position.king_square(weak);
    let knight_sq = position.square_of(weak, PieceKind::Knight);

    Value::new(PUSH_TO_EDGES[loser_ksq] + push_away(loser_ksq, knight_sq))
}
