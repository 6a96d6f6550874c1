//! Structural material patterns, tried when no exact signature is registered.

use log::trace;
use strum::IntoEnumIterator;

use crate::position::Position;
use crate::types::{Color, PieceKind, Value};

use super::endgame::{
    Endgame, EVALUATE_KQSPSK, EVALUATE_KXK, EVALUATE_KXKB, EVALUATE_KXKN, EVALUATE_KXKP,
    EVALUATE_KXKQ, EVALUATE_KXKR,
};

/// Non-pawn material lead needed to treat a position as won.
const WINNING_LEAD: Value = Value::new(Value::BISHOP_EG.get() + Value::QUEEN_EG.get());

type Predicate = fn(&Position, Color) -> bool;

/// Patterns in order of precedence.
const PATTERNS: [(Predicate, [Endgame; 2]); 7] = [
    (is_kxk, EVALUATE_KXK),
    (is_kqspsk, EVALUATE_KQSPSK),
    (is_kxkp, EVALUATE_KXKP),
    (is_kxkq, EVALUATE_KXKQ),
    (is_kxkb, EVALUATE_KXKB),
    (is_kxkn, EVALUATE_KXKN),
    (is_kxkr, EVALUATE_KXKR),
];

/// Finds the first pattern matching `position`, trying white before black within each one.
pub fn classify(position: &Position) -> Option<Endgame> {
    let endgame = PATTERNS.iter().find_map(|(matches, endgames)| {
        Color::iter()
            .find(|&us| matches(position, us))
            .map(|us| endgames[us.index()])
    });
    if let Some(endgame) = endgame {
        trace!("Classified {:?} as {:?}", position.material_key(), endgame);
    }
    endgame
}

#[inline]
fn lead(position: &Position, us: Color) -> Value {
    position.non_pawn_material(us) - position.non_pawn_material(!us)
}

/// Bare king against enough material to win.
pub fn is_kxk(position: &Position, us: Color) -> bool {
    !position.occupied_by(!us).more_than_one()
        && position.non_pawn_material(us) >= WINNING_LEAD
}

/// Bare king against mets and pawns only.
pub fn is_kqspsk(position: &Position, us: Color) -> bool {
    !position.occupied_by(!us).more_than_one()
        && (position.count(us, PieceKind::Queen) > 0 || position.count(us, PieceKind::Pawn) > 0)
        && position.count(us, PieceKind::Rook) == 0
        && position.count(us, PieceKind::Bishop) == 0
        && position.count(us, PieceKind::Knight) == 0
}

/// Winning lead without pawns against a single pawn.
pub fn is_kxkp(position: &Position, us: Color) -> bool {
    position.count(us, PieceKind::Pawn) == 0
        && position.count(!us, PieceKind::Pawn) == 1
        && lead(position, us) >= WINNING_LEAD
}

/// Winning lead without pawns against a single piece of `kind`, besides any pawns.
fn is_kx_vs(position: &Position, us: Color, kind: PieceKind) -> bool {
    position.count(us, PieceKind::Pawn) == 0
        && position.non_pawn_material(!us) == kind.value_mg()
        && position.count(!us, kind) == 1
        && lead(position, us) >= WINNING_LEAD
}

pub fn is_kxkq(position: &Position, us: Color) -> bool {
    is_kx_vs(position, us, PieceKind::Queen)
}

pub fn is_kxkb(position: &Position, us: Color) -> bool {
    is_kx_vs(position, us, PieceKind::Bishop)
}

pub fn is_kxkn(position: &Position, us: Color) -> bool {
    is_kx_vs(position, us, PieceKind::Knight)
}

pub fn is_kxkr(position: &Position, us: Color) -> bool {
    is_kx_vs(position, us, PieceKind::Rook)
}
