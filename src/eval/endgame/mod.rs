//! Specialized evaluation of endgames with known material.
//!
//! Every evaluator is bound to a strong side and returns a score from that side's point of
//! view. [`crate::eval::Entry::evaluate`] turns it into a score for the side to move.

use std::fmt::{self, Debug, Formatter};

use crate::position::Position;
use crate::types::{Color, PieceKind, ScaleFactor, Square, Value};

mod bare_king;
mod queen_mates;
mod registry;
mod single_piece;

pub use registry::{Endgames, ParseSignatureError};

/// The material patterns with a specialized evaluator.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EndgameKind {
    /// Plenty of material against a bare king.
    KXK,
    /// Only mets and pawns against a bare king.
    KQsPsK,
    /// Large material edge against a single pawn.
    KXKP,
    /// Large material edge against a single met.
    KXKQ,
    /// Large material edge against a single khon.
    KXKB,
    /// Large material edge against a single knight.
    KXKN,
    /// Large material edge against a single rook.
    KXKR,
    /// Khon and met against a bare king.
    KBQK,
    /// Knight and met against a bare king.
    KNQK,
    /// Rook against knight.
    KRKN,
    /// Material that can never win, e.g. a knight against a bare king.
    TrivialDraw,
}

/// An evaluator bound to the side that has the winning chances.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Endgame {
    kind: EndgameKind,
    strong_side: Color,
}

impl Endgame {
    pub const fn new(kind: EndgameKind, strong_side: Color) -> Self {
        Self { kind, strong_side }
    }

    #[inline]
    pub fn kind(&self) -> EndgameKind {
        self.kind
    }

    #[inline]
    pub fn strong_side(&self) -> Color {
        self.strong_side
    }

    #[inline]
    pub fn weak_side(&self) -> Color {
        !self.strong_side
    }

    /// Evaluates `position` from the strong side's point of view.
    pub fn evaluate(&self, position: &Position) -> Value {
        let strong = self.strong_side;
        match self.kind {
            EndgameKind::KXK => bare_king::evaluate_kxk(position, strong),
            EndgameKind::KQsPsK => bare_king::evaluate_kqspsk(position, strong),
            EndgameKind::KXKP => single_piece::evaluate_kx_vs(position, strong, PieceKind::Pawn),
            EndgameKind::KXKQ => single_piece::evaluate_kx_vs(position, strong, PieceKind::Queen),
            EndgameKind::KXKB => single_piece::evaluate_kx_vs(position, strong, PieceKind::Bishop),
            EndgameKind::KXKN => single_piece::evaluate_kx_vs(position, strong, PieceKind::Knight),
            EndgameKind::KXKR => single_piece::evaluate_kx_vs(position, strong, PieceKind::Rook),
            EndgameKind::KBQK => queen_mates::evaluate_kbqk(position, strong),
            EndgameKind::KNQK => queen_mates::evaluate_knqk(position, strong),
            EndgameKind::KRKN => single_piece::evaluate_krkn(position, strong),
            EndgameKind::TrivialDraw => Value::DRAW,
        }
    }
}

const fn both_sides(kind: EndgameKind) -> [Endgame; 2] {
    [
        Endgame::new(kind, Color::White),
        Endgame::new(kind, Color::Black),
    ]
}

// These match more than one material key, so they are picked by the classifier instead of
// being looked up in the registry.
pub const EVALUATE_KXK: [Endgame; 2] = both_sides(EndgameKind::KXK);
pub const EVALUATE_KQSPSK: [Endgame; 2] = both_sides(EndgameKind::KQsPsK);
pub const EVALUATE_KXKP: [Endgame; 2] = both_sides(EndgameKind::KXKP);
pub const EVALUATE_KXKQ: [Endgame; 2] = both_sides(EndgameKind::KXKQ);
pub const EVALUATE_KXKB: [Endgame; 2] = both_sides(EndgameKind::KXKB);
pub const EVALUATE_KXKN: [Endgame; 2] = both_sides(EndgameKind::KXKN);
pub const EVALUATE_KXKR: [Endgame; 2] = both_sides(EndgameKind::KXKR);

/// A scaling function. Given the position and the strong side it returns the factor to apply
/// to the strong side's endgame score, or [`ScaleFactor::NONE`] to fall back to the default.
pub type ScaleFn = fn(&Position, Color) -> ScaleFactor;

/// A scaling function bound to a strong side.
#[derive(Clone, Copy)]
pub struct ScaleEndgame {
    func: ScaleFn,
    strong_side: Color,
}

impl ScaleEndgame {
    pub fn new(func: ScaleFn, strong_side: Color) -> Self {
        Self { func, strong_side }
    }

    #[inline]
    pub fn strong_side(&self) -> Color {
        self.strong_side
    }

    #[inline]
    pub fn scale(&self, position: &Position) -> ScaleFactor {
        (self.func)(position, self.strong_side)
    }
}

impl Debug for ScaleEndgame {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ScaleEndgame")
            .field("strong_side", &self.strong_side)
            .finish_non_exhaustive()
    }
}

fn verify_material(position: &Position, color: Color, npm: Value, pawns: usize) -> bool {
    position.non_pawn_material(color) == npm && position.count(color, PieceKind::Pawn) == pawns
}

/// The piece of `kind` owned by `color` closest to `target`, lowest square on ties.
fn nearest(position: &Position, color: Color, kind: PieceKind, target: Square) -> Option<Square> {
    position
        .pieces_of(color, kind)
        .into_iter()
        .min_by_key(|sq| sq.distance(target))
}

/// Orients `sq` for [`super::push_tables::PUSH_TO_QUEEN_CORNERS`], whose target corners are
/// dark, given the square of the met that has to cover the mating corner.
#[inline]
fn queen_corner_view(sq: Square, queen_sq: Square) -> Square {
    if queen_sq.is_dark() {
        sq
    } else {
        sq.flip_rank()
    }
}
