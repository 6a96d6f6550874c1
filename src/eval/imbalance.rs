use crate::position::Position;
use crate::types::{Color, PieceKind, Value};

// Polynomial material imbalance parameters, indexed by
// [queen pair, pawn, queen, bishop, knight, rook].

#[rustfmt::skip]
const QUADRATIC_OURS: [[i32; 6]; 6] = [
    //             OUR PIECES
    // q-pair pawn queen bishop knight rook
    [1000,    0,    0,    0,    0,    0], // Queen pair
    [  40,    0,    0,    0,    0,    0], // Pawn
    [   0,   69,   -1,    0,    0,    0], // Queen
    [   0,  104,   33, -105,    0,    0], // Bishop
    [  32,  255,    2,    4,   -3,    0], // Knight      OUR PIECES
    [ -26,   -2,   52,  110,   47, -150], // Rook
];

#[rustfmt::skip]
const QUADRATIC_THEIRS: [[i32; 6]; 6] = [
    //           THEIR PIECES
    // q-pair pawn queen bishop knight rook
    [   0,    0,    0,    0,    0,    0], // Queen pair
    [  36,    0,    0,    0,    0,    0], // Pawn
    [  40,   50,    0,    0,    0,    0], // Queen
    [  59,   65,   25,    0,    0,    0], // Bishop
    [   9,   63,    7,   42,    0,    0], // Knight      OUR PIECES
    [  46,   39,   -8,  -24,  240,    0], // Rook
];

/// Piece counts of one color, as seen by the imbalance polynomial.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PieceCounts {
    /// Two or more mets. Derived from the counts so that it is a function of the material key.
    pub queen_pair: bool,
    pub pawns: u8,
    pub queens: u8,
    pub bishops: u8,
    pub knights: u8,
    pub rooks: u8,
}

impl PieceCounts {
    pub fn new(pawns: u8, queens: u8, bishops: u8, knights: u8, rooks: u8) -> Self {
        Self {
            queen_pair: queens >= 2,
            pawns,
            queens,
            bishops,
            knights,
            rooks,
        }
    }

    pub fn of(position: &Position, color: Color) -> Self {
        let count = |kind| position.count(color, kind) as u8;
        Self::new(
            count(PieceKind::Pawn),
            count(PieceKind::Queen),
            count(PieceKind::Bishop),
            count(PieceKind::Knight),
            count(PieceKind::Rook),
        )
    }

    fn as_array(&self) -> [i32; 6] {
        [
            self.queen_pair as i32,
            self.pawns as i32,
            self.queens as i32,
            self.bishops as i32,
            self.knights as i32,
            self.rooks as i32,
        ]
    }
}

/// Second-degree polynomial bonus of `us` given the opponent's pieces.
fn bonus(us: &PieceCounts, them: &PieceCounts) -> i32 {
    let us = us.as_array();
    let them = them.as_array();

    (0..6)
        .filter(|&pt1| us[pt1] != 0)
        .map(|pt1| {
            let v: i32 = (0..=pt1)
                .map(|pt2| QUADRATIC_OURS[pt1][pt2] * us[pt2] + QUADRATIC_THEIRS[pt1][pt2] * them[pt2])
                .sum();
            us[pt1] * v
        })
        .sum()
}

/// Material imbalance from white's point of view.
pub fn imbalance(white: &PieceCounts, black: &PieceCounts) -> Value {
    let diff = (bonus(white, black) - bonus(black, white)) / 16;
    // Counts below MAX_PIECE_COUNT keep the result within about 9100 of zero
    debug_assert!(i16::try_from(diff).is_ok(), "imbalance {diff} out of range");
    Value::new(diff.clamp(i16::MIN as i32 + 1, i16::MAX as i32) as i16)
}
