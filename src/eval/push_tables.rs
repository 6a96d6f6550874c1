//! Heuristic tables used by the endgame evaluators to drive kings around the board.

use crate::square_map::SquareMap;
use crate::types::{File, Rank, Square};

/// Drives the king towards any edge of the board.
#[rustfmt::skip]
pub const PUSH_TO_EDGES: SquareMap<i16> = SquareMap::new([
    100, 90, 80, 70, 70, 80, 90, 100,
     90, 70, 60, 50, 50, 60, 70,  90,
     80, 60, 40, 30, 30, 40, 60,  80,
     70, 50, 30, 20, 20, 30, 50,  70,
     70, 50, 30, 20, 20, 30, 50,  70,
     80, 60, 40, 30, 30, 40, 60,  80,
     90, 70, 60, 50, 50, 60, 70,  90,
    100, 90, 80, 70, 70, 80, 90, 100,
]);

/// Drives the king towards the far side of the board, seen from the attacking side.
#[rustfmt::skip]
pub const PUSH_TO_OPPOSING_SIDE_EDGES: SquareMap<i16> = SquareMap::new([
     30,  5,  3,  0,  0,  3,  5,  30,
     40, 20,  5,  0,  0,  5, 20,  40,
     50, 30, 10,  3,  3, 10, 30,  50,
     60, 40, 20,  7,  7, 20, 40,  60,
     70, 50, 30, 20, 20, 30, 50,  70,
     80, 60, 40, 30, 30, 40, 60,  80,
     90, 70, 60, 50, 50, 60, 70,  90,
    100, 90, 80, 70, 70, 80, 90, 100,
]);

/// Drives the king towards a1 or h8, the dark corners. Index with a flipped square when the
/// attacking met stands on a light square.
#[rustfmt::skip]
pub const PUSH_TO_QUEEN_CORNERS: SquareMap<i16> = SquareMap::new([
    100, 90, 80, 70, 50, 30,  0,   0,
     90, 70, 60, 50, 30, 10,  0,   0,
     80, 60, 40, 30, 10,  0, 10,  30,
     70, 50, 30, 10,  0, 10, 30,  50,
     50, 30, 10,  0, 10, 30, 50,  70,
     30, 10,  0, 10, 30, 40, 60,  80,
      0,  0, 10, 30, 50, 60, 70,  90,
      0,  0, 30, 50, 70, 80, 90, 100,
]);

/// Indexed by king distance, rewards pieces that stay close.
pub const PUSH_CLOSE: [i16; 8] = [0, 0, 100, 80, 60, 40, 20, 10];
/// Indexed by king distance, rewards pieces that get away.
pub const PUSH_AWAY: [i16; 8] = [0, 5, 20, 40, 60, 80, 90, 100];
/// Indexed by the distance between an attacking piece and the defending king.
pub const PUSH_WIN: [i16; 8] = [0, 120, 100, 80, 60, 40, 20, 10];

#[inline]
pub fn push_close(a: Square, b: Square) -> i16 {
    PUSH_CLOSE[a.distance(b) as usize]
}

#[inline]
pub fn push_away(a: Square, b: Square) -> i16 {
    PUSH_AWAY[a.distance(b) as usize]
}

#[inline]
pub fn push_win(a: Square, b: Square) -> i16 {
    PUSH_WIN[a.distance(b) as usize]
}

/// The corner whose 3x3 region contains `sq`, if any.
pub fn king_corner(sq: Square) -> Option<Square> {
    let rank = match sq.rank() {
        Rank::First | Rank::Second | Rank::Third => Rank::First,
        Rank::Sixth | Rank::Seventh | Rank::Eighth => Rank::Eighth,
        _ => return None,
    };
    let file = match sq.file() {
        File::A | File::B | File::C => File::A,
        File::F | File::G | File::H => File::H,
        _ => return None,
    };
    Some(Square::from_rank_file(rank, file))
}
