use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Maximum search depth in plies, used to bound mate scores.
pub const MAX_PLY: i16 = 246;

/// A score in internal units, always from some side's point of view.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Value(i16);

impl Value {
    pub const ZERO: Self = Self(0);
    pub const DRAW: Self = Self(0);
    pub const KNOWN_WIN: Self = Self(10000);
    pub const MATE: Self = Self(32000);
    pub const MATE_IN_MAX_PLY: Self = Self(Self::MATE.0 - 2 * MAX_PLY);

    pub const PAWN_MG: Self = Self(128);
    pub const PAWN_EG: Self = Self(213);
    pub const QUEEN_MG: Self = Self(420);
    pub const QUEEN_EG: Self = Self(455);
    pub const BISHOP_MG: Self = Self(630);
    pub const BISHOP_EG: Self = Self(725);
    pub const KNIGHT_MG: Self = Self(781);
    pub const KNIGHT_EG: Self = Self(854);
    pub const ROOK_MG: Self = Self(1276);
    pub const ROOK_EG: Self = Self(1380);

    /// Non-pawn material at or above which the game phase is pure middlegame.
    pub const MIDGAME_LIMIT: Self = Self(10650);
    /// Non-pawn material at or below which the game phase is pure endgame.
    pub const ENDGAME_LIMIT: Self = Self(2730);

    #[inline]
    pub const fn new(v: i16) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> i16 {
        self.0
    }
}

impl Neg for Value {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0).max(i16::MIN + 1))
    }
}

impl AddAssign for Value {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0).max(i16::MIN + 1))
    }
}

impl SubAssign for Value {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<i16> for Value {
    type Output = Self;

    fn mul(self, rhs: i16) -> Self::Output {
        Self(self.0.saturating_mul(rhs).max(i16::MIN + 1))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self(v)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Value({})", self.0)
    }
}

/// Multiplier applied to the endgame part of an evaluation, [`ScaleFactor::NORMAL`] meaning 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ScaleFactor(u8);

impl ScaleFactor {
    pub const DRAW: Self = Self(0);
    pub const NORMAL: Self = Self(64);
    pub const MAX: Self = Self(128);
    /// Returned by scaling functions that have no opinion about the position.
    pub const NONE: Self = Self(255);

    #[inline]
    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Game phase in [`Phase::ENDGAME`; `Phase::MIDGAME`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Phase(u8);

impl Phase {
    pub const ENDGAME: Self = Self(0);
    pub const MIDGAME: Self = Self(128);

    #[inline]
    pub const fn new(v: u8) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}
