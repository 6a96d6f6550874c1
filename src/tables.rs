use itertools::Itertools;
use lazy_static::lazy_static;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::square_map::SquareMap;
use crate::types::{Bitboard, BoardVector, Color, Piece, PieceKind, Square};

/// Upper bound (exclusive) on the number of pieces of one kind and color a material key can
/// distinguish.
pub const MAX_PIECE_COUNT: usize = 16;

lazy_static! {
    static ref TABLES: Tables = Tables::init();
}

pub struct Tables {
    pub king_attacks: SquareMap<Bitboard>,
    pub knight_attacks: SquareMap<Bitboard>,
    /// The met moves one step diagonally.
    pub queen_attacks: SquareMap<Bitboard>,
    /// The khon moves one step diagonally or one step forward, indexed by color.
    pub bishop_attacks: [SquareMap<Bitboard>; 2],
    /// Pawn captures, indexed by color.
    pub pawn_attacks: [SquareMap<Bitboard>; 2],
    pub zobrist_randoms: ZobristRandoms,
}

impl Tables {
    pub fn get() -> &'static Self {
        &TABLES
    }

    fn init() -> Self {
        debug!("Initializing attack and zobrist tables");
        Self {
            king_attacks: Self::init_king_attacks(),
            knight_attacks: Self::init_knight_attacks(),
            queen_attacks: Self::init_queen_attacks(),
            bishop_attacks: [
                Self::init_bishop_attacks(Color::White),
                Self::init_bishop_attacks(Color::Black),
            ],
            pawn_attacks: [
                Self::init_pawn_attacks(Color::White),
                Self::init_pawn_attacks(Color::Black),
            ],
            zobrist_randoms: ZobristRandoms::init(),
        }
    }

    const DIAGONALS: [BoardVector; 4] = [
        BoardVector::NORTH_EAST,
        BoardVector::SOUTH_EAST,
        BoardVector::SOUTH_WEST,
        BoardVector::NORTH_WEST,
    ];

    fn init_king_attacks() -> SquareMap<Bitboard> {
        let move_vecs = [
            BoardVector::NORTH,
            BoardVector::NORTH_EAST,
            BoardVector::EAST,
            BoardVector::SOUTH_EAST,
            BoardVector::SOUTH,
            BoardVector::SOUTH_WEST,
            BoardVector::WEST,
            BoardVector::NORTH_WEST,
        ];
        Self::init_step_attacks(&move_vecs)
    }

    fn init_knight_attacks() -> SquareMap<Bitboard> {
        let move_vecs = [
            BoardVector::NORTH + BoardVector::NORTH_WEST,
            BoardVector::NORTH + BoardVector::NORTH_EAST,
            BoardVector::EAST + BoardVector::NORTH_EAST,
            BoardVector::EAST + BoardVector::SOUTH_EAST,
            BoardVector::SOUTH + BoardVector::SOUTH_EAST,
            BoardVector::SOUTH + BoardVector::SOUTH_WEST,
            BoardVector::WEST + BoardVector::SOUTH_WEST,
            BoardVector::WEST + BoardVector::NORTH_WEST,
        ];
        Self::init_step_attacks(&move_vecs)
    }

    fn init_queen_attacks() -> SquareMap<Bitboard> {
        Self::init_step_attacks(&Self::DIAGONALS)
    }

    fn init_bishop_attacks(color: Color) -> SquareMap<Bitboard> {
        let mut move_vecs = Self::DIAGONALS.to_vec();
        move_vecs.push(BoardVector::up(color));
        Self::init_step_attacks(&move_vecs)
    }

    fn init_pawn_attacks(color: Color) -> SquareMap<Bitboard> {
        let up = BoardVector::up(color);
        Self::init_step_attacks(&[up + BoardVector::EAST, up + BoardVector::WEST])
    }

    fn init_step_attacks(move_vecs: &[BoardVector]) -> SquareMap<Bitboard> {
        SquareMap::from_fn(|sq| {
            move_vecs
                .iter()
                .filter_map(|&vec| sq.add_checked(vec))
                .collect()
        })
    }

    /// Squares attacked by `pce` standing on `sq`, with `occ` blocking the rook.
    pub fn gen_attacks_from_sq(&self, occ: Bitboard, pce: Piece, sq: Square) -> Bitboard {
        let color = pce.color().index();
        match pce.kind() {
            PieceKind::Pawn => self.pawn_attacks[color][sq],
            PieceKind::Queen => self.queen_attacks[sq],
            PieceKind::Bishop => self.bishop_attacks[color][sq],
            PieceKind::Knight => self.knight_attacks[sq],
            PieceKind::Rook => gen_rook_attacks_slow(sq, occ),
            PieceKind::King => self.king_attacks[sq],
        }
    }

    /// Union of the attacks of every `pce` in `pce_bb`.
    pub fn gen_attacks(&self, pce_bb: Bitboard, occ: Bitboard, pce: Piece) -> Bitboard {
        pce_bb.into_iter().fold(Bitboard::new(), |atks, sq| {
            atks | self.gen_attacks_from_sq(occ, pce, sq)
        })
    }
}

/// Random numbers for material keys, one per piece and count.
pub struct ZobristRandoms {
    pub material: [[u64; MAX_PIECE_COUNT]; 12],
}

impl ZobristRandoms {
    fn init() -> Self {
        let mut rng = ChaCha20Rng::from_seed([25; 32]);
        Self {
            material: rng.gen(),
        }
    }
}

fn gen_rook_attacks_slow(sq: Square, occ: Bitboard) -> Bitboard {
    let sq_not_occ = |sq: &Square| !occ.contains(*sq);

    let rank = sq.rank();
    let file = sq.file();
    let north = rank
        .iter_after()
        .map(|r| Square::from_rank_file(r, file))
        .take_while_inclusive(sq_not_occ);
    let east = file
        .iter_after()
        .map(|f| Square::from_rank_file(rank, f))
        .take_while_inclusive(sq_not_occ);
    let south = rank
        .iter_before()
        .map(|r| Square::from_rank_file(r, file))
        .take_while_inclusive(sq_not_occ);
    let west = file
        .iter_before()
        .map(|f| Square::from_rank_file(rank, f))
        .take_while_inclusive(sq_not_occ);

    north.chain(east).chain(south).chain(west).collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::bb;
    use crate::types::{Color, Piece, PieceKind, Square};

    use super::{gen_rook_attacks_slow, Tables};

    #[test]
    fn king_and_knight_attacks_initialized_correctly() {
        let tables = Tables::get();

        use Square::*;
        assert_eq!(tables.king_attacks[A1], bb!(A2, B2, B1));
        assert_eq!(tables.knight_attacks[A1], bb!(B3, C2));
        assert_eq!(tables.knight_attacks[D4].len(), 8);
    }

    #[test]
    fn queen_attacks_are_single_diagonal_steps() {
        let tables = Tables::get();

        use Square::*;
        assert_eq!(tables.queen_attacks[D4], bb!(C3, E3, C5, E5));
        assert_eq!(tables.queen_attacks[H8], bb!(G7));
    }

    #[test]
    fn bishop_attacks_include_forward_step() {
        let tables = Tables::get();

        use Square::*;
        assert_eq!(
            tables.bishop_attacks[Color::White.index()][D4],
            bb!(C3, E3, C5, E5, D5)
        );
        assert_eq!(
            tables.bishop_attacks[Color::Black.index()][D4],
            bb!(C3, E3, C5, E5, D3)
        );
    }

    #[test]
    fn pawn_attacks_point_forward() {
        let tables = Tables::get();

        use Square::*;
        assert_eq!(tables.pawn_attacks[Color::White.index()][B3], bb!(A4, C4));
        assert_eq!(tables.pawn_attacks[Color::Black.index()][B6], bb!(A5, C5));
        assert_eq!(tables.pawn_attacks[Color::White.index()][H3], bb!(G4));
    }

    #[test]
    fn rook_attacks_stop_at_blockers() {
        use Square::*;
        assert_eq!(
            gen_rook_attacks_slow(D4, bb!(D6, F4)),
            bb!(D5, D6, E4, F4, D3, D2, D1, C4, B4, A4)
        );
        let tables = Tables::get();
        assert_eq!(
            tables.gen_attacks_from_sq(bb!(), Piece(PieceKind::Rook, Color::White), A1).len(),
            14
        );
    }

    #[test]
    fn all_material_randoms_different() {
        let tables = Tables::get();
        let randoms = tables.zobrist_randoms.material.iter().flatten();
        assert_eq!(randoms.duplicates().count(), 0);
    }
}
