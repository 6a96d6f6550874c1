use crate::types::{Color, Piece, PieceKind, Square, Value};

use super::{ParseFenError, Position, STARTING_FEN};

#[test]
fn pieces_placed_correctly_in_starting_pos_fen() {
    let position = Position::from_fen(STARTING_FEN).unwrap();

    use Color::*;
    use PieceKind::*;
    assert_eq!(position.piece_at(Square::A1), Some(Piece(Rook, White)));
    assert_eq!(position.piece_at(Square::C1), Some(Piece(Bishop, White)));
    assert_eq!(position.piece_at(Square::D1), Some(Piece(King, White)));
    assert_eq!(position.piece_at(Square::E1), Some(Piece(Queen, White)));
    assert_eq!(position.piece_at(Square::E6), Some(Piece(Pawn, Black)));
    assert_eq!(position.piece_at(Square::D8), Some(Piece(Queen, Black)));
    assert_eq!(position.piece_at(Square::E8), Some(Piece(King, Black)));
    assert_eq!(position.piece_at(Square::B8), Some(Piece(Knight, Black)));
    assert_eq!(position.count(White, Pawn), 8);
    assert_eq!(position.count(Black, Bishop), 2);
}

#[test]
fn color_parsed_correctly_from_fen() {
    let position = Position::from_fen(STARTING_FEN).unwrap();
    assert_eq!(position.side_to_move(), Color::White);

    let position = Position::from_fen("4k3/8/8/8/8/8/8/3K4 b").unwrap();
    assert_eq!(position.side_to_move(), Color::Black);
}

#[test]
fn short_fen_is_accepted() {
    let short = Position::from_fen("4k3/8/8/8/8/8/8/3KR3 w").unwrap();
    let long = Position::from_fen("4k3/8/8/8/8/8/8/3KR3 w - - 0 1").unwrap();
    assert_eq!(short, long);
}

#[test]
fn invalid_fens_are_rejected() {
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/3K4"),
        Err(ParseFenError::IncorrectFieldCount(1))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/3K4 w"),
        Err(ParseFenError::IncorrectRankCount(7))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/3K5 w"),
        Err(ParseFenError::TooManyFiles("3K5".to_string()))
    );
    let long_rank = "9".repeat(40);
    assert_eq!(
        Position::from_fen(&format!("{long_rank}/8/8/8/8/8/8/3K4 w")),
        Err(ParseFenError::TooManyFiles(long_rank))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/3K3 w"),
        Err(ParseFenError::TooFewFiles("3K3".to_string()))
    );
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/3KQ3 w"),
        Err(ParseFenError::InvalidPiece(_))
    ));
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/3K4 w"),
        Err(ParseFenError::IncorrectKingCount)
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/3K4 x"),
        Err(ParseFenError::InvalidColor("x".to_string()))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/3K4 w KQkq - 0 1"),
        Err(ParseFenError::UnexpectedField("KQkq".to_string()))
    );
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/3K4 w - - x 1"),
        Err(ParseFenError::InvalidPlyClock(_))
    ));
}

#[test]
fn non_pawn_material_uses_midgame_values() {
    let position = Position::from_fen("4k3/8/8/pp6/8/8/8/RNSMK3 w").unwrap();

    let expected = Value::ROOK_MG + Value::KNIGHT_MG + Value::BISHOP_MG + Value::QUEEN_MG;
    assert_eq!(position.non_pawn_material(Color::White), expected);
    assert_eq!(position.non_pawn_material(Color::Black), Value::ZERO);
}

#[test]
fn material_key_ignores_placement_and_side_to_move() {
    let a = Position::from_fen("4k3/8/8/8/8/8/8/RN1K4 w").unwrap();
    let b = Position::from_fen("8/2k5/8/3N4/8/1R6/8/7K b").unwrap();
    let c = Position::from_fen("4k3/8/8/8/8/8/8/RS1K4 w").unwrap();

    assert_eq!(a.material_key(), b.material_key());
    assert_ne!(a.material_key(), c.material_key());
}

#[test]
fn mirrored_swaps_colors_and_ranks() {
    let position = Position::from_fen("4k3/8/3p4/8/8/8/1S6/R2K4 w").unwrap();
    let mirrored = position.mirrored();

    use Color::*;
    use PieceKind::*;
    assert_eq!(mirrored.side_to_move(), Black);
    assert_eq!(mirrored.piece_at(Square::A8), Some(Piece(Rook, Black)));
    assert_eq!(mirrored.piece_at(Square::B7), Some(Piece(Bishop, Black)));
    assert_eq!(mirrored.piece_at(Square::D3), Some(Piece(Pawn, White)));
    assert_eq!(mirrored.king_square(White), Square::E1);
    assert_ne!(mirrored.material_key(), position.material_key());
    assert_eq!(mirrored.mirrored(), position);
}

#[test]
fn attacks_by_combines_every_piece() {
    let position = Position::from_fen("7k/8/8/8/8/8/8/K1M5 w").unwrap();
    let attacks = position.attacks_by(Color::White, position.occupied());

    use Square::*;
    assert!(attacks.contains(B2));
    assert!(attacks.contains(D2));
    assert!(attacks.contains(A2));
    assert!(!attacks.contains(C2));
}
