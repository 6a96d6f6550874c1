use std::num::ParseIntError;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::tables::{Tables, MAX_PIECE_COUNT};
use crate::types::{Color, File, Piece, PieceFromCharError, PieceKind, Rank, Square};
use crate::zobrist::MaterialKey;

use super::pieces::Pieces;
use super::Position;

pub const STARTING_FEN: &str = "rnsmksnr/8/pppppppp/8/8/PPPPPPPP/8/RNSKMSNR w - - 0 1";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseFenError {
    #[error("incorrect number of FEN fields: expected 2 to 6, got {0}")]
    IncorrectFieldCount(usize),
    #[error("incorrect number of ranks in FEN string: expected 8, got {0}")]
    IncorrectRankCount(usize),
    #[error("too many files in rank '{0}'")]
    TooManyFiles(String),
    #[error("too few files in rank '{0}'")]
    TooFewFiles(String),
    #[error("{0}")]
    InvalidPiece(#[from] PieceFromCharError),
    #[error("each player must have exactly one king")]
    IncorrectKingCount,
    #[error("too many pieces of kind '{0}'")]
    TooManyPieces(Piece),
    #[error("invalid player color '{0}'")]
    InvalidColor(String),
    #[error("unexpected castling or en passant field '{0}', expected '-'")]
    UnexpectedField(String),
    #[error("invalid ply clock: {0}")]
    InvalidPlyClock(ParseIntError),
    #[error("invalid move number: {0}")]
    InvalidMoveNumber(ParseIntError),
}

impl FromStr for Position {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl Position {
    /// Creates a position from a FEN string.
    ///
    /// Only the placement and the side to move are required. Makruk has neither castling nor
    /// en passant, so those fields must be `-` when present. Clocks are validated and ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ParseFenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(2..=6).contains(&fields.len()) {
            return Err(ParseFenError::IncorrectFieldCount(fields.len()));
        }

        // Piece placement
        let mut pieces = Pieces::new();
        let ranks: Vec<&str> = fields[0].split('/').rev().collect();
        if ranks.len() != 8 {
            return Err(ParseFenError::IncorrectRankCount(ranks.len()));
        }
        for (rank, rank_str) in Rank::iter().zip(ranks) {
            let mut f = 0;
            for ch in rank_str.chars() {
                let file = File::from_repr(f)
                    .ok_or_else(|| ParseFenError::TooManyFiles(rank_str.to_string()))?;
                if let Some(n) = ch.to_digit(10) {
                    f += n as u8;
                } else {
                    let sq = Square::from_rank_file(rank, file);
                    pieces.set_sq(sq, Piece::try_from(ch)?);
                    f += 1;
                }
            }
            if f > 8 {
                return Err(ParseFenError::TooManyFiles(rank_str.to_string()));
            } else if f < 8 {
                return Err(ParseFenError::TooFewFiles(rank_str.to_string()));
            }
        }
        if pieces.get_bb(Piece(PieceKind::King, Color::White)).len() != 1
            || pieces.get_bb(Piece(PieceKind::King, Color::Black)).len() != 1
        {
            return Err(ParseFenError::IncorrectKingCount);
        }
        if let Some(pce) = Piece::iter().find(|&pce| pieces.get_bb(pce).len() >= MAX_PIECE_COUNT) {
            return Err(ParseFenError::TooManyPieces(pce));
        }

        // Player to move
        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseFenError::InvalidColor(other.to_string())),
        };

        // Castling rights and en passant square
        if let Some(&field) = fields.iter().skip(2).take(2).find(|&&field| field != "-") {
            return Err(ParseFenError::UnexpectedField(field.to_string()));
        }

        // Ply clock and move number
        if let Some(ply_clock) = fields.get(4) {
            ply_clock
                .parse::<u16>()
                .map_err(ParseFenError::InvalidPlyClock)?;
        }
        if let Some(move_number) = fields.get(5) {
            move_number
                .parse::<u32>()
                .map_err(ParseFenError::InvalidMoveNumber)?;
        }

        Ok(Position::from_parts(pieces, side_to_move, Tables::get()))
    }

    pub(super) fn from_parts(pieces: Pieces, side_to_move: Color, tables: &'static Tables) -> Self {
        Position {
            material_key: MaterialKey::from_counts(&pieces.counts()),
            pieces,
            side_to_move,
            tables,
        }
    }
}
