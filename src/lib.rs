pub mod eval;
pub mod move_gen;
mod position;
mod square_map;
mod tables;
pub mod types;
pub mod zobrist;

pub use position::{ParseFenError, Position, STARTING_FEN};
