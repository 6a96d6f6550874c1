use itertools::{iproduct, Itertools};

use super::{MaterialKey, ZobristKey};
use crate::tables::{Tables, MAX_PIECE_COUNT};
use crate::types::Piece;

#[test]
fn all_zobrist_keys_different() {
    let tables = Tables::get();

    let z_keys = iproduct!(Piece::iter(), 0..MAX_PIECE_COUNT).map(|key| key.key(tables));

    assert_eq!(z_keys.duplicates().count(), 0);
}

#[test]
fn empty_counts_give_zero_key() {
    assert_eq!(MaterialKey::from_counts(&[[0; 6]; 2]).get(), 0);
}

#[test]
fn key_depends_on_counts_only() {
    let mut counts = [[0; 6]; 2];
    counts[0][5] = 1;
    counts[1][5] = 1;
    let kings = MaterialKey::from_counts(&counts);

    counts[0][4] = 2;
    let two_rooks = MaterialKey::from_counts(&counts);

    counts[0][4] = 1;
    let one_rook = MaterialKey::from_counts(&counts);

    assert_ne!(kings, one_rook);
    assert_ne!(one_rook, two_rooks);
    assert_eq!(one_rook, MaterialKey::from_counts(&counts));
}
