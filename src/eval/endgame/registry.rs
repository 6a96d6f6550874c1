use intmap::IntMap;
use lazy_static::lazy_static;
use log::{debug, info};
use strum::IntoEnumIterator;

use crate::tables::MAX_PIECE_COUNT;
use crate::types::{Color, PieceFromCharError, PieceKind};
use crate::zobrist::MaterialKey;

use super::{Endgame, EndgameKind, ScaleEndgame, ScaleFn};

lazy_static! {
    static ref ENDGAMES: Endgames = Endgames::new();
}

/// Signatures with a built-in evaluator. Letters are those of the FEN notation: M is the met
/// and S the khon.
const BUILT_IN: [(&str, EndgameKind); 17] = [
    ("KNNK", EndgameKind::TrivialDraw),
    ("KNK", EndgameKind::TrivialDraw),
    ("KSK", EndgameKind::TrivialDraw),
    ("KMMK", EndgameKind::TrivialDraw),
    ("KMPK", EndgameKind::TrivialDraw),
    ("KPPK", EndgameKind::TrivialDraw),
    ("KMK", EndgameKind::TrivialDraw),
    ("KPK", EndgameKind::TrivialDraw),
    ("KNKN", EndgameKind::TrivialDraw),
    ("KSKS", EndgameKind::TrivialDraw),
    ("KMKM", EndgameKind::TrivialDraw),
    ("KNKS", EndgameKind::TrivialDraw),
    ("KNKM", EndgameKind::TrivialDraw),
    ("KSKM", EndgameKind::TrivialDraw),
    ("KSMK", EndgameKind::KBQK),
    ("KNMK", EndgameKind::KNQK),
    ("KRKN", EndgameKind::KRKN),
];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseSignatureError {
    #[error("signature '{0}' must have exactly two sides, each starting with a king")]
    MalformedSides(String),
    #[error("{0}")]
    InvalidPiece(#[from] PieceFromCharError),
    #[error("too many pieces of one kind in signature '{0}'")]
    TooManyPieces(String),
}

/// Exact material signatures mapped to their evaluators, one entry per strong side.
///
/// Built once and then only read, so a single registry can be shared by every material table.
pub struct Endgames {
    values: IntMap<Endgame>,
    scales: IntMap<ScaleEndgame>,
}

impl Endgames {
    /// Returns the process-wide registry of built-in evaluators.
    pub fn get() -> &'static Self {
        &ENDGAMES
    }

    /// Creates a registry holding the built-in evaluators.
    pub fn new() -> Self {
        let mut endgames = Self::empty();
        for (code, kind) in BUILT_IN {
            endgames
                .add(code, kind)
                .expect("built-in signatures should be valid");
        }
        info!(
            "Registered {} endgame evaluators for {} material keys",
            BUILT_IN.len(),
            endgames.values.len()
        );
        endgames
    }

    /// Creates a registry without any evaluators.
    pub fn empty() -> Self {
        Self {
            values: IntMap::new(),
            scales: IntMap::new(),
        }
    }

    /// Registers `kind` for the material described by `code`, e.g. `"KRKN"`, once for each
    /// color playing the strong side.
    pub fn add(&mut self, code: &str, kind: EndgameKind) -> Result<(), ParseSignatureError> {
        let counts = parse_signature(code)?;
        for strong in Color::iter() {
            let key = signature_key(&counts, strong);
            self.values.insert(key.get(), Endgame::new(kind, strong));
        }
        debug!("Added {:?} evaluator for {}", kind, code);
        Ok(())
    }

    /// Registers a scaling function for the material described by `code`.
    pub fn add_scale(&mut self, code: &str, func: ScaleFn) -> Result<(), ParseSignatureError> {
        let counts = parse_signature(code)?;
        for strong in Color::iter() {
            let key = signature_key(&counts, strong);
            self.scales.insert(key.get(), ScaleEndgame::new(func, strong));
        }
        debug!("Added scaling function for {}", code);
        Ok(())
    }

    #[inline]
    pub fn probe_value(&self, key: MaterialKey) -> Option<Endgame> {
        self.values.get(key.get()).copied()
    }

    #[inline]
    pub fn probe_scale(&self, key: MaterialKey) -> Option<ScaleEndgame> {
        self.scales.get(key.get()).copied()
    }

    /// Number of material keys with an evaluator.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Endgames {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a signature like `"KSMK"` into piece counts, strong side first.
fn parse_signature(code: &str) -> Result<[[u8; 6]; 2], ParseSignatureError> {
    let malformed = || ParseSignatureError::MalformedSides(code.to_string());

    let rest = code.strip_prefix('K').ok_or_else(malformed)?;
    let (strong, weak) = rest.split_once('K').ok_or_else(malformed)?;
    if weak.contains('K') {
        return Err(malformed());
    }

    let mut counts = [[0; 6]; 2];
    for (side, pieces) in [strong, weak].into_iter().enumerate() {
        counts[side][PieceKind::King.index()] = 1;
        for ch in pieces.chars() {
            let kind = PieceKind::try_from(ch)?;
            if kind == PieceKind::King {
                return Err(malformed());
            }
            counts[side][kind.index()] += 1;
            if counts[side][kind.index()] as usize >= MAX_PIECE_COUNT {
                return Err(ParseSignatureError::TooManyPieces(code.to_string()));
            }
        }
    }
    Ok(counts)
}

/// Material key of the signature when `strong` plays the first side.
fn signature_key(counts: &[[u8; 6]; 2], strong: Color) -> MaterialKey {
    match strong {
        Color::White => MaterialKey::from_counts(counts),
        Color::Black => MaterialKey::from_counts(&[counts[1], counts[0]]),
    }
}
