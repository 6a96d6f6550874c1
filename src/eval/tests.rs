use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::position::Position;
use crate::types::{Color, Phase, ScaleFactor, Value};

use super::{imbalance, EndgameKind, Endgames, MaterialTable, PieceCounts};

#[derive(Deserialize)]
struct GoldenScore {
    fen: String,
    kind: String,
    score: i16,
}

fn golden_scores() -> Vec<GoldenScore> {
    let mut test_path = PathBuf::new();
    test_path.push(env!("CARGO_MANIFEST_DIR"));
    test_path.push("resources/test/endgame_golden.json");
    let test_file = fs::File::open(test_path).unwrap();
    serde_json::from_reader(test_file).unwrap()
}

#[test]
fn golden_endgame_scores() {
    let mut table = MaterialTable::default();

    for test in golden_scores() {
        let position = Position::from_fen(&test.fen).unwrap();
        let entry = table.probe(&position);

        let endgame = entry.evaluation_function().unwrap();
        assert_eq!(format!("{:?}", endgame.kind()), test.kind, "{}", test.fen);
        assert_eq!(
            entry.evaluate(&position),
            Some(Value::new(test.score)),
            "{}",
            test.fen
        );
    }
}

#[test]
fn mirrored_positions_score_equally() {
    let mut table = MaterialTable::default();

    for test in golden_scores() {
        let position = Position::from_fen(&test.fen).unwrap();
        let mirrored = position.mirrored();

        let (score, imbalance_score, strong) = {
            let entry = table.probe(&position);
            let endgame = entry.evaluation_function().unwrap();
            (entry.evaluate(&position), entry.imbalance(), endgame.strong_side())
        };
        let entry = table.probe(&mirrored);

        assert_eq!(entry.evaluate(&mirrored), score, "{}", test.fen);
        assert_eq!(entry.imbalance(), -imbalance_score, "{}", test.fen);
        assert_eq!(
            entry.evaluation_function().unwrap().strong_side(),
            !strong,
            "{}",
            test.fen
        );
    }
}

#[test]
fn probing_is_deterministic() {
    let endgames = Endgames::get();
    let mut first = MaterialTable::new(endgames);
    let mut second = MaterialTable::with_capacity(16, endgames);

    for fen in [
        "4k3/8/8/8/3n4/8/8/R3K3 w",
        "4k3/8/8/3n4/8/8/8/2R1K3 b",
        "rnsmksnr/8/pppppppp/8/8/PPPPPPPP/8/RNSKMSNR w",
    ] {
        let position = Position::from_fen(fen).unwrap();
        let a = *first.probe(&position);
        let b = *first.probe(&position);
        let c = *second.probe(&position);

        for entry in [b, c] {
            assert_eq!(entry.key(), a.key());
            assert_eq!(entry.imbalance(), a.imbalance());
            assert_eq!(entry.game_phase(), a.game_phase());
            assert_eq!(entry.evaluation_function(), a.evaluation_function());
            assert_eq!(entry.evaluate(&position), a.evaluate(&position));
        }
    }
}

#[test]
fn material_key_decides_the_entry() {
    let mut table = MaterialTable::default();
    let one = Position::from_fen("4k3/8/8/8/3n4/8/8/R3K3 w").unwrap();
    let other = Position::from_fen("8/2n5/8/k7/8/8/5K2/7R b").unwrap();

    let key = table.probe(&one).key();
    let entry = table.probe(&other);
    assert_eq!(entry.key(), key);
    assert_eq!(
        entry.evaluation_function().map(|endgame| endgame.kind()),
        Some(EndgameKind::KRKN)
    );
}

#[test]
fn exact_signature_beats_classification() {
    let mut table = MaterialTable::default();

    // Both have enough material for the bare king pattern
    let position = Position::from_fen("4k3/8/8/8/8/8/8/1N2KM2 w").unwrap();
    let endgame = table.probe(&position).evaluation_function().unwrap();
    assert_eq!(endgame.kind(), EndgameKind::KNQK);

    let position = Position::from_fen("4k3/8/8/8/8/8/8/1N2KN2 w").unwrap();
    let entry = table.probe(&position);
    assert_eq!(
        entry.evaluation_function().unwrap().kind(),
        EndgameKind::TrivialDraw
    );
    assert_eq!(entry.evaluate(&position), Some(Value::DRAW));
}

fn kind_of(table: &mut MaterialTable, fen: &str) -> Option<(EndgameKind, Color)> {
    let position = Position::from_fen(fen).unwrap();
    table
        .probe(&position)
        .evaluation_function()
        .map(|endgame| (endgame.kind(), endgame.strong_side()))
}

#[test]
fn classification_precedence() {
    let mut table = MaterialTable::default();

    // Three mets are also only mets and pawns
    assert_eq!(
        kind_of(&mut table, "4k3/8/8/8/8/8/8/MMM1K3 w"),
        Some((EndgameKind::KXK, Color::White))
    );
    // A lone pawn and a lone knight, the pawn comes first
    assert_eq!(
        kind_of(&mut table, "4k3/4p3/3n4/8/8/8/8/RR2K3 w"),
        Some((EndgameKind::KXKP, Color::White))
    );
    assert_eq!(
        kind_of(&mut table, "4k3/3r4/8/8/8/8/8/RRN1K3 b"),
        Some((EndgameKind::KXKR, Color::White))
    );
    assert_eq!(
        kind_of(&mut table, "rr2k3/8/8/8/8/8/3M4/4K3 w"),
        Some((EndgameKind::KXKQ, Color::Black))
    );
    // Not enough of a lead
    assert_eq!(kind_of(&mut table, "4k3/3r4/8/8/8/8/8/RN2K3 w"), None);
    assert_eq!(kind_of(&mut table, crate::STARTING_FEN), None);
}

fn phase_of(table: &mut MaterialTable, fen: &str) -> Phase {
    let position = Position::from_fen(fen).unwrap();
    table.probe(&position).game_phase()
}

#[test]
fn game_phase() {
    let mut table = MaterialTable::default();

    assert_eq!(phase_of(&mut table, crate::STARTING_FEN), Phase::MIDGAME);
    assert_eq!(phase_of(&mut table, "4k3/8/8/8/8/8/8/4K3 w"), Phase::ENDGAME);
    // Below the endgame limit
    assert_eq!(phase_of(&mut table, "4k3/8/8/8/8/8/8/R3K3 w"), Phase::ENDGAME);
    // (5794 - 2730) * 128 / 7920
    assert_eq!(phase_of(&mut table, "rns1k3/8/8/8/8/8/8/RNSMK3 w"), Phase::new(49));
}

#[test]
fn imbalance_is_always_computed() {
    let mut table = MaterialTable::default();

    let position = Position::new();
    let entry = table.probe(&position);
    assert!(!entry.specialized_eval_exists());
    assert_eq!(entry.imbalance(), Value::ZERO);

    // The specialized evaluator takes precedence but the imbalance is still there
    let position = Position::from_fen("4k3/8/8/8/3n4/8/8/R3K3 w").unwrap();
    let entry = table.probe(&position);
    assert!(entry.specialized_eval_exists());
    assert_eq!(
        entry.imbalance(),
        imbalance(
            &PieceCounts::of(&position, Color::White),
            &PieceCounts::of(&position, Color::Black)
        )
    );
}

#[test]
fn colliding_keys_overwrite_each_other() {
    let mut table = MaterialTable::with_capacity(1, Endgames::get());
    let krkn = Position::from_fen("4k3/8/8/8/3n4/8/8/R3K3 w").unwrap();
    let start = Position::new();

    for _ in 0..2 {
        let entry = table.probe(&krkn);
        assert_eq!(entry.key(), krkn.material_key());
        assert!(entry.specialized_eval_exists());

        let entry = table.probe(&start);
        assert_eq!(entry.key(), start.material_key());
        assert!(!entry.specialized_eval_exists());
    }
}

#[test]
fn capacity_rounds_down_to_power_of_two() {
    let endgames = Endgames::get();
    assert_eq!(MaterialTable::with_capacity(1000, endgames).capacity(), 512);
    assert_eq!(MaterialTable::with_capacity(1024, endgames).capacity(), 1024);
    assert_eq!(MaterialTable::with_capacity(0, endgames).capacity(), 1);
    assert_eq!(
        MaterialTable::default().capacity(),
        MaterialTable::DEFAULT_CAPACITY
    );
}

fn halve(_: &Position, _: Color) -> ScaleFactor {
    ScaleFactor::new(32)
}

fn no_opinion(_: &Position, _: Color) -> ScaleFactor {
    ScaleFactor::NONE
}

#[test]
fn scale_functions_only_apply_to_strong_side() {
    let mut endgames = Endgames::new();
    endgames.add_scale("KRPKR", halve).unwrap();
    endgames.add_scale("KRPPKR", no_opinion).unwrap();
    let mut table = MaterialTable::new(&endgames);

    let position = Position::from_fen("4k3/8/8/8/3r4/8/4P3/R3K3 w").unwrap();
    let entry = table.probe(&position);
    assert!(!entry.specialized_eval_exists());
    assert_eq!(entry.scale_factor(&position, Color::White), ScaleFactor::new(32));
    assert_eq!(entry.scale_factor(&position, Color::Black), ScaleFactor::NORMAL);

    let mirrored = position.mirrored();
    let entry = table.probe(&mirrored);
    assert_eq!(entry.scale_factor(&mirrored, Color::White), ScaleFactor::NORMAL);
    assert_eq!(entry.scale_factor(&mirrored, Color::Black), ScaleFactor::new(32));

    let position = Position::from_fen("4k3/8/8/8/3r4/8/3PP3/R3K3 w").unwrap();
    let entry = table.probe(&position);
    assert_eq!(entry.scale_factor(&position, Color::White), ScaleFactor::NORMAL);
}

#[test]
fn value_evaluators_shadow_scale_functions() {
    let mut endgames = Endgames::new();
    endgames.add_scale("KRKN", halve).unwrap();
    let mut table = MaterialTable::new(&endgames);

    let position = Position::from_fen("4k3/8/8/8/3n4/8/8/R3K3 w").unwrap();
    let entry = table.probe(&position);
    assert!(entry.specialized_eval_exists());
    assert_eq!(entry.scale_factor(&position, Color::White), ScaleFactor::NORMAL);
}
