//! Engine Integration Tests
//!
//! Tests for AI move choice through the public API:
//! - Mate-in-one is never missed by a searching difficulty
//! - Hard is deterministic
//! - The board is handed back unchanged
//! - Easy and Medium stay legal under seeded randomness

use chess_engine::{analyse, board_state, choose_move, Board, BoardState, Difficulty, SelectionPath, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

const BACK_RANK_WHITE: &str = "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1";
const BACK_RANK_BLACK: &str = "3r2k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1";
const HANGING_QUEEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";

// ============================================================================
// Mate Detection Tests
// ============================================================================

#[test]
fn test_hard_finds_back_rank_mate() {
    let mut board = Board::from_fen(BACK_RANK_WHITE).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let mv = choose_move(&mut board, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(mv.to_string(), "d1d8");

    board.apply(&mv).unwrap();
    assert_eq!(
        board_state(&board),
        BoardState::Checkmate { winner: Side::White }
    );
}

#[test]
fn test_black_finds_back_rank_mate() {
    //! Minimizing side must also take a mate in one
    let mut board = Board::from_fen(BACK_RANK_BLACK).unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let mv = choose_move(&mut board, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(mv.to_string(), "d8d1");
}

#[test]
fn test_medium_never_shuffles_away_from_mate() {
    //! No one-ply evaluation is within tolerance of an infinite value,
    //! so Medium's shuffle has no candidates and the mate stands
    for seed in 0..32 {
        let mut board = Board::from_fen(BACK_RANK_WHITE).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let report = analyse(&mut board, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(report.mv.to_string(), "d1d8", "seed {seed}");
        assert_eq!(report.path, SelectionPath::Searched);
    }
}

#[test]
fn test_easy_search_branch_finds_mate() {
    for seed in 0..32 {
        let mut board = Board::from_fen(BACK_RANK_WHITE).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let report = analyse(&mut board, Difficulty::Easy, &mut rng).unwrap();
        if report.path == SelectionPath::Searched {
            assert_eq!(report.mv.to_string(), "d1d8", "seed {seed}");
        }
    }
}

// ============================================================================
// Determinism and Board Integrity Tests
// ============================================================================

#[test]
fn test_hard_is_deterministic() {
    let mut board = Board::from_fen(
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    )
    .unwrap();

    let first = choose_move(&mut board, Difficulty::Hard, &mut StdRng::seed_from_u64(1));
    let second = choose_move(&mut board, Difficulty::Hard, &mut StdRng::seed_from_u64(99));
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_hard_wins_hanging_queen() {
    let mut board = Board::from_fen(HANGING_QUEEN).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mv = choose_move(&mut board, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(mv.to_string(), "d2d5");
}

#[test]
fn test_board_unchanged_after_search() {
    //! Search must hand the board back with the same position and history
    let mut board = Board::new();
    for text in ["e2e4", "e7e5", "g1f3"] {
        board.apply(&text.parse().unwrap()).unwrap();
    }
    let fen = board.fen();
    let plies = board.ply_count();

    for difficulty in Difficulty::ALL {
        let mut rng = StdRng::seed_from_u64(11);
        choose_move(&mut board, difficulty, &mut rng).unwrap();
        assert_eq!(board.fen(), fen, "{difficulty} changed the position");
        assert_eq!(board.ply_count(), plies, "{difficulty} changed the history");
    }
}

#[test]
fn test_seeded_play_stays_legal() {
    //! Self-play at Easy and Medium never produces an illegal move
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..16 {
            if board_state(&board).is_over() {
                break;
            }
            let mv = choose_move(&mut board, difficulty, &mut rng).unwrap();
            board
                .apply(&mv)
                .unwrap_or_else(|e| panic!("{difficulty} chose {mv}: {e}"));
        }
    }
}
