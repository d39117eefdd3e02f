use super::*;
use crate::eval::evaluate;

fn setup(stones: &[(i32, i32, Stone)]) -> Board {
    let mut board = Board::new();
    for &(x, y, s) in stones {
        assert!(board.place(Coord::new(x, y), s));
    }
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.hash(), 0);
    assert_eq!(board.bounds(), None);
    assert_eq!(board.get(Coord::new(1_000_000, -7)), Stone::Empty);
}

#[test]
fn test_place_undo_round_trip() {
    let mut board = setup(&[(0, 0, Stone::X), (3, -2, Stone::O)]);
    let hash = board.hash();
    let bounds = board.bounds();

    assert!(board.place(Coord::new(-5, 9), Stone::X));
    assert_ne!(board.hash(), hash);
    board.undo(Coord::new(-5, 9));

    assert_eq!(board.hash(), hash);
    assert_eq!(board.bounds(), bounds);
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.get(Coord::new(-5, 9)), Stone::Empty);
}

#[test]
fn test_place_occupied_is_rejected() {
    let mut board = setup(&[(2, 2, Stone::X)]);
    let hash = board.hash();
    assert!(!board.place(Coord::new(2, 2), Stone::O));
    assert!(!board.place(Coord::new(2, 2), Stone::X));
    assert_eq!(board.get(Coord::new(2, 2)), Stone::X);
    assert_eq!(board.hash(), hash);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_empty_stone_is_rejected() {
    let mut board = Board::new();
    assert!(!board.place(Coord::ORIGIN, Stone::Empty));
    assert!(board.is_board_empty());
}

#[test]
fn test_undo_empty_cell_is_noop() {
    let mut board = setup(&[(0, 0, Stone::X)]);
    let hash = board.hash();
    board.undo(Coord::new(4, 4));
    assert_eq!(board.hash(), hash);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_hash_matches_fresh_table() {
    let mut board = Board::new();
    let moves = [
        (0, 0, Stone::X),
        (1, 0, Stone::O),
        (-3, 8, Stone::X),
        (40, -40, Stone::O),
    ];
    for &(x, y, s) in &moves {
        board.place(Coord::new(x, y), s);
    }
    board.undo(Coord::new(1, 0));

    let mut fresh = ZobristTable::with_seed(board.keys().seed());
    let expected = fresh.hash_of(board.stones());
    assert_eq!(board.hash(), expected);
}

#[test]
fn test_hash_independent_of_move_order() {
    let a = setup(&[(0, 0, Stone::X), (1, 1, Stone::O), (2, 0, Stone::X)]);
    let b = setup(&[(2, 0, Stone::X), (0, 0, Stone::X), (1, 1, Stone::O)]);
    assert_eq!(a.hash(), b.hash());
    assert_ne!(a.position_key(Stone::X), a.position_key(Stone::O));
}

#[test]
fn test_bounds_grow_and_shrink() {
    let mut board = setup(&[(0, 0, Stone::X), (5, -3, Stone::O), (2, 7, Stone::X)]);
    assert_eq!(
        board.bounds(),
        Some(Bounds {
            min_x: 0,
            max_x: 5,
            min_y: -3,
            max_y: 7
        })
    );

    board.undo(Coord::new(2, 7));
    assert_eq!(
        board.bounds(),
        Some(Bounds {
            min_x: 0,
            max_x: 5,
            min_y: -3,
            max_y: 0
        })
    );

    board.undo(Coord::new(0, 0));
    board.undo(Coord::new(5, -3));
    assert_eq!(board.bounds(), None);
}

#[test]
fn test_interior_undo_keeps_bounds() {
    let mut board = setup(&[(0, 0, Stone::X), (4, 4, Stone::O), (2, 2, Stone::X)]);
    let bounds = board.bounds();
    board.undo(Coord::new(2, 2));
    assert_eq!(board.bounds(), bounds);
}

#[test]
fn test_candidates_empty_board() {
    assert_eq!(Board::new().candidates(2), vec![Coord::ORIGIN]);
}

#[test]
fn test_candidates_single_stone() {
    let board = setup(&[(0, 0, Stone::X)]);
    let near = board.candidates(1);
    assert_eq!(near.len(), 8);
    assert!(!near.contains(&Coord::ORIGIN));

    let wide = board.candidates(2);
    assert_eq!(wide.len(), 24);
    assert!(wide.iter().all(|c| c.chebyshev(Coord::ORIGIN) <= 2));
}

#[test]
fn test_candidates_are_unique_sorted_and_empty() {
    let board = setup(&[(0, 0, Stone::X), (1, 0, Stone::O), (1, 1, Stone::X)]);
    let cands = board.candidates(2);
    let mut sorted = cands.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(cands, sorted);
    assert!(cands.iter().all(|&c| board.is_empty(c)));
    // 6x5 block, a 5-cell row above it, minus the stones
    assert_eq!(cands.len(), 6 * 5 + 5 - 3);
}

#[test]
fn test_stones_at_coordinate_limits() {
    let corner = Coord::new(i32::MAX, i32::MAX);
    let mut board = setup(&[(i32::MAX, i32::MAX, Stone::X)]);
    assert!(!board.win_from(corner, Stone::X, 4));

    // Only the 3x3 block that stays in range, minus the stone
    let cands = board.candidates(2);
    assert_eq!(cands.len(), 8);
    assert!(cands.iter().all(|c| c.chebyshev(corner) <= 2));

    assert!(board.place(Coord::new(i32::MIN, 0), Stone::O));
    assert_eq!(
        board.bounds(),
        Some(Bounds {
            min_x: i32::MIN,
            max_x: i32::MAX,
            min_y: 0,
            max_y: i32::MAX
        })
    );
    assert_eq!(board.bounds().map(|b| b.center()), Some(Coord::new(0, i32::MAX / 2)));
    board.undo(corner);
    assert_eq!(board.bounds(), Some(Bounds::at(Coord::new(i32::MIN, 0))));
}

#[test]
fn test_placed_stone_guard_undoes() {
    let mut board = setup(&[(0, 0, Stone::X)]);
    let hash = board.hash();
    {
        let mut guard = board.place_scoped(Coord::new(1, 0), Stone::O).unwrap();
        assert_eq!(guard.at(), Coord::new(1, 0));
        assert_eq!(guard.get(Coord::new(1, 0)), Stone::O);
        {
            let inner = guard.place_scoped(Coord::new(2, 0), Stone::X).unwrap();
            assert_eq!(inner.stone_count(), 3);
        }
        assert_eq!(guard.stone_count(), 2);
    }
    assert_eq!(board.hash(), hash);
    assert_eq!(board.stone_count(), 1);
    assert!(board.place_scoped(Coord::ORIGIN, Stone::O).is_none());
}

#[test]
fn test_win_from_is_symmetric_along_run() {
    let board = setup(&[
        (0, 0, Stone::O),
        (1, 1, Stone::O),
        (2, 2, Stone::O),
        (3, 3, Stone::O),
    ]);
    for i in 0..4 {
        assert!(board.win_from(Coord::new(i, i), Stone::O, 4));
    }
    assert!(!board.win_from(Coord::new(4, 4), Stone::O, 4));
}

#[test]
fn test_diagonal_three_favors_x() {
    let board = setup(&[(0, 0, Stone::X), (1, 1, Stone::X), (2, 2, Stone::X)]);
    let score = board.evaluate(DEFAULT_RUN_LENGTH);
    assert!(score > 0);
    assert_eq!(score, evaluate(&board, DEFAULT_RUN_LENGTH));
}

#[test]
fn test_clear_keeps_keys() {
    let mut board = setup(&[(0, 0, Stone::X), (1, 0, Stone::O)]);
    let cached = board.keys().len();
    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board.hash(), 0);
    assert_eq!(board.bounds(), None);
    assert_eq!(board.keys().len(), cached);
}
