//! Tests for win detection on both variants.

use strictly_connect_five::{
    Flat, GameStatus, Mark, Snapshot, Stacked, Variant, is_draw, status, winner_of, winning_line,
};

fn flat(mark: Mark, indices: &[usize]) -> Snapshot<Flat> {
    Snapshot::from_moves(indices.iter().map(|&i| (i, mark))).expect("Valid placements")
}

fn stacked(mark: Mark, coords: &[[usize; 3]]) -> Snapshot<Stacked> {
    Snapshot::from_moves(
        coords
            .iter()
            .map(|&c| (Stacked::index(c).expect("Valid coordinate"), mark)),
    )
    .expect("Valid placements")
}

#[test]
fn test_flat_row_wins() {
    assert_eq!(winner_of(&flat(Mark::X, &[0, 1, 2, 3, 4])), Some(Mark::X));
}

#[test]
fn test_flat_main_diagonal_wins() {
    assert_eq!(winner_of(&flat(Mark::X, &[0, 6, 12, 18, 24])), Some(Mark::X));
}

#[test]
fn test_flat_anti_diagonal_wins() {
    assert_eq!(winner_of(&flat(Mark::X, &[4, 8, 12, 16, 20])), Some(Mark::X));
}

#[test]
fn test_no_false_positives() {
    assert_eq!(winner_of(&Snapshot::<Flat>::empty()), None);
    assert_eq!(winner_of(&flat(Mark::X, &[0, 1, 2, 3])), None);
    assert_eq!(winner_of(&flat(Mark::O, &[0, 6, 12, 18])), None);
}

#[test]
fn test_every_flat_line_wins_for_both_marks() {
    for line in Flat::lines() {
        for mark in [Mark::X, Mark::O] {
            let board = flat(mark, line.cells());
            assert_eq!(winner_of(&board), Some(mark), "line {:?}", line);
        }
    }
}

#[test]
fn test_stacked_depth_line_wins() {
    let board = stacked(
        Mark::X,
        &[[0, 0, 0], [1, 0, 0], [2, 0, 0], [3, 0, 0], [4, 0, 0]],
    );
    assert_eq!(winner_of(&board), Some(Mark::X));
}

#[test]
fn test_stacked_space_diagonal_wins() {
    let board = stacked(
        Mark::X,
        &[[0, 0, 0], [1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]],
    );
    assert_eq!(winner_of(&board), Some(Mark::X));
}

#[test]
fn test_stacked_in_layer_lines_win() {
    // Row, column and diagonal inside the top layer.
    let row = stacked(Mark::O, &[[4, 1, 0], [4, 1, 1], [4, 1, 2], [4, 1, 3], [4, 1, 4]]);
    let col = stacked(Mark::O, &[[2, 0, 3], [2, 1, 3], [2, 2, 3], [2, 3, 3], [2, 4, 3]]);
    let diag = stacked(Mark::O, &[[1, 0, 4], [1, 1, 3], [1, 2, 2], [1, 3, 1], [1, 4, 0]]);
    for board in [row, col, diag] {
        assert_eq!(winner_of(&board), Some(Mark::O));
    }
}

#[test]
fn test_stacked_mixed_three_axis_diagonals_win() {
    // All four space diagonals, including the ones running against an axis.
    let diagonals: [[[usize; 3]; 5]; 4] = [
        [[0, 0, 0], [1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]],
        [[0, 0, 4], [1, 1, 3], [2, 2, 2], [3, 3, 1], [4, 4, 0]],
        [[0, 4, 0], [1, 3, 1], [2, 2, 2], [3, 1, 3], [4, 0, 4]],
        [[0, 4, 4], [1, 3, 3], [2, 2, 2], [3, 1, 1], [4, 0, 0]],
    ];
    for diagonal in diagonals {
        assert_eq!(winner_of(&stacked(Mark::X, &diagonal)), Some(Mark::X));
    }
}

#[test]
fn test_stacked_four_in_a_line_is_not_a_win() {
    let board = stacked(Mark::X, &[[0, 0, 0], [1, 1, 1], [2, 2, 2], [3, 3, 3]]);
    assert_eq!(winner_of(&board), None);
}

#[test]
fn test_line_counts() {
    assert_eq!(Flat::lines().len(), 12);
    assert_eq!(Stacked::lines().len(), 109);
}

#[test]
fn test_line_table_is_cached() {
    assert!(std::ptr::eq(Stacked::lines(), Stacked::lines()));
}

#[test]
fn test_winning_line_and_status() {
    let board = flat(Mark::O, &[2, 7, 12, 17, 22]);
    let (mark, line) = winning_line(&board).expect("Column is complete");
    assert_eq!(mark, Mark::O);
    assert_eq!(line.cells(), &[2, 7, 12, 17, 22]);
    assert_eq!(status(&board), GameStatus::Won(Mark::O));
    assert!(!is_draw(&board));
}
