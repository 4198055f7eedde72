//! Heuristic scoring of positions the search does not explore further

use static_assertions::*;

use crate::{board::*, CONNECT, HEIGHT, WIDTH};

/// Score of a decided position, larger than any heuristic sum
pub const WIN_SCORE: i32 = 1_000_000;
/// Value of each disc in the center column
pub const CENTER_WEIGHT: i32 = 3;
/// Value of a window holding three discs of one side and an empty cell
pub const THREE_WEIGHT: i32 = 5;
/// Value of a window holding two discs of one side and two empty cells
pub const TWO_WEIGHT: i32 = 2;

const CENTER_COLUMN: usize = WIDTH / 2;

// generous upper bound on the number of windows: four axes per cell
const MAX_WINDOWS: i32 = (4 * WIDTH * HEIGHT) as i32;
// the window patterns below are written for lines of four
const_assert_eq!(CONNECT, 4);
const_assert!(HEIGHT as i32 * CENTER_WEIGHT + MAX_WINDOWS * THREE_WEIGHT < WIN_SCORE);

// (row step, column step): horizontal, vertical, diagonal \, diagonal /
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Scores `board` from the point of view of `maximizer`
///
/// Positive values favour `maximizer`. A board already holding four in a row
/// scores `WIN_SCORE` or `-WIN_SCORE` outright.
pub fn score(board: &Board, maximizer: Color) -> i32 {
    let mut total = 0;

    for row in 0..HEIGHT {
        if let Some(color) = board.get(row, CENTER_COLUMN) {
            total += color.sign(maximizer) * CENTER_WEIGHT;
        }
    }

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            for &direction in DIRECTIONS.iter() {
                if let Some(window) = window(board, row, column, direction) {
                    match window_score(&window, maximizer) {
                        WindowScore::Decided(score) => return score,
                        WindowScore::Open(score) => total += score,
                    }
                }
            }
        }
    }

    total
}

enum WindowScore {
    Decided(i32),
    Open(i32),
}

fn window(
    board: &Board,
    row: usize,
    column: usize,
    (dy, dx): (isize, isize),
) -> Option<[Option<Color>; CONNECT]> {
    let end_row = row as isize + dy * (CONNECT as isize - 1);
    let end_column = column as isize + dx * (CONNECT as isize - 1);
    if end_row < 0 || end_row >= HEIGHT as isize || end_column < 0 || end_column >= WIDTH as isize
    {
        return None;
    }

    let mut window = [None; CONNECT];
    for (i, cell) in window.iter_mut().enumerate() {
        let y = row as isize + dy * i as isize;
        let x = column as isize + dx * i as isize;
        *cell = board.get(y as usize, x as usize);
    }
    Some(window)
}

fn window_score(window: &[Option<Color>; CONNECT], maximizer: Color) -> WindowScore {
    let own = window.iter().filter(|&&c| c == Some(maximizer)).count();
    let opponent = window
        .iter()
        .filter(|&&c| c == Some(maximizer.other()))
        .count();
    let empty = CONNECT - own - opponent;

    match (own, opponent, empty) {
        (4, _, _) => WindowScore::Decided(WIN_SCORE),
        (_, 4, _) => WindowScore::Decided(-WIN_SCORE),
        (3, 0, 1) => WindowScore::Open(THREE_WEIGHT),
        (2, 0, 2) => WindowScore::Open(TWO_WEIGHT),
        (0, 3, 1) => WindowScore::Open(-THREE_WEIGHT),
        (0, 2, 2) => WindowScore::Open(-TWO_WEIGHT),
        _ => WindowScore::Open(0),
    }
}
