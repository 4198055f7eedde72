//! Detection of four-in-a-row through a freshly placed disc

use crate::{board::*, CONNECT, HEIGHT, WIDTH};

// (row step, column step) for each axis: vertical, horizontal, diagonal \, diagonal /
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Returns true if the disc of `color` at (`row`, `column`) completes a line of four
///
/// The disc must already be on the board. Each axis is scanned outwards in both
/// directions from the placed disc, stopping at the first cell that is off the
/// board or not `color`.
pub fn wins(board: &Board, color: Color, row: usize, column: usize) -> bool {
    debug_assert_eq!(board.get(row, column), Some(color));

    for &(dy, dx) in AXES.iter() {
        // the placed disc itself is not counted
        let mut run = 0;
        for &direction in [-1isize, 1].iter() {
            let mut y = row as isize + dy * direction;
            let mut x = column as isize + dx * direction;
            while y >= 0
                && y < HEIGHT as isize
                && x >= 0
                && x < WIDTH as isize
                && board.get(y as usize, x as usize) == Some(color)
            {
                run += 1;
                if run >= CONNECT - 1 {
                    return true;
                }
                y += dy * direction;
                x += dx * direction;
            }
        }
    }

    false
}
