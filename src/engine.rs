//! Entry points used by a front end driving a live game

use crate::{
    board::*,
    search::{Searcher, MAX_DEPTH},
    win,
};

/// Drops a disc of `color` into `column`
///
/// Returns where it landed, or `None` (leaving the board untouched) if the
/// column is full or out of range.
pub fn apply_human_move(board: &mut Board, column: usize, color: Color) -> Option<Slot> {
    let row = board.lowest_empty_row(column)?;
    board.place(row, column, color);
    Some(Slot { row, column })
}

/// Whether the disc of `color` at `slot` completes four in a row
pub fn is_win(board: &Board, color: Color, slot: Slot) -> bool {
    win::wins(board, color, slot.row, slot.column)
}

/// Whether no legal moves remain
pub fn is_draw(board: &Board) -> bool {
    board.legal_moves().len() == 0
}

/// Chooses a drop target for `color` by searching `depth` plies
///
/// `depth` is clamped to 1..=`MAX_DEPTH`. The board is not modified. Returns
/// `None` only if the board is full.
pub fn compute_ai_move(board: &Board, color: Color, depth: usize) -> Option<Slot> {
    let depth = depth.clamp(1, MAX_DEPTH);
    Searcher::new(color).best_move(board, depth).slot
}
