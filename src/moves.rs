//! Legal drop targets and disc placement

use crate::{board::*, HEIGHT, WIDTH};

/// The legal drop targets of a position, in ascending column order
///
/// Backed by a fixed array so that generating moves in the search never allocates.
#[derive(Clone)]
pub struct LegalMoves {
    size: usize,
    next: usize,
    slots: [Slot; WIDTH],
}

impl LegalMoves {
    fn new() -> Self {
        Self {
            size: 0,
            next: 0,
            slots: [Slot { row: 0, column: 0 }; WIDTH],
        }
    }

    fn push(&mut self, slot: Slot) {
        self.slots[self.size] = slot;
        self.size += 1;
    }
}

impl Iterator for LegalMoves {
    type Item = Slot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.size {
            return None;
        }
        self.next += 1;
        Some(self.slots[self.next - 1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.size - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LegalMoves {}

impl Board {
    /// The row a disc dropped into `column` would land in, or `None` if the
    /// column is full or out of range
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT).rev().find(|&row| self.get(row, column).is_none())
    }

    pub fn playable(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_some()
    }

    /// One slot per non-full column; empty when the board is full
    pub fn legal_moves(&self) -> LegalMoves {
        let mut moves = LegalMoves::new();
        for column in 0..WIDTH {
            if let Some(row) = self.lowest_empty_row(column) {
                moves.push(Slot { row, column });
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.playable(column))
    }

    /// Writes `color` into (`row`, `column`)
    ///
    /// # Panics
    /// If the cell is not the lowest empty cell of its column. Obtain `row`
    /// from [`Board::lowest_empty_row`].
    pub fn place(&mut self, row: usize, column: usize, color: Color) {
        assert!(
            self.lowest_empty_row(column) == Some(row),
            "cannot place at row {} column {}: not the lowest empty cell",
            row,
            column
        );
        self.set(row, column, Some(color));
    }
}
