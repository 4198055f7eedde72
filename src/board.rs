use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::{HEIGHT, WIDTH};

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Red,
}

impl Color {
    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Color::Yellow => Color::Red,
            Color::Red => Color::Yellow,
        }
    }

    /// +1 for `perspective`, -1 for its opponent, for arithmetic scoring
    pub fn sign(self, perspective: Color) -> i32 {
        if self == perspective {
            1
        } else {
            -1
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Yellow => "Yellow",
            Color::Red => "Red",
        }
    }
}

/// A cell on the board, row 0 being the top row
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

/// A disc that has been placed, as kept in an undo history
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub color: Color,
}

impl Move {
    pub fn slot(&self) -> Slot {
        Slot {
            row: self.row,
            column: self.column,
        }
    }
}

/// A 6x7 grid of discs
///
/// Boards are plain values: copying one yields fully independent storage, which
/// is what the search relies on when exploring sibling branches.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    // cells are stored top-to-bottom, left-to-right
    cells: [[Option<Color>; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed column digits, alternating
    /// colors and starting with `Color::Yellow`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut color = Color::Yellow;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    let row = board
                        .lowest_empty_row(column)
                        .ok_or_else(|| anyhow!("Invalid move, column {} full", column + 1))?;
                    board.place(row, column, color);
                    // abort if the position is won at any point
                    if crate::win::wins(&board, color, row, column) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    color = color.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Color> {
        self.cells[row][column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Option<Color>) {
        self.cells[row][column] = cell;
    }

    /// Number of discs on the board
    pub fn num_moves(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// The same position with every disc changing sides
    pub fn swapped(&self) -> Self {
        let mut board = *self;
        for cell in board.cells.iter_mut().flatten() {
            *cell = cell.map(Color::other);
        }
        board
    }

    pub(crate) fn rows(&self) -> &[[Option<Color>; WIDTH]; HEIGHT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
