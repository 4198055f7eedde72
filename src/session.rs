//! A live game: side to move, computer opponent, undo history and rendering

use anyhow::{anyhow, bail, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color as TermColor, PrintStyledContent},
    QueueableCommand,
};
use log::{info, warn};

use std::io::{stdout, Write};

use crate::{
    board::*,
    engine,
    search::{SearchResult, Searcher, MAX_DEPTH},
    HEIGHT, WIDTH,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Color),
    Draw,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    first: Color,
    to_move: Color,
    computer: Option<Color>,
    depth: usize,
    trace: Vec<Move>,
    state: GameState,
}

impl Game {
    /// Starts a game with `first` to move; `computer` is the side played by the
    /// search, if any. `depth` is clamped to 1..=`MAX_DEPTH`.
    pub fn new(first: Color, computer: Option<Color>, depth: usize) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            computer,
            depth: depth.clamp(1, MAX_DEPTH),
            trace: Vec::new(),
            state: GameState::Playing,
        }
    }

    /// Starts a game from a string of 1-indexed column digits
    pub fn from_moves(
        moves: &str,
        first: Color,
        computer: Option<Color>,
        depth: usize,
    ) -> Result<Self> {
        let mut game = Self::new(first, computer, depth);
        for column_char in moves.chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    game.play_checked(column as usize)?;
                }
                _ => bail!("could not parse '{}' as a valid move", column_char),
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn computer(&self) -> Option<Color> {
        self.computer
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Every move played so far, oldest first
    pub fn trace(&self) -> &[Move] {
        &self.trace
    }

    pub fn computer_to_move(&self) -> bool {
        self.state == GameState::Playing && self.computer == Some(self.to_move)
    }

    /// Plays a human move in a 1-indexed column
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if self.state != GameState::Playing {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        let slot = engine::apply_human_move(&mut self.board, column, self.to_move)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column_one_indexed))?;

        Ok(self.record(slot))
    }

    /// Lets the search choose and play a move for the side to move
    pub fn play_computer(&mut self) -> Result<(Slot, SearchResult)> {
        if self.state != GameState::Playing {
            bail!("the game is over");
        }
        let mut searcher = Searcher::new(self.to_move);
        let result = searcher.best_move(&self.board, self.depth);
        let slot = result
            .slot
            .ok_or_else(|| anyhow!("no legal move for {}", self.to_move.name()))?;
        self.board.place(slot.row, slot.column, self.to_move);
        self.record(slot);

        Ok((slot, result))
    }

    // adds the move just placed at `slot` to the trace and updates the game state
    fn record(&mut self, slot: Slot) -> GameState {
        let color = self.to_move;
        self.trace.push(Move {
            row: slot.row,
            column: slot.column,
            color,
        });
        info!("{} plays column {}", color.name(), slot.column + 1);

        self.state = if engine::is_win(&self.board, color, slot) {
            GameState::Won(color)
        } else if engine::is_draw(&self.board) {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.to_move = color.other();
        self.state
    }

    /// Takes back the last move
    pub fn undo(&mut self) -> Option<Move> {
        let last = self.trace.pop()?;
        self.board.set(last.row, last.column, None);
        self.to_move = last.color;
        self.state = GameState::Playing;
        Some(last)
    }

    /// Takes back moves until a human is to move again
    ///
    /// Returns the number of moves taken back.
    pub fn undo_turn(&mut self) -> usize {
        let mut undone = 0;
        while self.undo().is_some() {
            undone += 1;
            if self.computer != Some(self.to_move) {
                break;
            }
        }
        if undone == 0 {
            warn!("nothing to undo");
        }
        undone
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = self.first;
        self.trace.clear();
        self.state = GameState::Playing;
    }

    /// One line describing the state of the game
    pub fn status(&self) -> String {
        match self.state {
            GameState::Won(color) if self.computer == Some(color) => "Computer wins!".to_string(),
            GameState::Won(color) if self.computer.is_some() => {
                format!("You win! ({})", color.name())
            }
            GameState::Won(color) => format!("{} wins!", color.name()),
            GameState::Draw => "Tie game!".to_string(),
            GameState::Playing => format!("{} to move", self.to_move.name()),
        }
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;
        let last = self.trace.last().map(Move::slot);

        for (row, cells) in self.board.rows().iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let (pos_x, pos_y) = (
                    origin_x + column as u16,
                    origin_y.saturating_sub((HEIGHT - row) as u16),
                );
                let glyph = if last == Some(Slot { row, column }) {
                    "@"
                } else {
                    "O"
                };

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style(glyph)
                            .attribute(Attribute::Bold)
                            .on(TermColor::DarkBlue)
                            .with(match cell {
                                Some(Color::Yellow) => TermColor::Yellow,
                                Some(Color::Red) => TermColor::Red,
                                None => TermColor::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x, origin_y))?
            .queue(PrintStyledContent(style(self.status() + "\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
