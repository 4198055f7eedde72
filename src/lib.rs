//! A computer opponent for the board game 'Connect 4'
//!
//! The opponent runs a depth-limited minimax search with alpha-beta pruning,
//! scoring the positions at its depth limit with a window-based heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::*, engine::*};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // Yellow holds three discs along the bottom row and is to move
//! let mut board = Board::from_moves("112233")?;
//! let slot = compute_ai_move(&board, Color::Yellow, 4).unwrap();
//! assert_eq!(slot, Slot { row: 5, column: 3 });
//!
//! let placed = apply_human_move(&mut board, slot.column, Color::Yellow).unwrap();
//! assert!(is_win(&board, Color::Yellow, placed));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod moves;

pub mod evaluator;

pub mod search;

pub mod engine;

pub mod session;

pub mod config;

pub mod arena;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of discs in a row needed to win
pub const CONNECT: usize = 4;

// lines must fit on the board in every direction
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
