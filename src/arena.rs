//! Engine-vs-engine matches between two search depths
//!
//! Every distinct position reachable in a fixed number of opening plies is
//! played out twice, once with each engine moving first. Games are independent
//! and run in parallel; each owns its boards from start to finish.

use anyhow::{bail, Result};
use indicatif::*;
use log::info;
use rayon::prelude::*;

use std::collections::HashSet;
use std::time::Instant;

use crate::{board::*, config::MAX_OPENING_PLIES, engine, search::MAX_DEPTH, win::wins};

/// Aggregated results of an arena run, from the point of view of engine one
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct ArenaReport {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl ArenaReport {
    /// Match points for engine one, counting a draw as half a win
    pub fn points(&self) -> f64 {
        self.wins as f64 + self.draws as f64 / 2.0
    }
}

/// Every distinct, undecided position after `plies` moves from the empty
/// board, Yellow moving first
pub fn openings(plies: usize) -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut openings = Vec::new();
    extend_openings(Board::new(), Color::Yellow, plies, &mut seen, &mut openings);
    openings
}

fn extend_openings(
    board: Board,
    color: Color,
    plies: usize,
    seen: &mut HashSet<Board>,
    openings: &mut Vec<Board>,
) {
    if plies == 0 {
        // transpositions reach the same position more than once
        if seen.insert(board) {
            openings.push(board);
        }
        return;
    }
    for slot in board.legal_moves() {
        let mut next = board;
        next.place(slot.row, slot.column, color);
        if wins(&next, color, slot.row, slot.column) {
            continue;
        }
        extend_openings(next, color.other(), plies - 1, seen, openings);
    }
}

/// Plays `board` out to the end with `to_move` on move, each side searching
/// to its own depth. Returns the winner, or `None` for a draw.
pub fn play_out(
    mut board: Board,
    mut to_move: Color,
    yellow_depth: usize,
    red_depth: usize,
) -> Option<Color> {
    loop {
        let depth = match to_move {
            Color::Yellow => yellow_depth,
            Color::Red => red_depth,
        };
        let slot = engine::compute_ai_move(&board, to_move, depth)?;
        board.place(slot.row, slot.column, to_move);
        if engine::is_win(&board, to_move, slot) {
            return Some(to_move);
        }
        to_move = to_move.other();
    }
}

/// Plays engine one (searching `depth_one` plies) against engine two
/// (searching `depth_two` plies) from every opening of `opening_plies` moves
pub fn run(
    depth_one: usize,
    depth_two: usize,
    opening_plies: usize,
    silent: bool,
) -> Result<ArenaReport> {
    if opening_plies > MAX_OPENING_PLIES {
        bail!("openings longer than {} plies are not supported", MAX_OPENING_PLIES);
    }
    for &depth in [depth_one, depth_two].iter() {
        if depth == 0 || depth > MAX_DEPTH {
            bail!("search depth {} must be between 1 and {}", depth, MAX_DEPTH);
        }
    }
    let start = Instant::now();

    let openings = openings(opening_plies);
    let to_move = if opening_plies % 2 == 0 {
        Color::Yellow
    } else {
        Color::Red
    };
    // engine one plays yellow in the first seating and red in the second
    let games: Vec<(Board, Color)> = openings
        .iter()
        .flat_map(|&board| vec![(board, Color::Yellow), (board, Color::Red)])
        .collect();

    let progress = if silent {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(games.len() as u64)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let report = games
        .par_iter()
        .map(|&(board, engine_one)| {
            let (yellow_depth, red_depth) = match engine_one {
                Color::Yellow => (depth_one, depth_two),
                Color::Red => (depth_two, depth_one),
            };
            let winner = play_out(board, to_move, yellow_depth, red_depth);
            progress.inc(1);

            let mut report = ArenaReport {
                games: 1,
                ..ArenaReport::default()
            };
            match winner {
                Some(color) if color == engine_one => report.wins = 1,
                Some(_) => report.losses = 1,
                None => report.draws = 1,
            }
            report
        })
        .reduce(ArenaReport::default, |a, b| ArenaReport {
            games: a.games + b.games,
            wins: a.wins + b.wins,
            losses: a.losses + b.losses,
            draws: a.draws + b.draws,
        });

    progress.finish();
    info!(
        "arena: depth {} vs depth {} over {} openings: +{} -{} ={} in {}",
        depth_one,
        depth_two,
        openings.len(),
        report.wins,
        report.losses,
        report.draws,
        HumanDuration(start.elapsed())
    );

    Ok(report)
}
