//! Depth-limited minimax search with alpha-beta pruning

use log::debug;
use static_assertions::*;

use std::time::Instant;

use crate::{board::*, evaluator, evaluator::WIN_SCORE, win::wins, HEIGHT, WIDTH};

/// The deepest search that can be requested, one ply per cell
pub const MAX_DEPTH: usize = WIDTH * HEIGHT;

/// Bound used for the initial search window
pub const INFINITY: i32 = i32::MAX;

// win scores carry the remaining depth on top of WIN_SCORE
const_assert!((WIN_SCORE as i64) + (MAX_DEPTH as i64) < INFINITY as i64);

/// The outcome of a search: the chosen drop target and its score
///
/// `slot` is `None` only when the board has no legal moves, or when the
/// search was cut off at depth 0.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub slot: Option<Slot>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { slot: None, score }
    }

    /// Whether the score reports a forced win for the maximizing side
    pub fn is_forced_win(&self) -> bool {
        self.score >= WIN_SCORE
    }

    /// Whether the score reports a forced loss for the maximizing side
    pub fn is_forced_loss(&self) -> bool {
        self.score <= -WIN_SCORE
    }

    /// Converts a decided score from a search of `depth` plies into the number
    /// of plies until the deciding disc is placed
    pub fn plies_to_decision(&self, depth: usize) -> Option<usize> {
        let margin = self.score.abs() - WIN_SCORE;
        if margin < 0 {
            return None;
        }
        Some(depth.saturating_add(1).saturating_sub(margin as usize))
    }
}

/// A minimax searcher playing for a fixed side
///
/// # Position Scoring
/// Scores are from the point of view of the `maximizer`. Placing a winning disc
/// scores `WIN_SCORE` plus the depth remaining at that point, so nearer wins
/// (and farther losses) are preferred. Other positions at the depth limit are
/// scored by [`evaluator::score`], and a full board scores 0.
#[derive(Clone, Debug)]
pub struct Searcher {
    maximizer: Color,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` that maximizes for `maximizer`
    pub fn new(maximizer: Color) -> Self {
        Self {
            maximizer,
            node_count: 0,
        }
    }

    pub fn maximizer(&self) -> Color {
        self.maximizer
    }

    /// Performs game tree search to `depth` plies within the (`alpha`, `beta`) window
    ///
    /// `depth` is capped at [`MAX_DEPTH`].
    /// Columns are tried in ascending order and the first column reaching the
    /// best score is kept.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;
        // deeper than the board can go only inflates win scores
        let depth = depth.min(MAX_DEPTH);

        let moves = board.legal_moves();
        // draw
        if moves.len() == 0 {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(evaluator::score(board, self.maximizer));
        }

        let (color, win_score) = if maximizing {
            (self.maximizer, WIN_SCORE + depth as i32)
        } else {
            (self.maximizer.other(), -(WIN_SCORE + depth as i32))
        };

        let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });
        for slot in moves {
            let mut next = *board;
            next.place(slot.row, slot.column, color);

            // a win on this ply beats anything deeper in the tree
            if wins(&next, color, slot.row, slot.column) {
                return SearchResult {
                    slot: Some(slot),
                    score: win_score,
                };
            }

            let child = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                if child.score > best.score {
                    best = SearchResult {
                        slot: Some(slot),
                        score: child.score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best = SearchResult {
                        slot: Some(slot),
                        score: child.score,
                    };
                }
                beta = beta.min(best.score);
            }

            // the other side will never allow this branch
            if alpha >= beta {
                break;
            }
        }

        best
    }

    /// Searches `depth` plies with a full window, the maximizer to move
    pub fn best_move(&mut self, board: &Board, depth: usize) -> SearchResult {
        let start = Instant::now();
        let nodes_before = self.node_count;

        let result = self.minimax(board, depth, -INFINITY, INFINITY, true);

        debug!(
            "{} searched {} plies: {} nodes in {:.3}ms, best {:?} score {}",
            self.maximizer.name(),
            depth,
            self.node_count - nodes_before,
            start.elapsed().as_secs_f64() * 1000.0,
            result.slot,
            result.score
        );
        result
    }
}
