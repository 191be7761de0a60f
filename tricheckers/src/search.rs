//! Depth-limited minimax with alpha-beta pruning for the automated player.
//!
//! The search models a two-player game on the three-player board: Green is
//! the maximizing side and Red the only opponent, at every ply. Blue pieces
//! are never moved during lookahead (they can still be captured).
//!
//! The tree is explored on the caller's board through [`Speculation`]
//! guards, so the board is back in its original state whenever a search
//! returns, including after a pruning cutoff or an error.

use tracing::{debug, trace};

use crate::{legal_moves, Board, Color, Move, SearchError, Speculation};

/// The depth used by the automated player.
pub const DEFAULT_DEPTH: i32 = 2;

/// The side whose evaluation the search tries to increase.
pub const MAXIMIZER: Color = Color::Green;

/// The side whose evaluation the search tries to decrease.
pub const MINIMIZER: Color = Color::Red;

/// Score of a node where the side to move has no legal move,
/// `-INF` for the maximizer and `INF` for the minimizer.
pub const INF: i32 = i32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The score of the root node.
    pub score: i32,
    /// The first move reaching `score`, or `None` if Green can't move
    /// (or `depth` was 0).
    pub best_move: Option<Move>,
    /// Number of nodes visited, including the root.
    pub nodes: u64,
}

/// Static evaluation: the number of green pieces.
pub fn evaluate(board: &Board) -> i32 {
    board.count(MAXIMIZER) as i32
}

/// Finds the best move for Green, looking `depth` plies ahead.
///
/// The board is used as scratch space, but it is unchanged when this returns.
/// The chosen move is not applied.
pub fn search(board: &mut Board, depth: i32) -> Result<SearchResult, SearchError> {
    run(board, depth, true)
}

/// Like [`search()`], but explores the full tree without pruning.
///
/// Always produces the same result as `search()` while visiting more nodes.
pub fn minimax(board: &mut Board, depth: i32) -> Result<SearchResult, SearchError> {
    run(board, depth, false)
}

fn run(board: &mut Board, depth: i32, pruning: bool) -> Result<SearchResult, SearchError> {
    if depth < 0 {
        return Err(SearchError::InvalidDepth { depth });
    }
    let mut searcher = Searcher {
        pruning,
        root_depth: depth,
        nodes: 0,
    };
    let (score, best_move) = searcher.alpha_beta(board, depth, -INF, INF, true)?;
    debug!(
        score,
        best_move = ?best_move,
        nodes = searcher.nodes,
        depth,
        pruning,
        "Search finished"
    );
    Ok(SearchResult {
        score,
        best_move,
        nodes: searcher.nodes,
    })
}

struct Searcher {
    pruning: bool,
    root_depth: i32,
    nodes: u64,
}

impl Searcher {
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<(i32, Option<Move>), SearchError> {
        self.nodes += 1;

        if depth == 0 {
            return Ok((evaluate(board), None));
        }

        let mover = if maximizing { MAXIMIZER } else { MINIMIZER };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mv in legal_moves(board, mover) {
            let score = {
                let mut next = Speculation::apply(board, mv)
                    .map_err(|err| SearchError::InvalidMove { mv, err })?;
                self.alpha_beta(&mut next, depth - 1, alpha, beta, !maximizing)?
                    .0
            };

            // Strict comparisons: the first of several equally good moves wins.
            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                    if depth == self.root_depth {
                        trace!(score, %mv, "New best move");
                    }
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        Ok((best_score, best_move))
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::{apply, Cell};

    const MIDGAME: &str = "
        . . . . . . . . . . . . . . .
        . . . . . . G . G . . . . . .
        . . . . . G . . . G . . . . .
        . . . . . . R . . . G . . . .
        . . . . G . . . . . . B . . .
        . . . . . R . . B . . . . . .
        . . . . . . . . . . . . . . .
        . . . . . . . R . . . . . . .
        . . . . . . . . . . . . . . .
        . . . . . . . . . . . . . . .
        . . . . . . . . . . . . . . .
        . . R . . . . . . . . . B . .
        . R . . . . . . . . . B . B .
        R . . . . . . . . . . . . . .
        . . . . . . . . . . . . . . B
    ";

    fn midgame() -> Board {
        MIDGAME.parse().unwrap()
    }

    /// Green at (4, 4) next to a lone red piece at (5, 5).
    fn lone_red() -> Board {
        let mut board = Board::empty();
        board.set(4, 4, Cell::Occupied(Color::Green));
        board.set(5, 5, Cell::Occupied(Color::Red));
        board
    }

    quickcheck! {
        fn depth_zero_is_green_count(board: Board) -> bool {
            let mut scratch = board.clone();
            let result = search(&mut scratch, 0).unwrap();
            result.score == board.count(Color::Green) as i32
                && result.best_move.is_none()
                && result.nodes == 1
                && scratch == board
        }

        fn search_leaves_board_untouched(board: Board, depth: u8) -> TestResult {
            if legal_moves(&board, Color::Green).is_empty() {
                return TestResult::discard();
            }
            let mut scratch = board.clone();
            let _ = search(&mut scratch, i32::from(depth % 3)).unwrap();
            TestResult::from_bool(scratch == board)
        }

        fn pruning_does_not_change_the_result(board: Board) -> bool {
            let pruned = search(&mut board.clone(), 2).unwrap();
            let full = minimax(&mut board.clone(), 2).unwrap();
            pruned.score == full.score
                && pruned.best_move == full.best_move
                && pruned.nodes <= full.nodes
        }
    }

    #[test]
    fn midgame_search_leaves_board_untouched() {
        let original = midgame();
        let mut board = original.clone();
        for depth in 0..=3 {
            search(&mut board, depth).unwrap();
            assert_eq!(board, original, "depth {}", depth);
        }
    }

    #[test]
    fn midgame_pruning_matches_minimax() {
        for depth in 1..=3 {
            let pruned = search(&mut midgame(), depth).unwrap();
            let full = minimax(&mut midgame(), depth).unwrap();
            assert_eq!(pruned.score, full.score, "depth {}", depth);
            assert_eq!(pruned.best_move, full.best_move, "depth {}", depth);
            assert!(pruned.best_move.is_some());
        }
        let pruned = search(&mut midgame(), 3).unwrap();
        let full = minimax(&mut midgame(), 3).unwrap();
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn chosen_move_is_legal() {
        let mut board = midgame();
        let result = search(&mut board, DEFAULT_DEPTH).unwrap();
        let mv = result.best_move.unwrap();
        assert!(legal_moves(&board, Color::Green).contains(&mv));
    }

    #[test]
    fn jump_ties_with_step_at_depth_one() {
        let mut board = lone_red();
        let jump = Move::new((4, 4), (6, 6));
        assert!(legal_moves(&board, Color::Green).contains(&jump));

        // Capturing red does not change the green count, so the step that
        // is generated first keeps the tie.
        let result = search(&mut board, 1).unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.best_move, Some(Move::new((4, 4), (5, 3))));
    }

    #[test]
    fn jump_leaves_red_without_reply_at_depth_two() {
        let mut board = lone_red();
        let jump = Move::new((4, 4), (6, 6));

        let result = search(&mut board, 2).unwrap();
        assert_eq!(result.best_move, Some(jump));
        assert_eq!(result.score, INF);
        assert_eq!(board, lone_red());

        assert_eq!(apply(&mut board, jump), Ok(Some(Color::Red)));
        assert_eq!(board.get(6, 6), Cell::Occupied(Color::Green));
        assert_eq!(board.get(5, 5), Cell::Empty);
        assert_eq!(board.get(4, 4), Cell::Empty);
    }

    #[test]
    fn no_green_moves() {
        let mut board = Board::empty();
        board.set(14, 3, Cell::Occupied(Color::Green));
        board.set(7, 7, Cell::Occupied(Color::Red));
        let result = search(&mut board, DEFAULT_DEPTH).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -INF);
    }

    #[test]
    fn negative_depth_is_rejected() {
        let mut board = Board::initialize();
        assert!(matches!(
            search(&mut board, -1),
            Err(SearchError::InvalidDepth { depth: -1 })
        ));
        assert!(matches!(
            minimax(&mut board, -3),
            Err(SearchError::InvalidDepth { depth: -3 })
        ));
    }
}
