use tracing::{debug, trace};
use tricheckers::{apply, legal_moves, Board, Color, Move, ROTATION};

use crate::config::GameConfig;
use crate::error::IllegalMove;
use crate::player::Lineup;

#[derive(Debug)]
pub enum GameResult {
    /// Only one color has pieces left.
    Won { color: Color },
    /// The turn limit was reached. Piece counts are in turn order.
    TurnLimit { pieces: [usize; 3] },
    /// Nobody moved for a whole round, so nothing will ever change.
    Stalemate,
    IllegalMoveByPlayer { color: Color, err: IllegalMove },
}

/// Summarizes the outcome of a single turn.
#[derive(Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved { mv: Move, captured: Option<Color> },
    Passed,
}

/// The board together with the turn counter.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: usize,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::initialize(), 0)
    }

    pub fn from_board(board: Board, turn: usize) -> Self {
        Self { board, turn }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn active_color(&self) -> Color {
        ROTATION[self.turn % ROTATION.len()]
    }

    /// The winner, once every other color has lost all of its pieces.
    pub fn winner(&self) -> Option<Color> {
        match self.board.colors_remaining()[..] {
            [color] => Some(color),
            _ => None,
        }
    }

    /// Plays `mv` for the active color, or passes if it is `None`.
    ///
    /// The turn counter only advances if the move was legal.
    pub fn execute_turn(&mut self, mv: Option<Move>) -> Result<TurnOutcome, IllegalMove> {
        let color = self.active_color();
        let outcome = match mv {
            None => TurnOutcome::Passed,
            Some(mv) => {
                if !legal_moves(&self.board, color).contains(&mv) {
                    return Err(IllegalMove::NotAmongLegalMoves { color, mv });
                }
                let captured = apply(&mut self.board, mv)
                    .map_err(|err| IllegalMove::InvalidMoveShape { mv, err })?;
                TurnOutcome::Moved { mv, captured }
            }
        };
        self.turn += 1;
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays a game from the initial position.
///
/// Returns an error only when a player fails to produce a move, not when an
/// illegal move is played.
pub fn play_game(lineup: &mut Lineup, config: &GameConfig) -> anyhow::Result<GameResult> {
    play_game_from(Game::new(), lineup, config)
}

pub fn play_game_from(
    mut game: Game,
    lineup: &mut Lineup,
    config: &GameConfig,
) -> anyhow::Result<GameResult> {
    let mut consecutive_passes = 0;
    loop {
        if let Some(color) = game.winner() {
            return Ok(GameResult::Won { color });
        }
        if consecutive_passes == ROTATION.len() {
            return Ok(GameResult::Stalemate);
        }
        if game.turn >= config.max_turns {
            return Ok(GameResult::TurnLimit {
                pieces: ROTATION.map(|color| game.board.count(color)),
            });
        }

        let color = game.active_color();
        let player = lineup.player_mut(color);
        let mv = player.choose_move(&mut game.board, color)?;
        match game.execute_turn(mv) {
            Ok(TurnOutcome::Passed) => {
                debug!(turn = game.turn, %color, "Passed");
                consecutive_passes += 1;
            }
            Ok(TurnOutcome::Moved { mv, captured }) => {
                debug!(turn = game.turn, %color, %mv, ?captured, "Moved");
                consecutive_passes = 0;
            }
            Err(err) => return Ok(GameResult::IllegalMoveByPlayer { color, err }),
        }
        trace!("\n{}", game.board);
    }
}
