use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tricheckers::{legal_moves, minimax, search, Board, Color, Move};

use crate::config::{ControllerKind, GameConfig};

/// Something that picks moves for one color.
pub trait Player {
    fn name(&self) -> &str;

    /// Returns the move to play, or `None` to pass.
    ///
    /// The board may be used as scratch space, but must be left as it was.
    fn choose_move(&mut self, board: &mut Board, color: Color) -> anyhow::Result<Option<Move>>;
}

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &mut Board, color: Color) -> anyhow::Result<Option<Move>> {
        Ok(legal_moves(board, color).choose(&mut self.rng).copied())
    }
}

pub struct FirstMovePlayer;

impl Player for FirstMovePlayer {
    fn name(&self) -> &str {
        "first"
    }

    fn choose_move(&mut self, board: &mut Board, color: Color) -> anyhow::Result<Option<Move>> {
        Ok(legal_moves(board, color).first().copied())
    }
}

/// The automated green player.
pub struct SearchPlayer {
    pub depth: i32,
    pub pruning: bool,
}

impl Player for SearchPlayer {
    fn name(&self) -> &str {
        "search"
    }

    fn choose_move(&mut self, board: &mut Board, color: Color) -> anyhow::Result<Option<Move>> {
        if color != tricheckers::MAXIMIZER {
            anyhow::bail!("The search can only play {}, not {}", tricheckers::MAXIMIZER, color);
        }
        let result = if self.pruning {
            search(board, self.depth)?
        } else {
            minimax(board, self.depth)?
        };
        debug!(
            score = result.score,
            nodes = result.nodes,
            "Green chose {:?}",
            result.best_move
        );
        Ok(result.best_move)
    }
}

/// One player per color.
pub struct Lineup {
    red: Box<dyn Player>,
    blue: Box<dyn Player>,
    green: Box<dyn Player>,
}

impl Lineup {
    pub fn new(red: Box<dyn Player>, blue: Box<dyn Player>, green: Box<dyn Player>) -> Self {
        Self { red, blue, green }
    }

    /// Red and Blue as configured, Green searching.
    ///
    /// Random players are seeded from `rng`.
    pub fn from_config(config: &GameConfig, rng: &mut StdRng) -> Self {
        let mut controller = |kind: ControllerKind| -> Box<dyn Player> {
            match kind {
                ControllerKind::Random => Box::new(RandomPlayer::new(rng.gen())),
                ControllerKind::First => Box::new(FirstMovePlayer),
            }
        };
        let red = controller(config.red);
        let blue = controller(config.blue);
        Self {
            red,
            blue,
            green: Box::new(SearchPlayer {
                depth: config.search_depth,
                pruning: config.pruning,
            }),
        }
    }

    pub fn player_mut(&mut self, color: Color) -> &mut dyn Player {
        match color {
            Color::Red => self.red.as_mut(),
            Color::Blue => self.blue.as_mut(),
            Color::Green => self.green.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_player_is_reproducible() {
        let mut board = Board::initialize();
        let mut first = RandomPlayer::new(7);
        let mut second = RandomPlayer::new(7);
        for _ in 0..10 {
            let a = first.choose_move(&mut board, Color::Red).unwrap();
            let b = second.choose_move(&mut board, Color::Red).unwrap();
            assert_eq!(a, b);
            assert!(legal_moves(&board, Color::Red).contains(&a.unwrap()));
        }
    }

    #[test]
    fn search_player_leaves_board_untouched() {
        let mut board = Board::initialize();
        let mut player = SearchPlayer {
            depth: 3,
            pruning: true,
        };
        let mv = player.choose_move(&mut board, Color::Green).unwrap();
        assert_eq!(board, Board::initialize());
        assert!(legal_moves(&board, Color::Green).contains(&mv.unwrap()));
    }

    #[test]
    fn search_player_only_plays_green() {
        let mut player = SearchPlayer {
            depth: 2,
            pruning: true,
        };
        assert!(player
            .choose_move(&mut Board::initialize(), Color::Blue)
            .is_err());
    }

    #[test]
    fn negative_depth_is_an_error() {
        let mut player = SearchPlayer {
            depth: -1,
            pruning: false,
        };
        let err = player
            .choose_move(&mut Board::initialize(), Color::Green)
            .unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn lineup_from_config() {
        let config = GameConfig {
            red: ControllerKind::First,
            ..GameConfig::default()
        };
        let mut lineup = Lineup::from_config(&config, &mut StdRng::seed_from_u64(0));
        assert_eq!(lineup.player_mut(Color::Red).name(), "first");
        assert_eq!(lineup.player_mut(Color::Blue).name(), "random");
        assert_eq!(lineup.player_mut(Color::Green).name(), "search");
    }
}
