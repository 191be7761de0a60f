use std::collections::BTreeMap;

use serde::Serialize;
use tricheckers::{Color, ROTATION};

use crate::game::GameResult;

/// Tally of the results of several games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub games: usize,
    pub wins: BTreeMap<Color, usize>,
    pub illegal_moves: BTreeMap<Color, usize>,
    pub turn_limits: usize,
    pub stalemates: usize,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self {
            wins: ROTATION.into_iter().map(|color| (color, 0)).collect(),
            illegal_moves: ROTATION.into_iter().map(|color| (color, 0)).collect(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        match result {
            GameResult::Won { color } => *self.wins.entry(*color).or_default() += 1,
            GameResult::IllegalMoveByPlayer { color, .. } => {
                *self.illegal_moves.entry(*color).or_default() += 1
            }
            GameResult::TurnLimit { .. } => self.turn_limits += 1,
            GameResult::Stalemate => self.stalemates += 1,
        }
    }
}

impl std::fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "End result after {} games:", self.games)?;
        for color in ROTATION {
            let illegal = self.illegal_moves.get(&color).copied().unwrap_or(0);
            let paren = if illegal > 0 {
                format!(" ({} illegal moves)", illegal)
            } else {
                String::new()
            };
            writeln!(
                f,
                "- {} wins by {}{}",
                self.wins.get(&color).copied().unwrap_or(0),
                color,
                paren
            )?;
        }
        writeln!(f, "- {} games hit the turn limit", self.turn_limits)?;
        write!(f, "- {} stalemates", self.stalemates)
    }
}
