use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tricheckers::DEFAULT_DEPTH;

/// How a human-controlled color (Red or Blue) picks its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// A uniformly random legal move.
    Random,
    /// Always the first legal move.
    First,
}

/// Settings for a series of games, usually read from a JSON file.
///
/// Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// How many plies the green player looks ahead.
    pub search_depth: i32,
    /// A game that has not ended after this many turns is called off.
    pub max_turns: usize,
    /// Use alpha-beta pruning. Turning this off gives the same moves, slower.
    pub pruning: bool,
    pub red: ControllerKind,
    pub blue: ControllerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_DEPTH,
            max_turns: 500,
            pruning: true,
            red: ControllerKind::Random,
            blue: ControllerKind::Random,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse config file '{}'", path.display()))
    }
}
