mod config;
mod error;
mod game;
mod player;
mod summary;
pub use config::*;
pub use error::*;
pub use game::*;
pub use player::*;
pub use summary::*;
