pub use board::*;
pub use errors::*;
pub use moves::*;
pub use search::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod moves;
mod search;
mod visualization;
