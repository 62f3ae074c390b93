pub use board::*;
pub use cell::*;
pub use decision::*;
pub use errors::*;
pub use player::*;
pub use protocol::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cell;
mod decision;
mod errors;
mod player;
mod protocol;
mod visualization;
