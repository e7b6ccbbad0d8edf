//! Core word-search logic: the letter board and its generation, placement
//! directions, word lookup, and the tiered vocabulary bank.

mod board;
mod direction;
pub mod finder;
pub mod wordbank;

pub use board::{Board, Cell, PlacedWord};
pub use direction::Direction;
