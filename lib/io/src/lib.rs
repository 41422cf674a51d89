//! Text rendering and parsing for `twiddling` bit sets.

pub mod parse;
pub mod render;

pub use parse::{parse_bitset, parse_indices, ParseError};
pub use render::render;
