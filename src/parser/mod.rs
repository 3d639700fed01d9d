//! Text to expression tree

mod core;
mod errors;

pub use self::core::{parse, parse_with_config};
pub use errors::ParseError;

#[cfg(test)]
mod tests;
