mod core;
mod errors;

pub use self::core::{Evaluation, ExpressionEngine};
pub use errors::EngineError;

#[cfg(test)]
mod tests;
