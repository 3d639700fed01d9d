use std::str::SplitWhitespace;

use crate::serialization::errors::LoadError;

/// Whitespace-delimited tokens with a running position
#[derive(Debug, Clone)]
pub struct TokenStream<'s> {
    tokens: SplitWhitespace<'s>,
    position: usize,
}

impl<'s> TokenStream<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            position: 0,
        }
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// # Errors
    ///
    /// Returns [`LoadError::UnexpectedEnd`] naming `expected` when the stream
    /// is exhausted.
    pub fn next_token(&mut self, expected: &'static str) -> Result<&'s str, LoadError> {
        let token = self.tokens.next().ok_or(LoadError::UnexpectedEnd {
            expected,
            position: self.position,
        })?;
        self.position += 1;
        Ok(token)
    }

    /// Unconsumed tokens joined by single spaces
    pub fn remaining(&self) -> String {
        self.tokens.clone().collect::<Vec<_>>().join(" ")
    }

    pub fn is_exhausted(&self) -> bool {
        self.tokens.clone().next().is_none()
    }
}
