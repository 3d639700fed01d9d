use log::{debug, warn};

use crate::utils::errors::ValidationError;

pub const OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];

/// Decides whether an input string may be handed to the parser
pub trait SyntaxOracle: Send + Sync {
    /// # Errors
    ///
    /// Returns the reason the input is rejected.
    fn check(&self, input: &str) -> Result<(), ValidationError>;

    fn accepts(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }
}

/// Accepts digit runs joined by single binary operators, nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticSyntax;

impl SyntaxOracle for ArithmeticSyntax {
    fn check(&self, input: &str) -> Result<(), ValidationError> {
        validate_expression_syntax(input)
    }
}

/// # Errors
///
/// Returns an error if the string is empty or blank, contains whitespace or
/// characters other than digits and `+ - * / ^`, starts with an operator,
/// has two operators in a row, or ends with an operator.
pub fn validate_expression_syntax(input: &str) -> Result<(), ValidationError> {
    debug!("Validating expression syntax: '{}'", input);

    if input.trim().is_empty() {
        warn!("Expression is empty");
        return Err(ValidationError::Empty);
    }

    let mut expect_operand = true;
    let mut last_operator = None;
    for (position, character) in input.chars().enumerate() {
        if character.is_whitespace() {
            warn!("Whitespace at position {} in '{}'", position, input);
            return Err(ValidationError::Whitespace(position));
        }

        if character.is_ascii_digit() {
            expect_operand = false;
        } else if OPERATORS.contains(&character) {
            if expect_operand {
                warn!(
                    "Operator '{}' at position {} has no left operand",
                    character, position
                );
                return Err(ValidationError::MisplacedOperator {
                    operator: character,
                    position,
                });
            }
            expect_operand = true;
            last_operator = Some(character);
        } else {
            warn!(
                "Unexpected character '{}' at position {} in '{}'",
                character, position, input
            );
            return Err(ValidationError::UnexpectedCharacter {
                character,
                position,
            });
        }
    }

    if expect_operand && let Some(operator) = last_operator {
        warn!("Expression '{}' ends with an operator", input);
        return Err(ValidationError::TrailingOperator(operator));
    }

    debug!("Expression syntax validation successful");
    Ok(())
}
