use crate::config::LimitsConfig;
use crate::error::CalculatorError;

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn is_accepted(c: char) -> bool {
    c.is_ascii_digit() || c == ' ' || is_operator(c)
}

/// Checks an expression is present, within the configured length and made up
/// only of digits, operators and spaces.
///
/// Structure is not checked here, `"1 1"` passes and is rejected by the parser.
pub fn validate<'a>(
    expression: Option<&'a str>,
    limits: &LimitsConfig,
) -> Result<&'a str, CalculatorError> {
    let expression = match expression {
        Some(e) if !e.is_empty() => e,
        _ => return Err(CalculatorError::EmptyExpression),
    };

    let length = expression.chars().count();
    if length > limits.length {
        return Err(CalculatorError::ExpressionTooLong {
            length,
            max: limits.length,
        });
    }

    match expression.char_indices().find(|(_, c)| !is_accepted(*c)) {
        Some((position, character)) => Err(CalculatorError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(expression),
    }
}
