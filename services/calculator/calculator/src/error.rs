use derive_more::Display;

use operation::OperationError;
use telemetry::IsErr;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[display(fmt = "Expression is empty")]
    EmptyExpression,

    #[display(fmt = "Expression length {} exceeds limit of {}", length, max)]
    ExpressionTooLong { length: usize, max: usize },

    #[display(fmt = "Invalid character {:?} at position {}", character, position)]
    InvalidCharacter { character: char, position: usize },

    #[display(fmt = "Missing operand")]
    MissingOperand,

    #[display(fmt = "Missing operator")]
    MissingOperator,

    #[display(fmt = "Unknown operator '{}'", _0)]
    UnknownOperator(char),

    #[display(fmt = "Operand out of range: {}", _0)]
    OperandOutOfRange(String),

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Integer overflow")]
    Overflow,
}

impl std::error::Error for CalculatorError {}

impl From<OperationError> for CalculatorError {
    fn from(e: OperationError) -> Self {
        match e {
            OperationError::UnknownOperator(symbol) => Self::UnknownOperator(symbol),
            OperationError::DivisionByZero => Self::DivisionByZero,
            OperationError::Overflow => Self::Overflow,
        }
    }
}

// Everything except an unresolvable operator is caused by the caller's input
impl IsErr for CalculatorError {
    fn is_err(&self) -> bool {
        matches!(self, CalculatorError::UnknownOperator(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CalculatorError::InvalidCharacter {
                character: 'a',
                position: 0
            }
            .to_string(),
            "Invalid character 'a' at position 0"
        );
        assert_eq!(
            CalculatorError::ExpressionTooLong {
                length: 12,
                max: 8
            }
            .to_string(),
            "Expression length 12 exceeds limit of 8"
        );
        assert_eq!(
            CalculatorError::OperandOutOfRange("99999999999".to_string()).to_string(),
            "Operand out of range: 99999999999"
        );
    }

    #[test]
    fn test_is_err() {
        assert!(CalculatorError::UnknownOperator('%').is_err());
        assert!(!CalculatorError::MissingOperand.is_err());
        assert!(!CalculatorError::DivisionByZero.is_err());
    }

    #[test]
    fn test_from_operation_error() {
        assert_eq!(
            CalculatorError::from(OperationError::DivisionByZero),
            CalculatorError::DivisionByZero
        );
        assert_eq!(
            CalculatorError::from(OperationError::UnknownOperator('^')),
            CalculatorError::UnknownOperator('^')
        );
    }
}
