use std::fmt;

use derive_more::Display;
use log::warn;
use strum_macros::{AsRefStr, EnumIter, EnumString};

pub type Value = i32;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[display(fmt = "Unknown operator '{}'", _0)]
    UnknownOperator(char),

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Integer overflow")]
    Overflow,
}

impl std::error::Error for OperationError {}

/// A binary operation combining an accumulator with the next operand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
pub enum Operation {
    #[strum(serialize = "+")]
    Add,

    #[strum(serialize = "-")]
    Sub,

    #[strum(serialize = "*")]
    Mul,

    #[strum(serialize = "/")]
    Div,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Result<Operation, OperationError> {
        let mut buf = [0; 4];
        symbol.encode_utf8(&mut buf).parse().map_err(|_| {
            warn!("No operation registered for symbol {:?}", symbol);
            OperationError::UnknownOperator(symbol)
        })
    }

    pub fn symbol(&self) -> &str {
        self.as_ref()
    }

    /// Division truncates toward zero. Results that do not fit in a `Value`
    /// are reported as `OperationError::Overflow` rather than wrapping.
    pub fn apply(self, accumulator: Value, operand: Value) -> Result<Value, OperationError> {
        let result = match self {
            Self::Add => accumulator.checked_add(operand),
            Self::Sub => accumulator.checked_sub(operand),
            Self::Mul => accumulator.checked_mul(operand),
            Self::Div if operand == 0 => return Err(OperationError::DivisionByZero),
            Self::Div => accumulator.checked_div(operand),
        };
        result.ok_or(OperationError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_from_symbol() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Operation::from_symbol('+')?, Operation::Add);
        assert_eq!(Operation::from_symbol('-')?, Operation::Sub);
        assert_eq!(Operation::from_symbol('*')?, Operation::Mul);
        assert_eq!(Operation::from_symbol('/')?, Operation::Div);

        for op in Operation::iter() {
            let mut symbol = op.symbol().chars();
            assert_eq!(Operation::from_symbol(symbol.next().unwrap())?, op);
            assert_eq!(symbol.next(), None);
            assert_eq!(op.symbol().parse::<Operation>()?, op);
            assert_eq!(op.to_string(), op.symbol());
        }
        Ok(())
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            Operation::from_symbol('%'),
            Err(OperationError::UnknownOperator('%'))
        );
        assert_eq!(
            Operation::from_symbol('x'),
            Err(OperationError::UnknownOperator('x'))
        );
        assert_eq!(
            Operation::from_symbol('÷'),
            Err(OperationError::UnknownOperator('÷'))
        );
    }

    #[test]
    fn test_apply() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Operation::Add.apply(2, 3)?, 5);
        assert_eq!(Operation::Sub.apply(1, 3)?, -2);
        assert_eq!(Operation::Mul.apply(-4, 3)?, -12);
        assert_eq!(Operation::Div.apply(12, 3)?, 4);
        Ok(())
    }

    #[test]
    fn test_division_truncates() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(Operation::Div.apply(7, 2)?, 3);
        assert_eq!(Operation::Div.apply(-7, 2)?, -3);
        assert_eq!(Operation::Div.apply(1, 3)?, 0);
        Ok(())
    }

    #[test]
    fn test_arithmetic_errors() {
        assert_eq!(
            Operation::Div.apply(5, 0),
            Err(OperationError::DivisionByZero)
        );
        assert_eq!(
            Operation::Add.apply(Value::MAX, 1),
            Err(OperationError::Overflow)
        );
        assert_eq!(
            Operation::Sub.apply(Value::MIN, 1),
            Err(OperationError::Overflow)
        );
        assert_eq!(
            Operation::Mul.apply(Value::MAX, 2),
            Err(OperationError::Overflow)
        );
        assert_eq!(
            Operation::Div.apply(Value::MIN, -1),
            Err(OperationError::Overflow)
        );
    }
}
