use log::trace;

use operation::Value;

use crate::error::CalculatorError;
use crate::expression::Operations;

/// Folds the operands strictly in textual order, each step applying the next
/// queued operation to the running total. No precedence is applied, so
/// `9 + 3 * 2` is `(9 + 3) * 2`.
pub fn evaluate(operands: &[Value], mut operations: Operations) -> Result<Value, CalculatorError> {
    let (first, rest) = operands
        .split_first()
        .ok_or(CalculatorError::MissingOperand)?;

    let result = rest.iter().try_fold(*first, |acc, &operand| {
        let operation = operations
            .next_operation()
            .ok_or(CalculatorError::MissingOperator)?;
        let next = operation.apply(acc, operand)?;
        trace!("{} {} {} = {}", acc, operation, operand, next);
        Ok::<_, CalculatorError>(next)
    })?;

    if !operations.is_empty() {
        return Err(CalculatorError::MissingOperand);
    }
    Ok(result)
}
