use std::collections::VecDeque;
use std::fmt;

use operation::{Operation, Value};

use crate::error::CalculatorError;

pub use parser::parse;

mod parser;

/// The operations of an expression in the order they are applied
#[derive(Debug, Clone, PartialEq)]
pub struct Operations(VecDeque<Operation>);

impl Operations {
    pub fn new(operations: VecDeque<Operation>) -> Result<Operations, CalculatorError> {
        if operations.is_empty() {
            return Err(CalculatorError::MissingOperator);
        }
        Ok(Operations(operations))
    }

    pub fn next_operation(&mut self) -> Option<Operation> {
        self.0.pop_front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    operands: Vec<Value>,
    operations: Operations,
}

impl Expression {
    pub fn operands(&self) -> &[Value] {
        &self.operands
    }

    pub fn operations(&self) -> &Operations {
        &self.operations
    }

    pub fn into_parts(self) -> (Vec<Value>, Operations) {
        (self.operands, self.operations)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operands = self.operands.iter();
        if let Some(first) = operands.next() {
            write!(f, "{}", first)?;
        }
        for (operation, operand) in self.operations.iter().zip(operands) {
            write!(f, " {} {}", operation, operand)?;
        }
        Ok(())
    }
}
