use std::collections::VecDeque;

use nom::IResult;
use nom::{
    branch::alt,
    character::complete::{digit1, one_of, space0},
    combinator::{all_consuming, map},
    multi::many0,
    sequence::{preceded, terminated},
};

use operation::{Operation, Value};

use super::{Expression, Operations};
use crate::error::CalculatorError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Operand(&'a str),
    Operator(char),
}

fn parse_token(i: &str) -> IResult<&str, Token<'_>> {
    preceded(
        space0,
        alt((
            map(digit1, Token::Operand),
            map(one_of("+-*/"), Token::Operator),
        )),
    )(i)
}

fn parse_tokens(i: &str) -> IResult<&str, Vec<Token<'_>>> {
    all_consuming(terminated(many0(parse_token), space0))(i)
}

fn parse_operand(digits: &str) -> Result<Value, CalculatorError> {
    digits
        .parse()
        .map_err(|_| CalculatorError::OperandOutOfRange(digits.to_string()))
}

fn unexpected(input: &str, remaining: &str) -> CalculatorError {
    match remaining.chars().next() {
        Some(character) => CalculatorError::InvalidCharacter {
            character,
            position: input.len() - remaining.len(),
        },
        None => CalculatorError::MissingOperand,
    }
}

/// Splits an expression into its operands and the queue of operations
/// between them, rejecting anything that does not alternate operand and
/// operator starting and ending with an operand.
pub fn parse(i: &str) -> Result<Expression, CalculatorError> {
    let tokens = match parse_tokens(i) {
        Ok((_, tokens)) => tokens,
        Err(nom::Err::Error((remaining, _))) | Err(nom::Err::Failure((remaining, _))) => {
            return Err(unexpected(i, remaining))
        }
        Err(nom::Err::Incomplete(_)) => return Err(CalculatorError::MissingOperand),
    };

    let mut digits = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut symbols = Vec::with_capacity(tokens.len() / 2);

    for token in tokens {
        let expecting_operand = digits.len() == symbols.len();
        match (token, expecting_operand) {
            (Token::Operand(operand), true) => digits.push(operand),
            (Token::Operand(_), false) => return Err(CalculatorError::MissingOperator),
            (Token::Operator(_), true) => return Err(CalculatorError::MissingOperand),
            (Token::Operator(symbol), false) => symbols.push(symbol),
        }
    }

    // Nothing parsed or a trailing operator
    if digits.len() == symbols.len() {
        return Err(CalculatorError::MissingOperand);
    }

    // Values are only converted once the structure is known to be sound
    let operations = symbols
        .into_iter()
        .map(Operation::from_symbol)
        .collect::<Result<VecDeque<_>, _>>()?;
    let operations = Operations::new(operations)?;
    let operands = digits
        .into_iter()
        .map(parse_operand)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expression {
        operands,
        operations,
    })
}
