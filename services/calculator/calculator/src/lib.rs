#[macro_use]
extern crate lazy_static;

use log::debug;

use telemetry::Measure;

pub use crate::config::{Config, LimitsConfig};
pub use crate::error::CalculatorError;
pub use crate::eval::evaluate;
pub use crate::expression::{parse, Expression, Operations};
pub use crate::validator::validate;
pub use operation::{Operation, OperationError, Value};

mod config;
mod error;
mod eval;
mod expression;
mod validator;

lazy_static! {
    static ref CALCULATE_MEASURE: Measure = Measure::new("calculator", "calculate");
}

/// Evaluates expressions such as `"9 + 3 * 2"` strictly left to right
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: Config,
}

impl Calculator {
    pub fn new(config: Config) -> Calculator {
        Calculator { config }
    }

    pub fn from_env() -> Result<Calculator, ::config::ConfigError> {
        Ok(Calculator::new(Config::from_env()?))
    }

    pub fn calculate(&self, expression: &str) -> Result<Value, CalculatorError> {
        self.calculate_optional(Some(expression))
    }

    /// `None` is rejected the same as an empty expression
    pub fn calculate_optional(&self, expression: Option<&str>) -> Result<Value, CalculatorError> {
        CALCULATE_MEASURE.stats(|| {
            let validated = validate(expression, &self.config.limits)?;
            let expression = parse(validated)?;
            debug!("Evaluating \"{}\"", expression);

            let (operands, operations) = expression.into_parts();
            let result = evaluate(&operands, operations)?;
            debug!("Evaluated \"{}\" to {}", validated, result);
            Ok(result)
        })
    }
}

pub fn calculate(expression: &str) -> Result<Value, CalculatorError> {
    Calculator::default().calculate(expression)
}
