
use crate::parsing::source::SourceOffset;
use crate::stack::StackError;

use thiserror::Error;

/// Everything that can go wrong while evaluating an expression. Each
/// error terminates the evaluation at the point it is detected.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum ExprError {
  #[error("Unsupported character '{ch}' at position {position}")]
  InvalidCharacter {
    ch: char,
    /// Character index into the raw, unnormalized input.
    position: usize,
  },
  #[error("Invalid number '{0}'")]
  InvalidNumber(String),
  #[error("Number '{0}' is out of range")]
  NumberOutOfRange(String),
  #[error("Unsupported function '{0}'")]
  UnsupportedFunction(String),
  #[error("Cannot parse expression at '{ch}' (offset {position})")]
  Unparseable {
    ch: char,
    position: SourceOffset,
  },
  #[error("Mismatched parentheses")]
  MismatchedParentheses,
  #[error("Percent sign must directly follow a value (offset {0})")]
  IllegalPercentPosition(SourceOffset),
  #[error("Missing operand for '{name}': {source}")]
  Arity {
    name: &'static str,
    source: StackError,
  },
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Square root of a negative number")]
  NegativeSqrt,
  #[error("Incomplete expression: {0}")]
  IncompleteExpression(#[source] StackError),
  #[error("Result is not a finite number")]
  InvalidResult,
}
