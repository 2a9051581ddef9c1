
//! Evaluation of infix arithmetic expressions.
//!
//! The pipeline is: [`normalize`] the raw text, [`tokenize`] it,
//! convert the tokens [`to_postfix`] form, and run the result with
//! [`evaluate_postfix`]. The final value is rounded and rendered as a
//! decimal string.

mod error;
pub mod evaluator;
pub mod function;
pub mod normalizer;
pub mod postfix;
pub mod tokenizer;

pub use error::ExprError;
pub use evaluator::{EvalOptions, evaluate_postfix, format_number, round_to_digits};
pub use function::Function;
pub use normalizer::normalize;
pub use postfix::{Instruction, PostfixProgram, to_postfix};
pub use tokenizer::{ExprTokenizer, Token, TokenData, tokenize};

use log::debug;

/// Evaluates `expression`, rounding the result to twelve fractional
/// digits.
pub fn evaluate(expression: &str) -> Result<String, ExprError> {
  evaluate_with(expression, &EvalOptions::default())
}

pub fn evaluate_with(expression: &str, opts: &EvalOptions) -> Result<String, ExprError> {
  let normalized = normalize(expression)?;
  let tokens = tokenize(&normalized)?;
  debug!("normalized {:?} into {} tokens", normalized, tokens.len());
  let program = to_postfix(tokens)?;
  debug!("postfix program: {}", program);
  let value = evaluate_postfix(&program)?;
  let rounded = round_to_digits(value, opts.fractional_digits);
  debug!("result {} rounded to {}", value, rounded);
  Ok(format_number(rounded))
}
