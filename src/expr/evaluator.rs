
//! Stack machine which runs a [`PostfixProgram`], plus rounding of
//! its result for display.

use super::error::ExprError;
use super::postfix::{Instruction, PostfixProgram};
use crate::parsing::operator::Operator;
use crate::stack::Stack;

use log::trace;

/// Results beyond this many fractional digits are not meaningful for
/// an `f64`.
pub const MAX_FRACTIONAL_DIGITS: u32 = 15;

/// Options for [`crate::evaluate_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
  /// The result is rounded to a multiple of `10^-fractional_digits`.
  /// Values above [`MAX_FRACTIONAL_DIGITS`] are treated as that
  /// maximum.
  pub fractional_digits: u32,
}

impl Default for EvalOptions {
  fn default() -> Self {
    Self {
      fractional_digits: 12,
    }
  }
}

/// Runs `program` and returns the single value it leaves behind. The
/// value is guaranteed to be finite but is not rounded.
pub fn evaluate_postfix(program: &PostfixProgram) -> Result<f64, ExprError> {
  let mut stack = Stack::new();
  for instruction in program {
    trace!("{:?} <- {}", stack.iter().collect::<Vec<_>>(), instruction);
    match *instruction {
      Instruction::Push(n) => {
        stack.push(n);
      }
      Instruction::Apply(op) => {
        let value = apply_operator(&mut stack, op)?;
        stack.push(value);
      }
      Instruction::Call(function) => {
        let arg = stack.pop().map_err(|source| ExprError::Arity { name: function.name(), source })?;
        stack.push(function.apply(arg)?);
      }
    }
  }
  let result = stack.into_single().map_err(ExprError::IncompleteExpression)?;
  if !result.is_finite() {
    return Err(ExprError::InvalidResult);
  }
  Ok(result)
}

/// Pops the operator's operands (in push order) and applies it.
fn apply_operator(stack: &mut Stack<f64>, op: Operator) -> Result<f64, ExprError> {
  let args = stack.pop_several(op.arity())
    .map_err(|source| ExprError::Arity { name: op.operator_name(), source })?;
  match (op, args.as_slice()) {
    (Operator::Negate, &[a]) => Ok(-a),
    (Operator::Percent, &[a]) => Ok(a / 100.0),
    (Operator::Add, &[a, b]) => Ok(a + b),
    (Operator::Subtract, &[a, b]) => Ok(a - b),
    (Operator::Multiply, &[a, b]) => Ok(a * b),
    (Operator::Divide, &[_, b]) if b == 0.0 => Err(ExprError::DivisionByZero),
    (Operator::Divide, &[a, b]) => Ok(a / b),
    (op, args) => unreachable!("{} operands popped for {op:?}", args.len()),
  }
}

/// Rounds `value` to the nearest multiple of `10^-digits`.
///
/// A machine epsilon is added before scaling so that values such as
/// `0.1 + 0.2` land on the intended decimal. This is an approximation
/// and can shift values lying exactly on a rounding boundary. Ties
/// round toward positive infinity. Negative zero becomes zero.
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
  let scale = 10f64.powi(digits.min(MAX_FRACTIONAL_DIGITS) as i32);
  let scaled = (value + f64::EPSILON) * scale;
  if !scaled.is_finite() {
    // Too large to have any fractional digits to round.
    return value;
  }
  let rounded = round_half_up(scaled) / scale;
  if rounded == 0.0 { 0.0 } else { rounded }
}

fn round_half_up(x: f64) -> f64 {
  let floor = x.floor();
  if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Renders a number as a plain decimal numeral, with no exponent and
/// no trailing fractional zeros.
///
/// Unlike JavaScript's `String(number)`, this never switches to
/// exponent notation: `1e-7` renders as `0.0000001` and `1e21` as all
/// twenty-two digits.
pub fn format_number(value: f64) -> String {
  if value == 0.0 {
    // Avoid printing "-0".
    return String::from("0");
  }
  value.to_string()
}
