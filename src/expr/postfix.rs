
//! Operator-precedence (shunting yard) conversion of an infix token
//! sequence into a postfix program.

use super::error::ExprError;
use super::function::Function;
use super::tokenizer::{Token, TokenData};
use crate::parsing::operator::Operator;

use itertools::Itertools;
use log::trace;

use std::fmt::{self, Display, Formatter};

/// A single step of a postfix program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
  Push(f64),
  Apply(Operator),
  Call(Function),
}

/// A sequence of instructions in postfix (reverse Polish) order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostfixProgram {
  instructions: Vec<Instruction>,
}

/// The category of the most recently accepted token. This is the only
/// context the parser needs to tell unary minus from binary minus
/// and to place percent signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
  Start,
  Value,
  Operator,
  OpenParen,
  FunctionName,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
  Operator(Operator),
  Function(Function),
  LeftParen,
}

#[derive(Debug)]
struct PostfixCompiler {
  output: Vec<Instruction>,
  stack: Vec<StackEntry>,
  previous: Category,
}

impl Category {
  /// Whether a value has just been completed, so that an operator
  /// here has something on its left.
  fn has_left_operand(self) -> bool {
    self == Category::Value
  }
}

impl PostfixCompiler {
  fn new() -> Self {
    Self {
      output: Vec::new(),
      stack: Vec::new(),
      previous: Category::Start,
    }
  }

  fn accept(&mut self, token: Token) -> Result<(), ExprError> {
    trace!("accept {} after {:?}", token, self.previous);
    match token.data {
      TokenData::Number(n) => {
        self.output.push(Instruction::Push(n));
        self.previous = Category::Value;
      }
      TokenData::Function(function) => {
        self.stack.push(StackEntry::Function(function));
        self.previous = Category::FunctionName;
      }
      TokenData::LeftParen => {
        self.stack.push(StackEntry::LeftParen);
        self.previous = Category::OpenParen;
      }
      TokenData::RightParen => {
        self.close_paren()?;
        self.previous = Category::Value;
      }
      TokenData::Operator(op) => {
        let op = if op == Operator::Subtract && !self.previous.has_left_operand() {
          Operator::Negate
        } else {
          op
        };
        if op == Operator::Percent && !self.previous.has_left_operand() {
          return Err(ExprError::IllegalPercentPosition(token.start()));
        }
        self.flush_for(op);
        self.stack.push(StackEntry::Operator(op));
        self.previous = if op.fixity().is_postfix() { Category::Value } else { Category::Operator };
      }
    }
    Ok(())
  }

  /// Emits everything back to the matching left paren, discards the
  /// paren, and emits a function waiting directly beneath it.
  fn close_paren(&mut self) -> Result<(), ExprError> {
    loop {
      match self.stack.pop() {
        None => return Err(ExprError::MismatchedParentheses),
        Some(StackEntry::LeftParen) => break,
        Some(entry) => self.emit(entry),
      }
    }
    if let Some(StackEntry::Function(function)) = self.stack.last().copied() {
      self.stack.pop();
      self.output.push(Instruction::Call(function));
    }
    Ok(())
  }

  /// Pops pending functions, and operators which bind at least as
  /// tightly as `incoming`, onto the output.
  fn flush_for(&mut self, incoming: Operator) {
    while let Some(&top) = self.stack.last() {
      let should_emit = match top {
        StackEntry::Function(_) => true,
        StackEntry::Operator(stack_op) => stack_op.yields_to(incoming),
        StackEntry::LeftParen => false,
      };
      if !should_emit {
        break;
      }
      self.stack.pop();
      self.emit(top);
    }
  }

  fn emit(&mut self, entry: StackEntry) {
    match entry {
      StackEntry::Operator(op) => self.output.push(Instruction::Apply(op)),
      StackEntry::Function(function) => self.output.push(Instruction::Call(function)),
      StackEntry::LeftParen => unreachable!("parentheses are never emitted"),
    }
  }

  fn finish(mut self) -> Result<PostfixProgram, ExprError> {
    while let Some(entry) = self.stack.pop() {
      if entry == StackEntry::LeftParen {
        return Err(ExprError::MismatchedParentheses);
      }
      self.emit(entry);
    }
    Ok(PostfixProgram { instructions: self.output })
  }
}

/// Converts an infix token sequence into a postfix program. The
/// result is not checked for arity; that happens at evaluation time.
pub fn to_postfix<I>(tokens: I) -> Result<PostfixProgram, ExprError>
where I: IntoIterator<Item = Token> {
  let mut compiler = PostfixCompiler::new();
  for token in tokens {
    compiler.accept(token)?;
  }
  compiler.finish()
}

impl PostfixProgram {
  pub fn new(instructions: Vec<Instruction>) -> Self {
    Self { instructions }
  }

  pub fn instructions(&self) -> &[Instruction] {
    &self.instructions
  }

  pub fn len(&self) -> usize {
    self.instructions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.instructions.is_empty()
  }
}

impl<'a> IntoIterator for &'a PostfixProgram {
  type Item = &'a Instruction;
  type IntoIter = std::slice::Iter<'a, Instruction>;

  fn into_iter(self) -> Self::IntoIter {
    self.instructions.iter()
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Instruction::Push(n) => write!(f, "{n}"),
      Instruction::Apply(op) => write!(f, "{op}"),
      Instruction::Call(function) => write!(f, "{function}"),
    }
  }
}

impl Display for PostfixProgram {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.instructions.iter().join(" "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::tokenizer::tokenize;
  use crate::parsing::source::SourceOffset;

  fn compile(input: &str) -> Result<String, ExprError> {
    let tokens = tokenize(input).expect("expected tokens");
    to_postfix(tokens).map(|program| program.to_string())
  }

  #[test]
  fn test_precedence() {
    assert_eq!(compile("2+3*4").unwrap(), "2 3 4 * +");
    assert_eq!(compile("2*3+4").unwrap(), "2 3 * 4 +");
    assert_eq!(compile("(2+3)*4").unwrap(), "2 3 + 4 *");
  }

  #[test]
  fn test_left_associativity() {
    assert_eq!(compile("8-3-2").unwrap(), "8 3 - 2 -");
    assert_eq!(compile("8/4/2").unwrap(), "8 4 / 2 /");
    assert_eq!(compile("8/4*2").unwrap(), "8 4 / 2 *");
  }

  #[test]
  fn test_unary_minus_classification() {
    assert_eq!(compile("-2").unwrap(), "2 neg");
    assert_eq!(compile("3-2").unwrap(), "3 2 -");
    assert_eq!(compile("3*-2").unwrap(), "3 2 neg *");
    assert_eq!(compile("(-2)").unwrap(), "2 neg");
    assert_eq!(compile("2%-1").unwrap(), "2 % 1 -");
    assert_eq!(compile("(1)-1").unwrap(), "1 1 -");
  }

  #[test]
  fn test_unary_minus_is_right_assoc() {
    assert_eq!(compile("--2").unwrap(), "2 neg neg");
    assert_eq!(compile("-2*3").unwrap(), "2 neg 3 *");
    assert_eq!(compile("-2%").unwrap(), "2 % neg");
  }

  #[test]
  fn test_functions() {
    assert_eq!(compile("sqrt(9)").unwrap(), "9 sqrt");
    assert_eq!(compile("-sqrt(9)").unwrap(), "9 sqrt neg");
    assert_eq!(compile("sqrt(9)*2").unwrap(), "9 sqrt 2 *");
    assert_eq!(compile("sqrt(sqrt(16))").unwrap(), "16 sqrt sqrt");
    assert_eq!(compile("sqrt(1+3)").unwrap(), "1 3 + sqrt");
  }

  #[test]
  fn test_function_without_parens_binds_to_next_value() {
    assert_eq!(compile("sqrt9+1").unwrap(), "9 sqrt 1 +");
  }

  #[test]
  fn test_operator_flushes_pending_function() {
    // The function is released before its argument arrives, which
    // the evaluator later reports as a missing operand.
    assert_eq!(compile("sqrt-4").unwrap(), "sqrt 4 neg");
  }

  #[test]
  fn test_percent() {
    assert_eq!(compile("50%").unwrap(), "50 %");
    assert_eq!(compile("200+10%").unwrap(), "200 10 % +");
    assert_eq!(compile("50%%").unwrap(), "50 % %");
    assert_eq!(compile("(1+1)%").unwrap(), "1 1 + %");
  }

  #[test]
  fn test_illegal_percent() {
    assert_eq!(compile("%10"), Err(ExprError::IllegalPercentPosition(SourceOffset(0))));
    assert_eq!(compile("1+%"), Err(ExprError::IllegalPercentPosition(SourceOffset(2))));
    assert_eq!(compile("(%"), Err(ExprError::IllegalPercentPosition(SourceOffset(1))));
    assert_eq!(compile("sqrt%"), Err(ExprError::IllegalPercentPosition(SourceOffset(4))));
  }

  #[test]
  fn test_mismatched_parens() {
    assert_eq!(compile("(1+2"), Err(ExprError::MismatchedParentheses));
    assert_eq!(compile("1+2)"), Err(ExprError::MismatchedParentheses));
    assert_eq!(compile(")("), Err(ExprError::MismatchedParentheses));
    assert_eq!(compile("sqrt(4"), Err(ExprError::MismatchedParentheses));
  }

  #[test]
  fn test_structurally_incomplete_input_still_compiles() {
    assert_eq!(compile("1+").unwrap(), "1 +");
    assert_eq!(compile("").unwrap(), "");
    assert_eq!(compile("()").unwrap(), "");
  }

  #[test]
  fn test_program_accessors() {
    let program = to_postfix(tokenize("1+2").unwrap()).unwrap();
    assert_eq!(program.len(), 3);
    assert!(!program.is_empty());
    assert_eq!(
      program.instructions(),
      &[Instruction::Push(1.0), Instruction::Push(2.0), Instruction::Apply(Operator::Add)],
    );
  }
}
