
//! The operators understood by the expression parser, together with
//! their parsing properties.

mod associativity;
mod fixity;
mod precedence;

pub use associativity::Associativity;
pub use fixity::Fixity;
pub use precedence::Precedence;

use std::fmt::{self, Display, Formatter};

/// An arithmetic operator.
///
/// The tokenizer only ever produces the infix operators and
/// [`Operator::Percent`]. [`Operator::Negate`] is synthesized by the
/// parser when a `-` has no left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
  /// Unary minus.
  Negate,
  /// Postfix percent, dividing its operand by one hundred.
  Percent,
}

impl Operator {
  /// The operator written as the single character `ch`, if any.
  /// Unary minus has no character of its own.
  pub fn from_char(ch: char) -> Option<Operator> {
    match ch {
      '+' => Some(Operator::Add),
      '-' => Some(Operator::Subtract),
      '*' => Some(Operator::Multiply),
      '/' => Some(Operator::Divide),
      '%' => Some(Operator::Percent),
      _ => None,
    }
  }

  /// The name of the operator, as displayed in postfix listings.
  pub fn operator_name(self) -> &'static str {
    match self {
      Operator::Add => "+",
      Operator::Subtract => "-",
      Operator::Multiply => "*",
      Operator::Divide => "/",
      Operator::Negate => "neg",
      Operator::Percent => "%",
    }
  }

  pub fn fixity(self) -> Fixity {
    match self {
      Operator::Negate => Fixity::Prefix,
      Operator::Percent => Fixity::Postfix,
      _ => Fixity::Infix,
    }
  }

  pub fn precedence(self) -> Precedence {
    match self {
      Operator::Add | Operator::Subtract => Precedence::new(1),
      Operator::Multiply | Operator::Divide => Precedence::new(2),
      Operator::Negate => Precedence::new(3),
      Operator::Percent => Precedence::new(4),
    }
  }

  pub fn associativity(self) -> Associativity {
    match self {
      Operator::Negate => Associativity::RIGHT,
      _ => Associativity::LEFT,
    }
  }

  pub fn arity(self) -> usize {
    self.fixity().arity()
  }

  /// Whether an operator already on the parser's stack must be
  /// emitted before `incoming` is pushed. This is the case if it
  /// binds strictly tighter, or equally tight with a left-associative
  /// `incoming`.
  pub fn yields_to(self, incoming: Operator) -> bool {
    let (stack_prec, incoming_prec) = (self.precedence(), incoming.precedence());
    stack_prec > incoming_prec ||
      (stack_prec == incoming_prec && incoming.associativity().is_left_assoc())
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.operator_name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_char() {
    assert_eq!(Operator::from_char('+'), Some(Operator::Add));
    assert_eq!(Operator::from_char('-'), Some(Operator::Subtract));
    assert_eq!(Operator::from_char('%'), Some(Operator::Percent));
    assert_eq!(Operator::from_char('^'), None);
  }

  #[test]
  fn test_only_negate_is_right_assoc() {
    let operators = [
      Operator::Add,
      Operator::Subtract,
      Operator::Multiply,
      Operator::Divide,
      Operator::Negate,
      Operator::Percent,
    ];
    for op in operators {
      assert_eq!(op.associativity().is_right_assoc(), op == Operator::Negate, "{op:?}");
    }
  }

  #[test]
  fn test_arity() {
    assert_eq!(Operator::Add.arity(), 2);
    assert_eq!(Operator::Divide.arity(), 2);
    assert_eq!(Operator::Negate.arity(), 1);
    assert_eq!(Operator::Percent.arity(), 1);
  }

  #[test]
  fn test_yields_to_by_precedence() {
    assert!(Operator::Multiply.yields_to(Operator::Add));
    assert!(!Operator::Add.yields_to(Operator::Multiply));
    assert!(Operator::Negate.yields_to(Operator::Multiply));
    assert!(!Operator::Add.yields_to(Operator::Percent));
  }

  #[test]
  fn test_yields_to_by_associativity() {
    assert!(Operator::Subtract.yields_to(Operator::Subtract));
    assert!(Operator::Multiply.yields_to(Operator::Divide));
    assert!(Operator::Percent.yields_to(Operator::Percent));
    assert!(!Operator::Negate.yields_to(Operator::Negate));
  }
}
