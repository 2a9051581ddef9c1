
//! Fixity declarations for operators.

/// Where an operator sits relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
  /// Written before a single operand, such as negation.
  Prefix,
  /// Written between two operands.
  Infix,
  /// Written after a single operand, such as percent.
  Postfix,
}

impl Fixity {
  /// The number of operands consumed by an operator of this fixity.
  pub fn arity(self) -> usize {
    match self {
      Fixity::Prefix | Fixity::Postfix => 1,
      Fixity::Infix => 2,
    }
  }

  pub fn is_postfix(self) -> bool {
    self == Fixity::Postfix
  }
}
