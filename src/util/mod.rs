
//! Various utility functions.

pub mod radix;

use std::fmt::{self, Formatter, Display};
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Negative,
  Positive,
}

impl Sign {
  pub fn other(self) -> Self {
    match self {
      Self::Negative => Self::Positive,
      Self::Positive => Self::Negative,
    }
  }

  /// Reads an optional leading `+` or `-` from `input`, returning the
  /// sign together with the remainder of the string. A missing sign
  /// character is treated as positive.
  pub fn split_prefix(input: &str) -> (Sign, &str) {
    if let Some(rest) = input.strip_prefix('-') {
      (Sign::Negative, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
      (Sign::Positive, rest)
    } else {
      (Sign::Positive, input)
    }
  }
}

impl Display for Sign {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Negative => write!(f, "-"),
      Self::Positive => write!(f, "+"),
    }
  }
}

impl Neg for Sign {
  type Output = Self;

  fn neg(self) -> Self::Output {
    self.other()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sign_neg() {
    assert_eq!(-Sign::Positive, Sign::Negative);
    assert_eq!(-Sign::Negative, Sign::Positive);
  }

  #[test]
  fn test_split_prefix() {
    assert_eq!(Sign::split_prefix("-12"), (Sign::Negative, "12"));
    assert_eq!(Sign::split_prefix("+0x1"), (Sign::Positive, "0x1"));
    assert_eq!(Sign::split_prefix("0b1"), (Sign::Positive, "0b1"));
    assert_eq!(Sign::split_prefix("--1"), (Sign::Negative, "-1"));
    assert_eq!(Sign::split_prefix(""), (Sign::Positive, ""));
  }
}
