
use super::error::ExprError;

use phf::phf_map;

use std::fmt::{self, Display, Formatter};

/// A named single-argument function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
  Sqrt,
}

static FUNCTIONS: phf::Map<&'static str, Function> = phf_map! {
  "sqrt" => Function::Sqrt,
};

impl Function {
  /// Looks up a function by name, ignoring ASCII case.
  pub fn from_name(name: &str) -> Option<Function> {
    FUNCTIONS.get(name.to_ascii_lowercase().as_str()).copied()
  }

  pub fn name(self) -> &'static str {
    match self {
      Function::Sqrt => "sqrt",
    }
  }

  pub fn apply(self, arg: f64) -> Result<f64, ExprError> {
    match self {
      Function::Sqrt => {
        if arg < 0.0 {
          return Err(ExprError::NegativeSqrt);
        }
        Ok(arg.sqrt())
      }
    }
  }
}

impl Display for Function {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_from_name() {
    assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    assert_eq!(Function::from_name("SQRT"), Some(Function::Sqrt));
    assert_eq!(Function::from_name("sqr"), None);
    assert_eq!(Function::from_name("sqrtsqrt"), None);
  }

  #[test]
  fn test_sqrt() {
    assert_eq!(Function::Sqrt.apply(9.0), Ok(3.0));
    assert_eq!(Function::Sqrt.apply(0.0), Ok(0.0));
    assert_abs_diff_eq!(Function::Sqrt.apply(2.0).unwrap(), std::f64::consts::SQRT_2);
    assert_eq!(Function::Sqrt.apply(-4.0), Err(ExprError::NegativeSqrt));
  }

  #[test]
  fn test_sqrt_of_negative_zero() {
    // -0.0 is not less than zero, and its root is non-negative in value.
    assert_eq!(Function::Sqrt.apply(-0.0), Ok(0.0));
  }
}
