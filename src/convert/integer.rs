
use crate::util::Sign;
use crate::util::radix::{Digits, Radix, ToDigits};

use num::{BigInt, BigUint, Zero};
use num::bigint::{Sign as BigSign};

use std::fmt::{self, Display, Formatter};
use std::ops::Neg;

/// An arbitrary-precision signed integer, stored as a sign and an
/// unsigned magnitude. Zero is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedInteger {
  sign: Sign,
  magnitude: BigUint,
}

impl SignedInteger {
  pub fn new(sign: Sign, magnitude: BigUint) -> Self {
    let sign = if magnitude.is_zero() { Sign::Positive } else { sign };
    Self { sign, magnitude }
  }

  pub fn zero() -> Self {
    Self::new(Sign::Positive, BigUint::zero())
  }

  pub fn sign(&self) -> Sign {
    self.sign
  }
}

impl ToDigits for SignedInteger {
  fn to_digits(&self, radix: Radix) -> Digits {
    let mut digits = self.magnitude.to_digits(radix);
    digits.sign = self.sign;
    digits
  }
}

impl Neg for SignedInteger {
  type Output = Self;

  fn neg(self) -> Self::Output {
    Self::new(-self.sign, self.magnitude)
  }
}

impl From<BigInt> for SignedInteger {
  fn from(n: BigInt) -> Self {
    let sign = if n.sign() == BigSign::Minus { Sign::Negative } else { Sign::Positive };
    Self::new(sign, n.magnitude().clone())
  }
}

impl From<SignedInteger> for BigInt {
  fn from(n: SignedInteger) -> Self {
    let sign = match n.sign {
      Sign::Negative => BigSign::Minus,
      Sign::Positive => BigSign::Plus,
    };
    BigInt::from_biguint(sign, n.magnitude)
  }
}

/// Displays in decimal.
impl Display for SignedInteger {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.to_digits(Radix::DECIMAL))
  }
}
