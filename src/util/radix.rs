
//! Utilities for working with integers of different radixes.

use super::Sign;

use num::{BigUint, Num, Zero};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A numerical radix. Only the three radixes the converter speaks
/// are representable: binary, decimal, and hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix {
  value: u8,
}

/// The digits of an integer, most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
  /// The sign of the number. Zero is always stored with a positive
  /// sign.
  pub sign: Sign,
  /// The digits themselves, each in the range `0..radix`. An empty
  /// vector represents zero.
  pub whole: Vec<u8>,
  pub radix: Radix,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported radix {0}, expected one of 2, 10, or 16")]
pub struct UnsupportedRadixError(pub String);

/// An implementor of this trait is an integer-like type that can be
/// converted into its digits.
pub trait ToDigits {
  fn to_digits(&self, radix: Radix) -> Digits;

  /// The digits of `self` in the given radix, without any prefix.
  fn to_string_radix(&self, radix: Radix) -> String {
    self.to_digits(radix).to_string()
  }

  /// As [`ToDigits::to_string_radix`], but with the radix prefix
  /// (`0b` or `0x`) placed between the sign and the digits.
  fn to_prefixed_string_radix(&self, radix: Radix) -> String {
    format!("{:#}", self.to_digits(radix))
  }
}

pub fn digit_into_char(digit: u8) -> char {
  if digit < 10 {
    (b'0' + digit) as char
  } else if digit < 16 {
    (b'A' + digit - 10) as char
  } else {
    panic!("Invalid digit {} in radix", digit)
  }
}

impl Radix {
  pub const BINARY: Radix = Radix { value: 2 };
  pub const DECIMAL: Radix = Radix { value: 10 };
  pub const HEXADECIMAL: Radix = Radix { value: 16 };

  /// Constructs a new radix, returning `None` for anything other than
  /// 2, 10, or 16.
  pub fn try_new(value: u8) -> Option<Self> {
    match value {
      2 | 10 | 16 => Some(Radix { value }),
      _ => None,
    }
  }

  /// The literal prefix conventionally written before numerals in
  /// this radix. Decimal has no prefix.
  pub fn prefix(self) -> &'static str {
    match self.value {
      2 => "0b",
      16 => "0x",
      _ => "",
    }
  }

  /// Removes this radix's prefix from `body`, if present. The prefix
  /// is matched case-insensitively.
  pub fn strip_prefix(self, body: &str) -> &str {
    let prefix = self.prefix();
    if prefix.is_empty() || body.len() < prefix.len() || !body.is_char_boundary(prefix.len()) {
      return body;
    }
    let (head, tail) = body.split_at(prefix.len());
    if head.eq_ignore_ascii_case(prefix) { tail } else { body }
  }

  pub fn is_digit(self, ch: char) -> bool {
    ch.is_digit(u32::from(self.value))
  }

  /// Whether `body` is a nonempty run of digits in this radix.
  pub fn is_valid_body(self, body: &str) -> bool {
    !body.is_empty() && body.chars().all(|ch| self.is_digit(ch))
  }

  /// Parses a run of digits (no sign, no prefix) as an unsigned
  /// magnitude. Returns `None` if `body` is not a valid digit run.
  pub fn parse_magnitude(self, body: &str) -> Option<BigUint> {
    if !self.is_valid_body(body) {
      return None;
    }
    BigUint::from_str_radix(body, u32::from(self.value)).ok()
  }
}

impl Digits {
  pub fn new(sign: Sign, whole: Vec<u8>, radix: Radix) -> Self {
    Self { sign, whole, radix }
  }

  pub fn is_zero(&self) -> bool {
    self.whole.iter().all(|d| *d == 0)
  }
}

/// Renders the digits with a leading `-` for negative values. The
/// alternate flag (`{:#}`) additionally writes the radix prefix
/// after the sign.
impl Display for Digits {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let negative = self.sign == Sign::Negative && !self.is_zero();
    if negative || f.sign_plus() {
      let sign = if negative { Sign::Negative } else { Sign::Positive };
      write!(f, "{}", sign)?;
    }
    if f.alternate() {
      write!(f, "{}", self.radix.prefix())?;
    }
    if self.whole.is_empty() {
      write!(f, "0")?
    } else {
      for digit in self.whole.iter() {
        write!(f, "{}", digit_into_char(*digit))?;
      }
    }
    Ok(())
  }
}

impl Display for Radix {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.value)
  }
}

impl From<Radix> for u8 {
  fn from(radix: Radix) -> Self {
    radix.value
  }
}

impl From<Radix> for u32 {
  fn from(radix: Radix) -> Self {
    u32::from(radix.value)
  }
}

impl FromStr for Radix {
  type Err = UnsupportedRadixError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    u8::from_str(s.trim()).ok()
      .and_then(Radix::try_new)
      .ok_or_else(|| UnsupportedRadixError(s.to_owned()))
  }
}

impl ToDigits for BigUint {
  fn to_digits(&self, radix: Radix) -> Digits {
    let whole = if self.is_zero() {
      Vec::new()
    } else {
      self.to_radix_be(u32::from(radix))
    };
    Digits::new(Sign::Positive, whole, radix)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_radix_constructor() {
    Radix::try_new(2).unwrap();
    Radix::try_new(10).unwrap();
    Radix::try_new(16).unwrap();
    assert_eq!(Radix::try_new(8), None);
    assert_eq!(Radix::try_new(36), None);
    assert_eq!(Radix::try_new(1), None);
    assert_eq!(Radix::try_new(0), None);
  }

  #[test]
  fn test_radix_from_str() {
    assert_eq!("2".parse::<Radix>(), Ok(Radix::BINARY));
    assert_eq!(" 16 ".parse::<Radix>(), Ok(Radix::HEXADECIMAL));
    assert_eq!("8".parse::<Radix>(), Err(UnsupportedRadixError(String::from("8"))));
    assert_eq!("x".parse::<Radix>(), Err(UnsupportedRadixError(String::from("x"))));
  }

  #[test]
  fn test_radix_to_u8() {
    assert_eq!(u8::from(Radix::HEXADECIMAL), 16);
  }

  #[test]
  fn test_strip_prefix() {
    assert_eq!(Radix::BINARY.strip_prefix("0b101"), "101");
    assert_eq!(Radix::BINARY.strip_prefix("0B101"), "101");
    assert_eq!(Radix::BINARY.strip_prefix("101"), "101");
    assert_eq!(Radix::BINARY.strip_prefix("0b"), "");
    assert_eq!(Radix::HEXADECIMAL.strip_prefix("0XfF"), "fF");
    assert_eq!(Radix::HEXADECIMAL.strip_prefix("0"), "0");
    assert_eq!(Radix::DECIMAL.strip_prefix("0x10"), "0x10");
  }

  #[test]
  fn test_valid_body() {
    assert!(Radix::BINARY.is_valid_body("0110"));
    assert!(!Radix::BINARY.is_valid_body("012"));
    assert!(!Radix::BINARY.is_valid_body(""));
    assert!(Radix::HEXADECIMAL.is_valid_body("09afAF"));
    assert!(!Radix::HEXADECIMAL.is_valid_body("0g"));
    assert!(Radix::DECIMAL.is_valid_body("0123456789"));
    assert!(!Radix::DECIMAL.is_valid_body("12a"));
    assert!(!Radix::DECIMAL.is_valid_body("١٢"));
  }

  #[test]
  fn test_parse_magnitude() {
    assert_eq!(Radix::BINARY.parse_magnitude("101"), Some(BigUint::from(5u32)));
    assert_eq!(Radix::HEXADECIMAL.parse_magnitude("ff"), Some(BigUint::from(255u32)));
    assert_eq!(Radix::DECIMAL.parse_magnitude("0042"), Some(BigUint::from(42u32)));
    assert_eq!(Radix::DECIMAL.parse_magnitude("+42"), None);
    assert_eq!(Radix::DECIMAL.parse_magnitude("4_2"), None);
  }

  #[test]
  fn test_biguint_to_binary() {
    assert_eq!(BigUint::from(5u32).to_string_radix(Radix::BINARY), "101");
    assert_eq!(BigUint::from(99u32).to_string_radix(Radix::BINARY), "1100011");
    assert_eq!(BigUint::from(0u32).to_string_radix(Radix::BINARY), "0");
  }

  #[test]
  fn test_biguint_to_hexadecimal() {
    assert_eq!(BigUint::from(108u32).to_string_radix(Radix::HEXADECIMAL), "6C");
    assert_eq!(BigUint::from(0u32).to_string_radix(Radix::HEXADECIMAL), "0");
    assert_eq!(BigUint::from(u64::MAX).to_prefixed_string_radix(Radix::HEXADECIMAL), "0xFFFFFFFFFFFFFFFF");
  }

  #[test]
  fn test_digits_display() {
    let digits = Digits::new(Sign::Negative, vec![1, 0, 1], Radix::BINARY);
    assert_eq!(digits.to_string(), "-101");
    assert_eq!(format!("{:#}", digits), "-0b101");
    assert_eq!(format!("{:+}", Digits::new(Sign::Positive, vec![4, 2], Radix::DECIMAL)), "+42");
  }

  #[test]
  fn test_negative_zero_digits_are_unsigned() {
    let digits = Digits::new(Sign::Negative, Vec::new(), Radix::HEXADECIMAL);
    assert_eq!(digits.to_string(), "0");
    assert_eq!(format!("{:#}", digits), "0x0");
  }
}
