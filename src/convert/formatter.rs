
use super::ConvertedInteger;
use super::integer::SignedInteger;
use crate::util::radix::{Radix, ToDigits};

/// Renders `n` in all three radixes. The sign, when present, comes
/// before the `0b`/`0x` prefix, and hexadecimal digits are uppercase.
pub fn format_integer(n: &SignedInteger) -> ConvertedInteger {
  ConvertedInteger {
    binary: n.to_prefixed_string_radix(Radix::BINARY),
    decimal: n.to_string_radix(Radix::DECIMAL),
    hexadecimal: n.to_prefixed_string_radix(Radix::HEXADECIMAL),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use num::BigInt;

  fn format(n: impl Into<BigInt>) -> ConvertedInteger {
    format_integer(&SignedInteger::from(n.into()))
  }

  #[test]
  fn test_positive() {
    assert_eq!(
      format(255),
      ConvertedInteger {
        binary: String::from("0b11111111"),
        decimal: String::from("255"),
        hexadecimal: String::from("0xFF"),
      },
    );
  }

  #[test]
  fn test_negative_sign_precedes_prefix() {
    assert_eq!(
      format(-5),
      ConvertedInteger {
        binary: String::from("-0b101"),
        decimal: String::from("-5"),
        hexadecimal: String::from("-0x5"),
      },
    );
  }

  #[test]
  fn test_zero_is_unsigned() {
    let zero = ConvertedInteger {
      binary: String::from("0b0"),
      decimal: String::from("0"),
      hexadecimal: String::from("0x0"),
    };
    assert_eq!(format(0), zero);
    assert_eq!(format_integer(&-SignedInteger::zero()), zero);
  }

  #[test]
  fn test_uppercase_hex() {
    assert_eq!(format(0xABCDEF).hexadecimal, "0xABCDEF");
  }

  #[test]
  fn test_beyond_64_bits() {
    let n = (BigInt::from(1) << 70) - 1;
    let formatted = format(n);
    assert_eq!(formatted.binary, format!("0b{}", "1".repeat(70)));
    assert_eq!(formatted.decimal, "1180591620717411303423");
    assert_eq!(formatted.hexadecimal, "0x3FFFFFFFFFFFFFFFFF");
  }
}
