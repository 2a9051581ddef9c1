
//! Parsing of signed integer numerals in binary, decimal, or
//! hexadecimal.

use super::BaseSelector;
use super::error::ConversionError;
use super::integer::SignedInteger;
use crate::util::Sign;
use crate::util::radix::Radix;

use regex::Regex;
use once_cell::sync::Lazy;

/// Parses `raw` as a signed integer. Surrounding whitespace is
/// ignored, and an optional `+` or `-` may precede the digits.
pub fn parse_integer(raw: &str, base: BaseSelector) -> Result<SignedInteger, ConversionError> {
  let input = raw.trim();
  if input.is_empty() {
    return Err(ConversionError::EmptyInput);
  }
  let (sign, body) = Sign::split_prefix(input);
  let (radix, digits) = match base.radix() {
    None => detect_radix(body)?,
    Some(radix) => (radix, radix.strip_prefix(body)),
  };
  let magnitude = radix.parse_magnitude(digits)
    .ok_or_else(|| invalid_digit_error(radix, input))?;
  Ok(SignedInteger::new(sign, magnitude))
}

/// Picks a radix from the literal prefix of `body` and returns it with
/// the digits that follow the prefix.
fn detect_radix(body: &str) -> Result<(Radix, &str), ConversionError> {
  static BINARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[bB]([01]+)$").unwrap());
  static HEXADECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0[xX]([0-9a-fA-F]+)$").unwrap());
  static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

  if let Some(c) = BINARY_RE.captures(body) {
    Ok((Radix::BINARY, c.get(1).map_or("", |m| m.as_str())))
  } else if let Some(c) = HEXADECIMAL_RE.captures(body) {
    Ok((Radix::HEXADECIMAL, c.get(1).map_or("", |m| m.as_str())))
  } else if DECIMAL_RE.is_match(body) {
    Ok((Radix::DECIMAL, body))
  } else {
    Err(ConversionError::UnrecognizedFormat(body.to_owned()))
  }
}

fn invalid_digit_error(radix: Radix, input: &str) -> ConversionError {
  let input = input.to_owned();
  match radix {
    Radix::BINARY => ConversionError::InvalidBinaryDigit(input),
    Radix::HEXADECIMAL => ConversionError::InvalidHexDigit(input),
    _ => ConversionError::InvalidDecimalDigit(input),
  }
}
