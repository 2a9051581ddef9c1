
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConversionError {
  #[error("Enter an integer to convert")]
  EmptyInput,
  #[error("Cannot detect the base of '{0}': add a 0b or 0x prefix, or choose a base")]
  UnrecognizedFormat(String),
  #[error("Binary numbers may only contain 0 or 1, got '{0}'")]
  InvalidBinaryDigit(String),
  #[error("Hexadecimal numbers may only contain 0-9 and A-F, got '{0}'")]
  InvalidHexDigit(String),
  #[error("Decimal numbers may only contain 0-9, got '{0}'")]
  InvalidDecimalDigit(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown base selector '{0}', expected one of auto, 2, 10, or 16")]
pub struct ParseBaseSelectorError(pub String);
