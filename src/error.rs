
use crate::convert::ConversionError;
use crate::expr::ExprError;

use thiserror::Error;

/// Either of the two error types produced by this crate.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ExprError(#[from] ExprError),
  #[error("{0}")]
  ConversionError(#[from] ConversionError),
}
