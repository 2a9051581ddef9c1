
//! Conversion of signed integers between binary, decimal, and
//! hexadecimal notation.

mod error;
pub mod formatter;
pub mod integer;
pub mod parser;

pub use error::{ConversionError, ParseBaseSelectorError};
pub use formatter::format_integer;
pub use integer::SignedInteger;
pub use parser::parse_integer;

use crate::util::radix::Radix;

use log::debug;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which radix to read the input in. [`BaseSelector::Auto`] infers it
/// from a `0b` or `0x` prefix, falling back to decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BaseSelector {
  #[default]
  #[serde(rename = "auto")]
  Auto,
  #[serde(rename = "2")]
  Base2,
  #[serde(rename = "10")]
  Base10,
  #[serde(rename = "16")]
  Base16,
}

/// The same integer written in each supported radix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedInteger {
  pub binary: String,
  pub decimal: String,
  pub hexadecimal: String,
}

impl BaseSelector {
  /// The explicitly selected radix, or `None` for auto-detection.
  pub fn radix(self) -> Option<Radix> {
    match self {
      BaseSelector::Auto => None,
      BaseSelector::Base2 => Some(Radix::BINARY),
      BaseSelector::Base10 => Some(Radix::DECIMAL),
      BaseSelector::Base16 => Some(Radix::HEXADECIMAL),
    }
  }
}

impl From<Radix> for BaseSelector {
  fn from(radix: Radix) -> Self {
    match radix {
      Radix::BINARY => BaseSelector::Base2,
      Radix::HEXADECIMAL => BaseSelector::Base16,
      _ => BaseSelector::Base10,
    }
  }
}

impl FromStr for BaseSelector {
  type Err = ParseBaseSelectorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("auto") {
      return Ok(BaseSelector::Auto);
    }
    Radix::from_str(s)
      .map(BaseSelector::from)
      .map_err(|_| ParseBaseSelectorError(s.to_owned()))
  }
}

impl Display for BaseSelector {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self.radix() {
      None => write!(f, "auto"),
      Some(radix) => write!(f, "{radix}"),
    }
  }
}

/// Parses `raw` according to `base` and renders it in binary,
/// decimal, and hexadecimal.
pub fn convert_integer(raw: &str, base: BaseSelector) -> Result<ConvertedInteger, ConversionError> {
  let n = parse_integer(raw, base)?;
  debug!("parsed {:?} (base {}) as {}", raw, base, n);
  Ok(format_integer(&n))
}
