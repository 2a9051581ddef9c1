
//! Pure computational core of a keypad calculator: evaluation of
//! infix arithmetic expressions, and conversion of arbitrary-precision
//! integers between binary, decimal, and hexadecimal.
//!
//! Both entry points are stateless; calls never depend on one another.

pub mod convert;
pub mod error;
pub mod expr;
pub mod parsing;
pub mod stack;
pub mod util;

pub use convert::{BaseSelector, ConversionError, ConvertedInteger, convert_integer};
pub use error::Error;
pub use expr::{EvalOptions, ExprError, evaluate, evaluate_with};
