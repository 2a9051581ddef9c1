
//! Character-level validation of raw expression text.

use super::error::ExprError;

/// Letters are only accepted as parts of the `sqrt` keyword.
const KEYWORD_LETTERS: &str = "sqrt";

/// Whether `ch` may appear anywhere in an expression. Position is not
/// considered here; the tokenizer rejects misplaced characters.
pub fn is_expression_char(ch: char) -> bool {
  ch.is_ascii_digit() ||
    ch.is_whitespace() ||
    matches!(ch, '.' | '+' | '-' | '*' | '/' | '(' | ')' | '%') ||
    KEYWORD_LETTERS.contains(ch.to_ascii_lowercase())
}

/// Validates the character set of `input` and strips all whitespace.
pub fn normalize(input: &str) -> Result<String, ExprError> {
  if let Some((position, ch)) = input.chars().enumerate().find(|(_, ch)| !is_expression_char(*ch)) {
    return Err(ExprError::InvalidCharacter { ch, position });
  }
  Ok(input.chars().filter(|ch| !ch.is_whitespace()).collect())
}
