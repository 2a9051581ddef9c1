
use super::error::ExprError;
use super::function::Function;
use crate::parsing::operator::Operator;
use crate::parsing::source::{Span, SourceOffset};
use crate::parsing::tokenizer::TokenizerState;

use regex::Regex;
use once_cell::sync::Lazy;

use std::fmt::{self, Display, Formatter};

/// Splits normalized expression text into [`Token`]s.
#[derive(Clone, Debug, Default)]
pub struct ExprTokenizer;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
  /// A finite numeric literal.
  Number(f64),
  Operator(Operator),
  Function(Function),
  LeftParen,
  RightParen,
}

impl ExprTokenizer {
  pub fn new() -> Self {
    ExprTokenizer
  }

  /// Reads tokens until the input is exhausted. The input is expected
  /// to be normalized, so whitespace is not skipped.
  pub fn read_tokens(&self, state: &mut TokenizerState<'_>) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    while let Some(token) = self.read_one_token(state)? {
      tokens.push(token);
    }
    Ok(tokens)
  }

  /// Reads a single token, or returns `Ok(None)` at the end of input.
  pub fn read_one_token(&self, state: &mut TokenizerState<'_>) -> Result<Option<Token>, ExprError> {
    let Some(ch) = state.peek() else { return Ok(None); };
    if let Some(tok) = self.read_paren(state) {
      Ok(Some(tok))
    } else if let Some(res) = self.read_number_literal(state) {
      res.map(Some)
    } else if let Some(tok) = self.read_operator(state) {
      Ok(Some(tok))
    } else if let Some(res) = self.read_function_name(state) {
      res.map(Some)
    } else {
      Err(ExprError::Unparseable { ch, position: state.current_pos() })
    }
  }

  fn read_paren(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    #[allow(clippy::manual_map)] // Cleaner in an if-else chain
    if let Some(m) = state.read_literal("(") {
      Some(Token::new(TokenData::LeftParen, m.span()))
    } else if let Some(m) = state.read_literal(")") {
      Some(Token::new(TokenData::RightParen, m.span()))
    } else {
      None
    }
  }

  fn read_operator(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    let operator = Operator::from_char(state.peek()?)?;
    let m = state.advance_char()?;
    Some(Token::new(TokenData::Operator(operator), m.span()))
  }

  fn read_number_literal(&self, state: &mut TokenizerState<'_>) -> Option<Result<Token, ExprError>> {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());
    let m = state.read_regex(&RE)?;
    Some(parse_number(m.as_str()).map(|n| Token::new(TokenData::Number(n), m.span())))
  }

  /// Reads a function name. Names are matched as a prefix of the
  /// remaining input, so `sqrtsqrt` reads as two calls. Any other
  /// letter run is reported whole.
  fn read_function_name(&self, state: &mut TokenizerState<'_>) -> Option<Result<Token, ExprError>> {
    static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)sqrt").unwrap());
    static LETTERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+").unwrap());
    if let Some(m) = state.read_regex(&NAME_RE) {
      let res = match Function::from_name(m.as_str()) {
        Some(function) => Ok(Token::new(TokenData::Function(function), m.span())),
        None => Err(ExprError::UnsupportedFunction(m.as_str().to_owned())),
      };
      return Some(res);
    }
    let m = state.read_regex(&LETTERS_RE)?;
    Some(Err(ExprError::UnsupportedFunction(m.as_str().to_owned())))
  }
}

/// Parses a run of digits and dots as a finite number. A lone `.` is
/// an invalid number. Any other run that does not yield a finite
/// value, including runs with several dots, is out of range.
fn parse_number(text: &str) -> Result<f64, ExprError> {
  if text == "." {
    return Err(ExprError::InvalidNumber(text.to_owned()));
  }
  match text.parse::<f64>() {
    Ok(n) if n.is_finite() => Ok(n),
    _ => Err(ExprError::NumberOutOfRange(text.to_owned())),
  }
}

/// Tokenizes a complete normalized expression.
pub fn tokenize(normalized: &str) -> Result<Vec<Token>, ExprError> {
  let mut state = TokenizerState::new(normalized);
  ExprTokenizer::new().read_tokens(&mut state)
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }

  pub fn start(&self) -> SourceOffset {
    self.span.start
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::Operator(op) => write!(f, "{op}"),
      TokenData::Function(function) => write!(f, "{function}"),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}
