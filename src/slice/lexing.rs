//! Lexer for Slice declarations
//!
//! Runs over directive-stripped text. Tokens carry byte spans into that text,
//! which share offsets with the original source.

pub mod tokens;

pub use tokens::Token;

use crate::slice::error::ParseError;
use logos::Logos;
use std::ops::Range;

/// Tokenize a source, keeping each token's byte span
///
/// Any character no token accepts is reported as a [`ParseError`] at its offset.
pub fn lex_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let span = lexer.span();
                let message = if lexer.slice().starts_with("/*") {
                    "unterminated block comment".to_string()
                } else {
                    format!("unexpected character {:?}", lexer.slice())
                };
                return Err(ParseError::at(source, span.start, message));
            }
        }
    }

    Ok(tokens)
}
