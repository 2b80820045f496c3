//! Error types for parsing Slice sources
//!
//! There are exactly two failure kinds, both fatal to a `parse` call:
//! malformed conditional-compilation directives and a declaration grammar
//! mismatch. Neither produces a partial result.

use crate::slice::ast::location::{Position, SourceLocation};
use chumsky::error::{Simple, SimpleReason};
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

/// Unbalanced or malformed `#ifdef` / `#ifndef` / `#if` / `#endif` directives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to strip directives at {position}:\n{message}")]
pub struct DirectiveSyntaxError {
    pub message: String,
    pub offset: usize,
    pub position: Position,
}

/// The (directive-stripped) text does not match the declaration grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse slice file at {position}:\n{message}")]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    #[error(transparent)]
    Directive(#[from] DirectiveSyntaxError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SliceError {
    /// Byte offset the diagnostic points at
    pub fn offset(&self) -> usize {
        match self {
            SliceError::Directive(e) => e.offset,
            SliceError::Parse(e) => e.offset,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            SliceError::Directive(e) => e.position,
            SliceError::Parse(e) => e.position,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SliceError::Directive(e) => &e.message,
            SliceError::Parse(e) => &e.message,
        }
    }
}

impl DirectiveSyntaxError {
    pub(crate) fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset,
            position: SourceLocation::new(source).byte_to_position(offset),
        }
    }
}

impl ParseError {
    pub(crate) fn at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset,
            position: SourceLocation::new(source).byte_to_position(offset),
        }
    }
}

/// Pick the error to report out of a failed match: the one that got furthest
pub(crate) fn furthest<I: Hash + Eq>(errors: Vec<Simple<I>>) -> Option<Simple<I>> {
    errors.into_iter().max_by_key(|e| e.span().start)
}

/// Render a grammar engine error as "unexpected X, expected Y or Z"
pub(crate) fn describe<I: fmt::Display + Hash + Eq>(error: &Simple<I>) -> String {
    match error.reason() {
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("unclosed delimiter {}", delimiter)
        }
        SimpleReason::Unexpected => {
            let found = match error.found() {
                Some(token) => token.to_string(),
                None => "end of input".to_string(),
            };

            let mut expected: Vec<String> = error
                .expected()
                .map(|e| match e {
                    Some(token) => token.to_string(),
                    None => "end of input".to_string(),
                })
                .collect();
            expected.sort();
            expected.dedup();

            let mut message = format!("unexpected {}", found);
            if let Some(label) = error.label() {
                message.push_str(&format!(" in {}", label));
            }
            if let Some((last, rest)) = expected.split_last() {
                if rest.is_empty() {
                    message.push_str(&format!(", expected {}", last));
                } else {
                    message.push_str(&format!(", expected {} or {}", rest.join(", "), last));
                }
            }
            message
        }
    }
}

/// Format source code context around an error position
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
pub fn format_source_context(source: &str, position: Position) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = position.line;

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}
