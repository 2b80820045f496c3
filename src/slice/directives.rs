//! Directive preprocessor
//!
//! Removes conditional-compilation blocks from a Slice source before the
//! declaration grammar sees it. The output has exactly the byte length and line
//! structure of the input: dropped regions and directive lines are blanked to
//! spaces, newlines are kept. Byte offsets into the stripped text are therefore
//! valid offsets into the original text, which is what lets doc comments be
//! looked up in the original afterwards.
//!
//! ## Modules
//!
//! - `tokens` - Line-level directive lexer
//! - `grammar` - Block grammar producing the kept regions

pub mod grammar;
pub mod tokens;

pub use tokens::{lex_directives, DirectiveToken};

use crate::slice::error::{describe, furthest, DirectiveSyntaxError};
use crate::slice::parsing::engine::with_default_parser;
use chumsky::prelude::*;
use chumsky::Stream;
use grammar::Span;
use std::ops::Range;
use tracing::{debug, trace};

/// Strip conditional-compilation directives using the thread's default engine
pub fn strip(source: &str) -> Result<String, DirectiveSyntaxError> {
    with_default_parser(|parser| parser.strip(source))
}

/// Strip directives with an explicit directive grammar
pub(crate) fn strip_with<P>(grammar: &P, source: &str) -> Result<String, DirectiveSyntaxError>
where
    P: Parser<DirectiveToken, Vec<Span>, Error = Simple<DirectiveToken>>,
{
    let tokens = lex_directives(source);
    trace!(tokens = tokens.len(), "lexed directive lines");

    let eoi = source.len();
    let stream = Stream::from_iter(eoi..eoi, tokens.clone().into_iter());

    match grammar.parse(stream) {
        Ok(kept) => {
            debug!(regions = kept.len(), "kept code regions");
            Ok(reconstruct(source, &kept))
        }
        Err(errors) => Err(directive_failure(source, &tokens, errors)),
    }
}

/// Rebuild the text from the kept regions, blanking everything in between
fn reconstruct(source: &str, kept: &[Span]) -> String {
    let mut result = String::with_capacity(source.len());
    let mut last = 0;

    for region in kept {
        blank_into(&mut result, &source[last..region.start]);
        result.push_str(&source[region.clone()]);
        last = region.end;
    }
    blank_into(&mut result, &source[last..]);

    result
}

fn blank_into(out: &mut String, gap: &str) {
    for ch in gap.chars() {
        if ch == '\n' {
            out.push('\n');
        } else {
            out.extend(std::iter::repeat(' ').take(ch.len_utf8()));
        }
    }
}

/// Turn grammar errors into a diagnostic pointing at the offending directive
///
/// An unmatched opener or a stray `#endif` is located by a balance scan; the
/// grammar engine's own description is kept as the detail.
fn directive_failure(
    source: &str,
    tokens: &[(DirectiveToken, Range<usize>)],
    errors: Vec<Simple<DirectiveToken>>,
) -> DirectiveSyntaxError {
    let detail = furthest(errors).map(|e| (e.span().start, describe(&e)));

    let mut open: Vec<&(DirectiveToken, Range<usize>)> = Vec::new();
    for entry in tokens {
        if entry.0.is_opening() {
            open.push(entry);
        } else if entry.0 == DirectiveToken::Endif && open.pop().is_none() {
            let message = match &detail {
                Some((_, detail)) => format!("stray #endif: {}", detail),
                None => "stray #endif".to_string(),
            };
            return DirectiveSyntaxError::at(source, entry.1.start, message);
        }
    }

    if let Some((token, span)) = open.last() {
        let message = match &detail {
            Some((_, detail)) => format!("unterminated {}: {}", token, detail),
            None => format!("unterminated {}", token),
        };
        return DirectiveSyntaxError::at(source, span.start, message);
    }

    let (offset, message) = detail.unwrap_or((0, "malformed directives".to_string()));
    DirectiveSyntaxError::at(source, offset, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::ast::location::Position;

    const EXAMPLE: &str = "prefix\n#ifndef LOL\na\n#ifdef _WTF_\nb\n#endif\nc\n#endif\n#if !defined(kek)\nd\n#endif\nsuffix\n";

    #[test]
    fn test_strip_concrete_example() {
        let stripped = strip(EXAMPLE).unwrap();
        let lines: Vec<&str> = stripped.split('\n').collect();

        assert_eq!(lines[0], "prefix");
        assert_eq!(lines[1], "           ");
        assert_eq!(lines[2], "a");
        assert_eq!(lines[3], "            ");
        assert_eq!(lines[4], " ");
        assert_eq!(lines[5], "      ");
        assert_eq!(lines[6], "c");
        assert_eq!(lines[7], "      ");
        assert_eq!(lines[8], "                 ");
        assert_eq!(lines[9], "d");
        assert_eq!(lines[10], "      ");
        assert_eq!(lines[11], "suffix");
        assert_eq!(stripped.len(), EXAMPLE.len());
    }

    #[test]
    fn test_strip_empty() {
        assert_eq!(strip("").unwrap(), "");
    }

    #[test]
    fn test_strip_without_directives_is_identity() {
        let source = "#pragma once\n#include <Ice/Identity.ice>\nmodule M { };\n";
        assert_eq!(strip(source).unwrap(), source);
    }

    #[test]
    fn test_multibyte_characters_blank_per_byte() {
        let source = "#ifdef X\n// é\n#endif\n";
        let stripped = strip(source).unwrap();
        assert_eq!(stripped.len(), source.len());
        assert!(stripped.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn test_stray_endif() {
        let err = strip("module M\n#endif\n").unwrap_err();
        assert_eq!(err.offset, 9);
        assert_eq!(err.position, Position::new(1, 0));
        assert!(err.message.starts_with("stray #endif"));
    }

    #[test]
    fn test_unterminated_block() {
        let err = strip("a\n#ifndef GUARD\nb\n").unwrap_err();
        assert_eq!(err.offset, 2);
        assert!(err.message.starts_with("unterminated #ifndef GUARD"));
        assert!(err
            .to_string()
            .starts_with("Failed to strip directives at line 2, column 1"));
    }

    #[test]
    fn test_innermost_unterminated_block_reported() {
        let err = strip("#ifndef A\n#ifdef B\nx\n#endif\n#if !defined(C)\n").unwrap_err();
        assert!(err.message.starts_with("unterminated #if !defined(C)"));
    }
}
