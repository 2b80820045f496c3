//! Line-level tokens for the directive grammar
//!
//! The directive pass only cares about conditional-compilation markers. Everything
//! else, `#include` and `#pragma` lines included, is opaque code. Directives are
//! only recognised as the first non-blank text of a line; a `#ifdef` inside a
//! comment or after other text on the same line stays code.

use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Raw logos tokens, before line-start classification and code merging
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
enum RawToken {
    #[regex(r"#[ \t]*ifdef[^\n]*", |lex| argument(lex.slice(), "ifdef"))]
    Ifdef(String),
    #[regex(r"#[ \t]*ifndef[^\n]*", |lex| argument(lex.slice(), "ifndef"))]
    Ifndef(String),
    #[regex(r"#[ \t]*if[ \t(!][^\n]*", |lex| argument(lex.slice(), "if"))]
    If(String),
    #[regex(r"#[ \t]*endif[^\n]*")]
    Endif,
    #[regex(r"[^#\n]+")]
    Text,
    #[token("#")]
    Hash,
    #[token("\n")]
    Newline,
}

/// Text following the directive keyword, trimmed
fn argument(line: &str, keyword: &str) -> String {
    line[1..]
        .trim_start()
        .strip_prefix(keyword)
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Tokens consumed by the directive grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectiveToken {
    /// A maximal run of non-directive text
    Code,
    Ifdef(String),
    Ifndef(String),
    /// `#if` with its condition text
    If(String),
    Endif,
}

impl DirectiveToken {
    pub fn is_opening(&self) -> bool {
        matches!(
            self,
            DirectiveToken::Ifdef(_) | DirectiveToken::Ifndef(_) | DirectiveToken::If(_)
        )
    }
}

impl fmt::Display for DirectiveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveToken::Code => write!(f, "code"),
            DirectiveToken::Ifdef(name) => write!(f, "#ifdef {}", name),
            DirectiveToken::Ifndef(name) => write!(f, "#ifndef {}", name),
            DirectiveToken::If(condition) => write!(f, "#if {}", condition),
            DirectiveToken::Endif => write!(f, "#endif"),
        }
    }
}

/// Tokenize a source into directive tokens with their byte spans.
///
/// Consecutive code is merged into a single `Code` token, so the spans of `Code`
/// tokens are exactly the regions a kept block contributes.
pub fn lex_directives(source: &str) -> Vec<(DirectiveToken, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens: Vec<(DirectiveToken, Range<usize>)> = Vec::new();
    let mut at_line_start = true;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = match result {
            Ok(RawToken::Ifdef(name)) if at_line_start => DirectiveToken::Ifdef(name),
            Ok(RawToken::Ifndef(name)) if at_line_start => DirectiveToken::Ifndef(name),
            Ok(RawToken::If(condition)) if at_line_start => DirectiveToken::If(condition),
            Ok(RawToken::Endif) if at_line_start => DirectiveToken::Endif,
            Ok(RawToken::Newline) => {
                at_line_start = true;
                DirectiveToken::Code
            }
            Ok(RawToken::Text) if lexer.slice().trim().is_empty() => DirectiveToken::Code,
            _ => {
                at_line_start = false;
                DirectiveToken::Code
            }
        };

        match (tokens.last_mut(), &token) {
            (Some((DirectiveToken::Code, previous)), DirectiveToken::Code) => {
                previous.end = span.end;
            }
            _ => tokens.push((token, span)),
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<DirectiveToken> {
        lex_directives(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_plain_text_is_one_code_token() {
        let tokens = lex_directives("module M {\n#include <a.ice>\n};\n");
        assert_eq!(tokens, vec![(DirectiveToken::Code, 0..31)]);
    }

    #[test]
    fn test_directive_lines() {
        assert_eq!(
            kinds("#ifdef A\nx\n#endif\n#ifndef B\n#endif\n#if !defined(C)\n#endif"),
            vec![
                DirectiveToken::Ifdef("A".to_string()),
                DirectiveToken::Code,
                DirectiveToken::Endif,
                DirectiveToken::Code,
                DirectiveToken::Ifndef("B".to_string()),
                DirectiveToken::Code,
                DirectiveToken::Endif,
                DirectiveToken::Code,
                DirectiveToken::If("!defined(C)".to_string()),
                DirectiveToken::Code,
                DirectiveToken::Endif,
            ]
        );
    }

    #[test]
    fn test_indented_directive_is_recognised() {
        assert_eq!(
            kinds("  \t#  ifdef X\n"),
            vec![
                DirectiveToken::Code,
                DirectiveToken::Ifdef("X".to_string()),
                DirectiveToken::Code,
            ]
        );
    }

    #[test]
    fn test_directive_after_text_is_code() {
        assert_eq!(kinds("// #ifdef X\n"), vec![DirectiveToken::Code]);
    }

    #[test]
    fn test_directive_spans_exclude_newline() {
        let tokens = lex_directives("#endif\n");
        assert_eq!(tokens[0], (DirectiveToken::Endif, 0..6));
        assert_eq!(tokens[1], (DirectiveToken::Code, 6..7));
    }
}
