//! Token definitions for Slice declarations
//!
//! Whitespace, line comments and block comments (doc comments included) are
//! skipped here; doc comments are recovered later from the original text by
//! byte offset.

use logos::{FilterResult, Lexer, Logos};
use std::fmt;

/// Skip past the `*/` closing a block comment; an unclosed comment is an error
fn block_comment(lex: &mut Lexer<Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => FilterResult::Error(()),
    }
}

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Never produced: the callback skips the whole comment
    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("module")]
    Module,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("exception")]
    Exception,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("sequence")]
    Sequence,
    #[token("dictionary")]
    Dictionary,
    #[token("const")]
    Const,
    #[token("local")]
    Local,
    #[token("extends")]
    Extends,
    #[token("throws")]
    Throws,
    #[token("idempotent")]
    Idempotent,
    #[token("out")]
    Out,
    #[token("optional")]
    Optional,

    // Leading directives
    #[regex(r"#[ \t]*pragma[ \t]+once")]
    PragmaOnce,
    #[regex(r#"#[ \t]*include[ \t]*(<[^>\n]*>|"[^"\n]*")"#)]
    Include,
    /// Recognised so that guard definitions do not fail the parse; ignored
    #[regex(r"#[ \t]*define[^\n]*")]
    Define,

    // Names
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// A keyword-shaped name written with a leading `\`
    #[regex(r"\\[A-Za-z_][A-Za-z0-9_]*")]
    EscapedIdentifier,

    // Literals
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,
    #[regex(r"[0-9]+|0[xX][0-9a-fA-F]+", |lex| lex.slice().to_string())]
    IntegerLiteral(String),
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?[fF]?|\.[0-9]+([eE][+-]?[0-9]+)?[fF]?|[0-9]+[eE][+-]?[0-9]+[fF]?")]
    FloatLiteral,

    // Punctuation
    #[token("::")]
    Scope,
    #[token("[[")]
    OpenGlobalMetadata,
    #[token("]]")]
    CloseGlobalMetadata,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,
    #[token("*")]
    Star,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::BlockComment => "comment",
            Token::Module => "'module'",
            Token::Class => "'class'",
            Token::Interface => "'interface'",
            Token::Exception => "'exception'",
            Token::Struct => "'struct'",
            Token::Enum => "'enum'",
            Token::Sequence => "'sequence'",
            Token::Dictionary => "'dictionary'",
            Token::Const => "'const'",
            Token::Local => "'local'",
            Token::Extends => "'extends'",
            Token::Throws => "'throws'",
            Token::Idempotent => "'idempotent'",
            Token::Out => "'out'",
            Token::Optional => "'optional'",
            Token::PragmaOnce => "'#pragma once'",
            Token::Include => "'#include'",
            Token::Define => "'#define'",
            Token::Identifier | Token::EscapedIdentifier => "identifier",
            Token::StringLiteral => "string literal",
            Token::IntegerLiteral(_) => "integer literal",
            Token::FloatLiteral => "floating-point literal",
            Token::Scope => "'::'",
            Token::OpenGlobalMetadata => "'[['",
            Token::CloseGlobalMetadata => "']]'",
            Token::OpenBracket => "'['",
            Token::CloseBracket => "']'",
            Token::OpenBrace => "'{'",
            Token::CloseBrace => "'}'",
            Token::OpenParen => "'('",
            Token::CloseParen => "')'",
            Token::Less => "'<'",
            Token::Greater => "'>'",
            Token::Comma => "','",
            Token::Semicolon => "';'",
            Token::Equals => "'='",
            Token::Star => "'*'",
            Token::Minus => "'-'",
            Token::Plus => "'+'",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Token::lexer(source)
            .map(|result| result.unwrap_or_else(|_| panic!("lex error in {:?}", source)))
            .collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            tokens("module modules local LocalObject \\module"),
            vec![
                Token::Module,
                Token::Identifier,
                Token::Local,
                Token::Identifier,
                Token::EscapedIdentifier,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            tokens("/** doc\n * more\n */ struct // trailing\n/**/ S"),
            vec![Token::Struct, Token::Identifier]
        );
    }

    #[test]
    fn test_block_comment_shapes() {
        assert_eq!(tokens("/* x */ M"), vec![Token::Identifier]);
        assert_eq!(tokens("/**/ M"), vec![Token::Identifier]);
        assert_eq!(tokens("/* a * b / c **/ M"), vec![Token::Identifier]);
        assert_eq!(tokens("a/*b*/c"), vec![Token::Identifier, Token::Identifier]);
    }

    #[test]
    fn test_unclosed_block_comment_is_an_error() {
        let results: Vec<_> = Token::lexer("M /* never closed").take(2).collect();
        assert_eq!(results, vec![Ok(Token::Identifier), Err(())]);
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            tokens("42 0x1F 3.14 1e10 2.5f \"a \\\" b\""),
            vec![
                Token::IntegerLiteral("42".to_string()),
                Token::IntegerLiteral("0x1F".to_string()),
                Token::FloatLiteral,
                Token::FloatLiteral,
                Token::FloatLiteral,
                Token::StringLiteral,
            ]
        );
    }

    #[test]
    fn test_metadata_brackets() {
        assert_eq!(
            tokens("[[\"a\"]] [\"b\"]"),
            vec![
                Token::OpenGlobalMetadata,
                Token::StringLiteral,
                Token::CloseGlobalMetadata,
                Token::OpenBracket,
                Token::StringLiteral,
                Token::CloseBracket,
            ]
        );
    }

    #[test]
    fn test_directives() {
        assert_eq!(
            tokens("#pragma once\n#include <Ice/Identity.ice>\n# include \"local.ice\"\n#define GUARD"),
            vec![Token::PragmaOnce, Token::Include, Token::Include, Token::Define]
        );
    }

    #[test]
    fn test_scoped_type() {
        assert_eq!(
            tokens("::Ice::Object*"),
            vec![
                Token::Scope,
                Token::Identifier,
                Token::Scope,
                Token::Identifier,
                Token::Star,
            ]
        );
    }
}
