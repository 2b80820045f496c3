//! Slice front end
//!
//! Turns Slice interface-definition source text into a typed syntax tree.
//!
//! Parsing runs in three stages:
//!
//! 1. `directives` strips `#ifdef` / `#ifndef` / `#if` blocks, blanking what it
//!    removes so byte offsets stay valid against the original text.
//! 2. `lexing` and `parsing` match the declaration grammar on the stripped text
//!    and produce a parse tree of spans.
//! 3. `building` converts that tree into the [`ast`], attaching doc comments
//!    found in the original text.
//!
//! ## Modules
//!
//! - `ast` - Syntax tree types and their serialized form
//! - `directives` - Conditional-compilation preprocessor
//! - `lexing` - Declaration tokens
//! - `parsing` - Declaration grammar and the [`SliceParser`] engine
//! - `building` - Parse tree to AST conversion, doc comment lookup
//! - `formats` - JSON, YAML and tree view output
//! - `error` - Failure kinds and diagnostics

pub mod ast;
pub mod building;
pub mod directives;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;

pub use ast::SliceSource;
pub use building::find_doc;
pub use directives::strip;
pub use error::{format_source_context, DirectiveSyntaxError, ParseError, SliceError};
pub use parsing::SliceParser;

/// Parse a Slice source with this thread's default engine
pub fn parse(source: &str) -> Result<SliceSource, SliceError> {
    parsing::with_default_parser(|parser| parser.parse(source))
}
