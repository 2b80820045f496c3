//! The grammar engine
//!
//! A [`SliceParser`] owns both compiled grammars and is immutable once built, so
//! one value serves any number of parses. chumsky parsers share state through
//! `Rc` and are not `Sync`; the process default is therefore one engine per
//! thread, built on first use.

use super::grammar::{slice_source, ParserError};
use super::ir::SourceWithSpans;
use crate::slice::ast::SliceSource;
use crate::slice::building::AstBuilder;
use crate::slice::directives::grammar::{directive_source, Span};
use crate::slice::directives::{strip_with, DirectiveToken};
use crate::slice::error::{describe, furthest, DirectiveSyntaxError, ParseError, SliceError};
use crate::slice::lexing::{lex_with_spans, Token};
use chumsky::prelude::*;
use chumsky::{BoxedParser, Stream};
use tracing::{debug, debug_span};

pub struct SliceParser {
    directives: BoxedParser<'static, DirectiveToken, Vec<Span>, Simple<DirectiveToken>>,
    declarations: BoxedParser<'static, Token, SourceWithSpans, ParserError>,
}

impl SliceParser {
    /// Compile both grammars
    pub fn new() -> Self {
        Self {
            directives: directive_source().boxed(),
            declarations: slice_source().boxed(),
        }
    }

    /// Remove conditional-compilation blocks, preserving byte offsets
    pub fn strip(&self, source: &str) -> Result<String, DirectiveSyntaxError> {
        strip_with(&self.directives, source)
    }

    /// Parse a Slice source into its syntax tree
    ///
    /// Directives are stripped first; declarations are matched on the stripped
    /// text and doc comments are looked up in `source` itself.
    pub fn parse(&self, source: &str) -> Result<SliceSource, SliceError> {
        let span = debug_span!("parse", bytes = source.len());
        let _guard = span.enter();

        let stripped = self.strip(source)?;
        let tokens = lex_with_spans(&stripped)?;
        debug!(tokens = tokens.len(), "lexed declarations");

        let eoi = stripped.len();
        let tree = self
            .declarations
            .parse(Stream::from_iter(eoi..eoi, tokens.into_iter()))
            .map_err(|errors| declaration_failure(&stripped, errors))?;

        let ast = AstBuilder::new(&stripped, source).build_source(tree);
        debug!(modules = ast.modules.len(), "built syntax tree");
        Ok(ast)
    }
}

impl Default for SliceParser {
    fn default() -> Self {
        Self::new()
    }
}

fn declaration_failure(source: &str, errors: Vec<ParserError>) -> ParseError {
    match furthest(errors) {
        Some(error) => ParseError::at(source, error.span().start, describe(&error)),
        None => ParseError::at(source, source.len(), "unexpected end of input"),
    }
}

thread_local! {
    static DEFAULT_PARSER: SliceParser = SliceParser::new();
}

/// Run `f` with this thread's default engine
pub fn with_default_parser<R>(f: impl FnOnce(&SliceParser) -> R) -> R {
    DEFAULT_PARSER.with(f)
}
