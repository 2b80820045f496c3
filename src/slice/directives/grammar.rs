//! Conditional-compilation block grammar
//!
//! Matches the directive token stream and produces the byte spans of the code
//! regions that survive, in source order. There is no macro environment:
//! `#ifdef` blocks are always dropped, `#ifndef` blocks always kept, and `#if`
//! blocks kept only when the condition reads as a negated `defined` test.

use super::tokens::DirectiveToken;
use chumsky::prelude::*;
use std::ops::Range;

pub(crate) type Span = Range<usize>;

/// Whether an `#if` condition keeps its block
pub(crate) fn keeps_block(condition: &str) -> bool {
    condition.starts_with("!defined")
}

/// Build the directive grammar: `Source = (Code | Ifdef | Ifndef | If)*`
pub(crate) fn directive_source(
) -> impl Parser<DirectiveToken, Vec<Span>, Error = Simple<DirectiveToken>> + Clone {
    recursive(|source| {
        let code = just(DirectiveToken::Code).map_with_span(|_, span: Span| vec![span]);

        let ifdef = select! { DirectiveToken::Ifdef(_) => () }
            .ignore_then(source.clone())
            .then_ignore(just(DirectiveToken::Endif))
            .map(|_: Vec<Span>| Vec::new());

        let ifndef = select! { DirectiveToken::Ifndef(_) => () }
            .ignore_then(source.clone())
            .then_ignore(just(DirectiveToken::Endif));

        let conditional = select! { DirectiveToken::If(condition) => condition }
            .then(source)
            .then_ignore(just(DirectiveToken::Endif))
            .map(|(condition, kept): (String, Vec<Span>)| {
                if keeps_block(&condition) {
                    kept
                } else {
                    Vec::new()
                }
            });

        choice((code, ifdef, ifndef, conditional))
            .repeated()
            .flatten()
    })
    .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::directives::tokens::lex_directives;
    use chumsky::Stream;

    fn kept(source: &str) -> Result<Vec<Span>, Vec<Simple<DirectiveToken>>> {
        let tokens = lex_directives(source);
        let eoi = source.len();
        directive_source().parse(Stream::from_iter(eoi..eoi, tokens.into_iter()))
    }

    #[test]
    fn test_code_only() {
        assert_eq!(kept("a\nb\n").unwrap(), vec![0..4]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kept("").unwrap(), Vec::<Span>::new());
    }

    #[test]
    fn test_ifdef_dropped_ifndef_kept() {
        let source = "#ifdef A\nx\n#endif\n#ifndef B\ny\n#endif\n";
        let regions = kept(source).unwrap();
        let texts: Vec<&str> = regions.iter().map(|r| &source[r.clone()]).collect();
        assert_eq!(texts, vec!["\n", "\ny\n", "\n"]);
    }

    #[test]
    fn test_if_condition() {
        assert!(keeps_block("!defined(kek)"));
        assert!(keeps_block("!defined X"));
        assert!(!keeps_block("defined(kek)"));
        assert!(!keeps_block("X > 1"));

        let source = "#if defined(A)\nx\n#endif\n#if !defined(B)\ny\n#endif";
        let regions = kept(source).unwrap();
        let texts: Vec<&str> = regions.iter().map(|r| &source[r.clone()]).collect();
        assert_eq!(texts, vec!["\n", "\ny\n"]);
    }

    #[test]
    fn test_nested_ifdef_inside_ifndef() {
        let source = "#ifndef A\na\n#ifdef B\nb\n#endif\nc\n#endif\n";
        let regions = kept(source).unwrap();
        let texts: Vec<&str> = regions.iter().map(|r| &source[r.clone()]).collect();
        assert_eq!(texts, vec!["\na\n", "\nc\n", "\n"]);
    }

    #[test]
    fn test_unbalanced_fails() {
        assert!(kept("#ifdef A\nx\n").is_err());
        assert!(kept("x\n#endif\n").is_err());
    }
}
