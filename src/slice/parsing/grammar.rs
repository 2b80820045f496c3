//! Declaration grammar for Slice sources using chumsky
//!
//! Operates on the token stream of directive-stripped text and produces the
//! span-only parse tree of [`super::ir`]. Alternatives that share a prefix (a
//! forward declaration and its full form, a data member and an operation) are
//! tried in order and backtrack.

use super::ir::{
    ClassChildWithSpans, ClassForwardWithSpans, ClassWithSpans, CollectionTypeWithSpans,
    ConstWithSpans, DeclarationWithSpans, DictionaryWithSpans, DirectiveWithSpans,
    EnumElementWithSpans, EnumWithSpans, ExceptionWithSpans, FieldWithSpans,
    InterfaceForwardWithSpans, InterfaceWithSpans, MetadataWithSpans, ModuleChildWithSpans,
    ModuleWithSpans, OperationWithSpans, ParameterWithSpans, SequenceWithSpans, SourceWithSpans,
    Span, StructFieldWithSpans, StructWithSpans,
};
use crate::slice::lexing::Token;
use chumsky::prelude::*;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Match one token satisfying `accept`, reporting `kind` as what was expected
fn expect(
    kind: Token,
    accept: fn(&Token) -> bool,
) -> impl Parser<Token, Span, Error = ParserError> + Clone {
    filter_map(move |span: Span, token: Token| {
        if accept(&token) {
            Ok(span)
        } else {
            Err(Simple::expected_input_found(
                span,
                [Some(kind.clone())],
                Some(token),
            ))
        }
    })
}

fn identifier() -> impl Parser<Token, Span, Error = ParserError> + Clone {
    expect(Token::Identifier, |t| {
        matches!(t, Token::Identifier | Token::EscapedIdentifier)
    })
}

fn string_literal() -> impl Parser<Token, Span, Error = ParserError> + Clone {
    expect(Token::StringLiteral, |t| *t == Token::StringLiteral)
}

/// Decimal or `0x` hexadecimal integer
pub(crate) fn parse_integer(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

/// Unsigned integer used for optional tags and compact type ids
fn tag() -> impl Parser<Token, u32, Error = ParserError> + Clone {
    filter_map(|span: Span, token: Token| match token {
        Token::IntegerLiteral(text) => parse_integer(&text)
            .ok_or_else(|| Simple::custom(span, format!("integer {} is out of range", text))),
        other => Err(Simple::expected_input_found(
            span,
            [Some(Token::IntegerLiteral(String::new()))],
            Some(other),
        )),
    })
}

/// `::`? ident (`::` ident)*
fn scoped_name() -> impl Parser<Token, Span, Error = ParserError> + Clone {
    just(Token::Scope)
        .or_not()
        .then(identifier())
        .then(just(Token::Scope).then(identifier()).repeated())
        .map_with_span(|_, span: Span| span)
}

/// A type reference: scoped name with an optional proxy `*`
fn data_type() -> impl Parser<Token, Span, Error = ParserError> + Clone {
    scoped_name()
        .then(just(Token::Star).or_not())
        .map_with_span(|_, span: Span| span)
}

/// Constant values and defaults: string, signed number or enumerator name
fn literal() -> impl Parser<Token, Span, Error = ParserError> + Clone {
    let number = expect(Token::IntegerLiteral(String::new()), |t| {
        matches!(t, Token::IntegerLiteral(_) | Token::FloatLiteral)
    });
    let signed = just(Token::Minus)
        .or(just(Token::Plus))
        .or_not()
        .then(number)
        .ignored();

    choice((string_literal().ignored(), signed, scoped_name().ignored()))
        .map_with_span(|_, span: Span| span)
}

fn local() -> impl Parser<Token, bool, Error = ParserError> + Clone {
    just(Token::Local).or_not().map(|l| l.is_some())
}

/// `optional(tag)`
fn optional_tag() -> impl Parser<Token, u32, Error = ParserError> + Clone {
    just(Token::Optional).ignore_then(tag().delimited_by(just(Token::OpenParen), just(Token::CloseParen)))
}

fn default_value() -> impl Parser<Token, Option<Span>, Error = ParserError> + Clone {
    just(Token::Equals).ignore_then(literal()).or_not()
}

fn metadata() -> impl Parser<Token, MetadataWithSpans, Error = ParserError> + Clone {
    string_literal()
        .separated_by(just(Token::Comma))
        .at_least(1)
        .delimited_by(just(Token::OpenBracket), just(Token::CloseBracket))
        .map_with_span(|parts, span: Span| MetadataWithSpans { span, parts })
}

/// A declaration that may be preceded by a metadata block
fn declared<T, P>(body: P) -> impl Parser<Token, DeclarationWithSpans<T>, Error = ParserError> + Clone
where
    P: Parser<Token, T, Error = ParserError> + Clone,
{
    metadata()
        .or_not()
        .then(body.map_with_span(|node, span: Span| (node, span)))
        .map(|(metadata, (node, span))| DeclarationWithSpans {
            metadata,
            span,
            node,
        })
}

/// A declaration that never carries metadata
fn undecorated<T, P>(body: P) -> impl Parser<Token, DeclarationWithSpans<T>, Error = ParserError> + Clone
where
    P: Parser<Token, T, Error = ParserError> + Clone,
{
    body.map_with_span(|node, span: Span| DeclarationWithSpans {
        metadata: None,
        span,
        node,
    })
}

fn braced<T, P>(item: P) -> impl Parser<Token, Vec<T>, Error = ParserError> + Clone
where
    P: Parser<Token, T, Error = ParserError> + Clone,
{
    item.repeated()
        .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace))
}

fn class_extends() -> impl Parser<Token, Option<Span>, Error = ParserError> + Clone {
    just(Token::Extends).ignore_then(scoped_name()).or_not()
}

fn interface_extends() -> impl Parser<Token, Vec<Span>, Error = ParserError> + Clone {
    just(Token::Extends)
        .ignore_then(scoped_name().separated_by(just(Token::Comma)).at_least(1))
        .or_not()
        .map(Option::unwrap_or_default)
}

fn parameter() -> impl Parser<Token, DeclarationWithSpans<ParameterWithSpans>, Error = ParserError> + Clone
{
    declared(
        just(Token::Out)
            .or_not()
            .map(|o| o.is_some())
            .then(optional_tag().or_not())
            .then(data_type())
            .then(identifier())
            .map(|(((out, optional), data_type), name)| ParameterWithSpans {
                out,
                optional,
                data_type,
                name,
            }),
    )
}

fn operation() -> impl Parser<Token, DeclarationWithSpans<OperationWithSpans>, Error = ParserError> + Clone
{
    let throws = just(Token::Throws)
        .ignore_then(scoped_name().separated_by(just(Token::Comma)).at_least(1))
        .or_not()
        .map(Option::unwrap_or_default);

    declared(
        just(Token::Idempotent)
            .or_not()
            .map(|i| i.is_some())
            .then(optional_tag().or_not())
            .then(data_type())
            .then(identifier())
            .then(
                parameter()
                    .separated_by(just(Token::Comma))
                    .delimited_by(just(Token::OpenParen), just(Token::CloseParen)),
            )
            .then(throws)
            .then_ignore(just(Token::Semicolon))
            .map(
                |(((((idempotent, return_optional), return_type), name), parameters), throws)| {
                    OperationWithSpans {
                        idempotent,
                        return_optional,
                        return_type,
                        name,
                        parameters,
                        throws,
                    }
                },
            ),
    )
    .boxed()
}

/// Class or exception data member
fn field() -> impl Parser<Token, DeclarationWithSpans<FieldWithSpans>, Error = ParserError> + Clone {
    declared(
        optional_tag()
            .or_not()
            .then(data_type())
            .then(identifier())
            .then(default_value())
            .then_ignore(just(Token::Semicolon))
            .map(|(((optional, data_type), name), default_value)| FieldWithSpans {
                optional,
                data_type,
                name,
                default_value,
            }),
    )
    .boxed()
}

fn struct_field(
) -> impl Parser<Token, DeclarationWithSpans<StructFieldWithSpans>, Error = ParserError> + Clone {
    declared(
        data_type()
            .then(identifier())
            .then(default_value())
            .then_ignore(just(Token::Semicolon))
            .map(|((data_type, name), default_value)| StructFieldWithSpans {
                data_type,
                name,
                default_value,
            }),
    )
}

fn class_forward(
) -> impl Parser<Token, DeclarationWithSpans<ClassForwardWithSpans>, Error = ParserError> + Clone {
    undecorated(
        local()
            .then_ignore(just(Token::Class))
            .then(identifier())
            .then(class_extends())
            .then_ignore(just(Token::Semicolon))
            .map(|((local, name), extends)| ClassForwardWithSpans {
                local,
                name,
                extends,
            }),
    )
}

fn class() -> impl Parser<Token, DeclarationWithSpans<ClassWithSpans>, Error = ParserError> + Clone {
    let member = choice((
        field().map(ClassChildWithSpans::Field),
        operation().map(ClassChildWithSpans::Operation),
    ));

    declared(
        local()
            .then_ignore(just(Token::Class))
            .then(identifier())
            .then(
                tag()
                    .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
                    .or_not(),
            )
            .then(class_extends())
            .then(braced(member))
            .then_ignore(just(Token::Semicolon))
            .map(
                |((((local, name), compact_type_id), extends), content)| ClassWithSpans {
                    local,
                    name,
                    compact_type_id,
                    extends,
                    content,
                },
            ),
    )
    .boxed()
}

fn interface_forward(
) -> impl Parser<Token, DeclarationWithSpans<InterfaceForwardWithSpans>, Error = ParserError> + Clone
{
    undecorated(
        local()
            .then_ignore(just(Token::Interface))
            .then(identifier())
            .then(interface_extends())
            .then_ignore(just(Token::Semicolon))
            .map(|((local, name), extends)| InterfaceForwardWithSpans {
                local,
                name,
                extends,
            }),
    )
}

fn interface(
) -> impl Parser<Token, DeclarationWithSpans<InterfaceWithSpans>, Error = ParserError> + Clone {
    declared(
        local()
            .then_ignore(just(Token::Interface))
            .then(identifier())
            .then(interface_extends())
            .then(braced(operation()))
            .then_ignore(just(Token::Semicolon))
            .map(|(((local, name), extends), content)| InterfaceWithSpans {
                local,
                name,
                extends,
                content,
            }),
    )
    .boxed()
}

fn exception(
) -> impl Parser<Token, DeclarationWithSpans<ExceptionWithSpans>, Error = ParserError> + Clone {
    declared(
        local()
            .then_ignore(just(Token::Exception))
            .then(identifier())
            .then(class_extends())
            .then(braced(field()))
            .then_ignore(just(Token::Semicolon))
            .map(|(((local, name), extends), content)| ExceptionWithSpans {
                local,
                name,
                extends,
                content,
            }),
    )
    .boxed()
}

fn structure() -> impl Parser<Token, DeclarationWithSpans<StructWithSpans>, Error = ParserError> + Clone
{
    declared(
        local()
            .then_ignore(just(Token::Struct))
            .then(identifier())
            .then(braced(struct_field()))
            .then_ignore(just(Token::Semicolon))
            .map(|((local, name), fields)| StructWithSpans {
                local,
                name,
                fields,
            }),
    )
    .boxed()
}

fn enum_element(
) -> impl Parser<Token, DeclarationWithSpans<EnumElementWithSpans>, Error = ParserError> + Clone {
    undecorated(
        identifier()
            .then(default_value())
            .map(|(name, value)| EnumElementWithSpans { name, value }),
    )
}

fn enumeration() -> impl Parser<Token, DeclarationWithSpans<EnumWithSpans>, Error = ParserError> + Clone
{
    declared(
        local()
            .then_ignore(just(Token::Enum))
            .then(identifier())
            .then(
                enum_element()
                    .separated_by(just(Token::Comma))
                    .allow_trailing()
                    .at_least(1)
                    .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace)),
            )
            .then_ignore(just(Token::Semicolon))
            .map(|((local, name), elements)| EnumWithSpans {
                local,
                name,
                elements,
            }),
    )
    .boxed()
}

/// Element, key or value type inside `< >`
fn collection_type() -> impl Parser<Token, CollectionTypeWithSpans, Error = ParserError> + Clone {
    metadata()
        .or_not()
        .then(data_type())
        .map(|(metadata, data_type)| CollectionTypeWithSpans {
            metadata,
            data_type,
        })
}

fn sequence() -> impl Parser<Token, DeclarationWithSpans<SequenceWithSpans>, Error = ParserError> + Clone
{
    declared(
        local()
            .then_ignore(just(Token::Sequence))
            .then(collection_type().delimited_by(just(Token::Less), just(Token::Greater)))
            .then(identifier())
            .then_ignore(just(Token::Semicolon))
            .map(|((local, element), name)| SequenceWithSpans {
                local,
                element,
                name,
            }),
    )
    .boxed()
}

fn dictionary(
) -> impl Parser<Token, DeclarationWithSpans<DictionaryWithSpans>, Error = ParserError> + Clone {
    declared(
        local()
            .then_ignore(just(Token::Dictionary))
            .then_ignore(just(Token::Less))
            .then(collection_type())
            .then_ignore(just(Token::Comma))
            .then(collection_type())
            .then_ignore(just(Token::Greater))
            .then(identifier())
            .then_ignore(just(Token::Semicolon))
            .map(|(((local, key), value), name)| DictionaryWithSpans {
                local,
                key,
                value,
                name,
            }),
    )
    .boxed()
}

fn constant() -> impl Parser<Token, DeclarationWithSpans<ConstWithSpans>, Error = ParserError> + Clone
{
    undecorated(
        just(Token::Const)
            .ignore_then(data_type())
            .then(identifier())
            .then_ignore(just(Token::Equals))
            .then(literal())
            .then_ignore(just(Token::Semicolon))
            .map(|((data_type, name), value)| ConstWithSpans {
                data_type,
                name,
                value,
            }),
    )
}

/// `module` declarations nest; everything else is a leaf or a closed body
fn module() -> impl Parser<Token, DeclarationWithSpans<ModuleWithSpans>, Error = ParserError> + Clone
{
    recursive(|module| {
        let child = choice((
            module.map(ModuleChildWithSpans::Module),
            class_forward().map(ModuleChildWithSpans::ClassForward),
            class().map(ModuleChildWithSpans::Class),
            interface_forward().map(ModuleChildWithSpans::InterfaceForward),
            interface().map(ModuleChildWithSpans::Interface),
            exception().map(ModuleChildWithSpans::Exception),
            structure().map(ModuleChildWithSpans::Struct),
            enumeration().map(ModuleChildWithSpans::Enum),
            sequence().map(ModuleChildWithSpans::Sequence),
            dictionary().map(ModuleChildWithSpans::Dictionary),
            constant().map(ModuleChildWithSpans::Const),
        ));

        declared(
            just(Token::Module)
                .ignore_then(identifier())
                .then(braced(child))
                .then_ignore(just(Token::Semicolon))
                .map(|(name, content)| ModuleWithSpans { name, content }),
        )
    })
}

/// File-level directives that precede the first module
fn directive() -> impl Parser<Token, DirectiveWithSpans, Error = ParserError> + Clone {
    choice((
        just(Token::PragmaOnce).to(DirectiveWithSpans::PragmaOnce),
        just(Token::Include).map_with_span(|_, span: Span| DirectiveWithSpans::Include(span)),
        just(Token::Define).to(DirectiveWithSpans::Define),
        string_literal()
            .separated_by(just(Token::Comma))
            .at_least(1)
            .delimited_by(
                just(Token::OpenGlobalMetadata),
                just(Token::CloseGlobalMetadata),
            )
            .map(DirectiveWithSpans::GlobalMetadata),
    ))
}

/// `Directive* ModuleDecl* EOI`
pub(crate) fn slice_source() -> impl Parser<Token, SourceWithSpans, Error = ParserError> + Clone {
    directive()
        .repeated()
        .then(module().repeated())
        .then_ignore(end())
        .map(|(directives, modules)| SourceWithSpans {
            directives,
            modules,
        })
}
