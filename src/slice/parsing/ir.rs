//! Intermediate parse tree holding spans instead of extracted text
//!
//! The declaration grammar never sees source text, only tokens, so everything it
//! captures is a byte span into the stripped source. The builder turns these
//! into the final AST once matching has succeeded.

use std::ops::Range;

pub(crate) type Span = Range<usize>;

/// `[ "a", "b" ]`: the bracketed block span and the span of each string
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MetadataWithSpans {
    pub(crate) span: Span,
    pub(crate) parts: Vec<Span>,
}

/// A declaration with its optional leading metadata
///
/// `span` covers the declaration itself: first modifier or keyword through the
/// terminating `;`, never the metadata block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeclarationWithSpans<T> {
    pub(crate) metadata: Option<MetadataWithSpans>,
    pub(crate) span: Span,
    pub(crate) node: T,
}

impl<T> DeclarationWithSpans<T> {
    /// Where a doc comment for this declaration has to end
    pub(crate) fn doc_anchor(&self) -> usize {
        match &self.metadata {
            Some(metadata) => metadata.span.start,
            None => self.span.start,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DirectiveWithSpans {
    PragmaOnce,
    /// The whole `#include ...` token
    Include(Span),
    GlobalMetadata(Vec<Span>),
    Define,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceWithSpans {
    pub(crate) directives: Vec<DirectiveWithSpans>,
    pub(crate) modules: Vec<DeclarationWithSpans<ModuleWithSpans>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ModuleWithSpans {
    pub(crate) name: Span,
    pub(crate) content: Vec<ModuleChildWithSpans>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ModuleChildWithSpans {
    Module(DeclarationWithSpans<ModuleWithSpans>),
    ClassForward(DeclarationWithSpans<ClassForwardWithSpans>),
    Class(DeclarationWithSpans<ClassWithSpans>),
    InterfaceForward(DeclarationWithSpans<InterfaceForwardWithSpans>),
    Interface(DeclarationWithSpans<InterfaceWithSpans>),
    Exception(DeclarationWithSpans<ExceptionWithSpans>),
    Struct(DeclarationWithSpans<StructWithSpans>),
    Enum(DeclarationWithSpans<EnumWithSpans>),
    Sequence(DeclarationWithSpans<SequenceWithSpans>),
    Dictionary(DeclarationWithSpans<DictionaryWithSpans>),
    Const(DeclarationWithSpans<ConstWithSpans>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassForwardWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) extends: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) compact_type_id: Option<u32>,
    pub(crate) extends: Option<Span>,
    pub(crate) content: Vec<ClassChildWithSpans>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ClassChildWithSpans {
    Field(DeclarationWithSpans<FieldWithSpans>),
    Operation(DeclarationWithSpans<OperationWithSpans>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InterfaceForwardWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) extends: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InterfaceWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) extends: Vec<Span>,
    pub(crate) content: Vec<DeclarationWithSpans<OperationWithSpans>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExceptionWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) extends: Option<Span>,
    pub(crate) content: Vec<DeclarationWithSpans<FieldWithSpans>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StructWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) fields: Vec<DeclarationWithSpans<StructFieldWithSpans>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StructFieldWithSpans {
    pub(crate) data_type: Span,
    pub(crate) name: Span,
    pub(crate) default_value: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumWithSpans {
    pub(crate) local: bool,
    pub(crate) name: Span,
    pub(crate) elements: Vec<DeclarationWithSpans<EnumElementWithSpans>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumElementWithSpans {
    pub(crate) name: Span,
    pub(crate) value: Option<Span>,
}

/// Element, key or value type of a collection, with its own metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CollectionTypeWithSpans {
    pub(crate) metadata: Option<MetadataWithSpans>,
    pub(crate) data_type: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SequenceWithSpans {
    pub(crate) local: bool,
    pub(crate) element: CollectionTypeWithSpans,
    pub(crate) name: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DictionaryWithSpans {
    pub(crate) local: bool,
    pub(crate) key: CollectionTypeWithSpans,
    pub(crate) value: CollectionTypeWithSpans,
    pub(crate) name: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConstWithSpans {
    pub(crate) data_type: Span,
    pub(crate) name: Span,
    pub(crate) value: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OperationWithSpans {
    pub(crate) idempotent: bool,
    pub(crate) return_optional: Option<u32>,
    pub(crate) return_type: Span,
    pub(crate) name: Span,
    pub(crate) parameters: Vec<DeclarationWithSpans<ParameterWithSpans>>,
    pub(crate) throws: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParameterWithSpans {
    pub(crate) out: bool,
    pub(crate) optional: Option<u32>,
    pub(crate) data_type: Span,
    pub(crate) name: Span,
}

/// Class or exception data member
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldWithSpans {
    pub(crate) optional: Option<u32>,
    pub(crate) data_type: Span,
    pub(crate) name: Span,
    pub(crate) default_value: Option<Span>,
}
