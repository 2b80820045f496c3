//! Conversion from the span-only parse tree to the AST
//!
//! One `build_*` function per production. Names, types and literals are sliced
//! out of the stripped text; doc comments are searched in the original text,
//! which has identical byte offsets. Conversion cannot fail once the grammar
//! has matched.

use super::doc_comment::find_doc;
use crate::slice::ast::{
    Class, ClassChild, ClassForward, Const, Dictionary, Enum, EnumElement, Exception, Field,
    Interface, InterfaceForward, Location, Module, ModuleChild, Operation, Parameter, Sequence,
    SliceSource, Struct, StructField,
};
use crate::slice::parsing::ir::{
    ClassChildWithSpans, ClassForwardWithSpans, ClassWithSpans, ConstWithSpans,
    DeclarationWithSpans, DictionaryWithSpans, DirectiveWithSpans, EnumElementWithSpans,
    EnumWithSpans, ExceptionWithSpans, FieldWithSpans, InterfaceForwardWithSpans,
    InterfaceWithSpans, MetadataWithSpans, ModuleChildWithSpans, ModuleWithSpans,
    OperationWithSpans, ParameterWithSpans, SequenceWithSpans, SourceWithSpans, Span,
    StructFieldWithSpans, StructWithSpans,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static INCLUDE_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<"]([^>"]*)[>"]"#).unwrap());

pub(crate) struct AstBuilder<'a> {
    /// Directive-stripped text the grammar matched
    source: &'a str,
    /// Text as written, doc comments included
    original: &'a str,
}

impl<'a> AstBuilder<'a> {
    pub(crate) fn new(source: &'a str, original: &'a str) -> Self {
        Self { source, original }
    }

    fn text(&self, span: &Span) -> String {
        self.source[span.clone()].to_string()
    }

    /// Identifier text without its escape marker
    fn identifier(&self, span: &Span) -> String {
        let raw = &self.source[span.clone()];
        raw.strip_prefix('\\').unwrap_or(raw).to_string()
    }

    /// Contents of a string literal, quotes removed, escapes kept as written
    fn string_contents(&self, span: &Span) -> String {
        self.source[span.start + 1..span.end - 1].to_string()
    }

    fn metadata(&self, metadata: &Option<MetadataWithSpans>) -> Vec<String> {
        match metadata {
            Some(metadata) => metadata
                .parts
                .iter()
                .map(|part| self.string_contents(part))
                .collect(),
            None => Vec::new(),
        }
    }

    fn doc<T>(&self, declaration: &DeclarationWithSpans<T>) -> Option<String> {
        find_doc(self.original, declaration.doc_anchor())
    }

    fn location<T>(declaration: &DeclarationWithSpans<T>) -> Location {
        Location::from(declaration.span.clone())
    }

    pub(crate) fn build_source(&self, tree: SourceWithSpans) -> SliceSource {
        let mut source = SliceSource {
            pragma_once: false,
            includes: Vec::new(),
            global_metadata: Vec::new(),
            modules: Vec::new(),
        };

        for directive in &tree.directives {
            match directive {
                DirectiveWithSpans::PragmaOnce => source.pragma_once = true,
                DirectiveWithSpans::Include(span) => {
                    let text = &self.source[span.clone()];
                    match INCLUDE_PATH.captures(text) {
                        Some(captures) => source.includes.push(captures[1].to_string()),
                        None => trace!(directive = text, "include without a path"),
                    }
                }
                DirectiveWithSpans::GlobalMetadata(parts) => source
                    .global_metadata
                    .extend(parts.iter().map(|part| self.string_contents(part))),
                DirectiveWithSpans::Define => {}
            }
        }

        source.modules = tree
            .modules
            .into_iter()
            .map(|module| self.build_module(module))
            .collect();
        source
    }

    fn build_module(&self, declaration: DeclarationWithSpans<ModuleWithSpans>) -> Module {
        Module {
            location: Self::location(&declaration),
            name: self.identifier(&declaration.node.name),
            doc: self.doc(&declaration),
            metadata: self.metadata(&declaration.metadata),
            content: declaration
                .node
                .content
                .into_iter()
                .map(|child| self.build_module_child(child))
                .collect(),
        }
    }

    fn build_module_child(&self, child: ModuleChildWithSpans) -> ModuleChild {
        match child {
            ModuleChildWithSpans::Module(m) => ModuleChild::Module(self.build_module(m)),
            ModuleChildWithSpans::ClassForward(c) => {
                ModuleChild::ClassForward(self.build_class_forward(c))
            }
            ModuleChildWithSpans::Class(c) => ModuleChild::Class(self.build_class(c)),
            ModuleChildWithSpans::InterfaceForward(i) => {
                ModuleChild::InterfaceForward(self.build_interface_forward(i))
            }
            ModuleChildWithSpans::Interface(i) => ModuleChild::Interface(self.build_interface(i)),
            ModuleChildWithSpans::Exception(e) => ModuleChild::Exception(self.build_exception(e)),
            ModuleChildWithSpans::Struct(s) => ModuleChild::Struct(self.build_struct(s)),
            ModuleChildWithSpans::Enum(e) => ModuleChild::Enum(self.build_enum(e)),
            ModuleChildWithSpans::Sequence(s) => ModuleChild::Sequence(self.build_sequence(s)),
            ModuleChildWithSpans::Dictionary(d) => {
                ModuleChild::Dictionary(self.build_dictionary(d))
            }
            ModuleChildWithSpans::Const(c) => ModuleChild::Const(self.build_const(c)),
        }
    }

    fn build_class_forward(
        &self,
        declaration: DeclarationWithSpans<ClassForwardWithSpans>,
    ) -> ClassForward {
        let node = &declaration.node;
        ClassForward {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            local: node.local,
            extends: node.extends.as_ref().map(|span| self.text(span)),
        }
    }

    fn build_class(&self, declaration: DeclarationWithSpans<ClassWithSpans>) -> Class {
        let location = Self::location(&declaration);
        let doc = self.doc(&declaration);
        let metadata = self.metadata(&declaration.metadata);
        let node = declaration.node;

        Class {
            location,
            name: self.identifier(&node.name),
            compact_type_id: node.compact_type_id,
            doc,
            metadata,
            local: node.local,
            extends: node.extends.as_ref().map(|span| self.text(span)),
            content: node
                .content
                .into_iter()
                .map(|member| match member {
                    ClassChildWithSpans::Field(f) => ClassChild::Field(self.build_field(f)),
                    ClassChildWithSpans::Operation(o) => {
                        ClassChild::Operation(self.build_operation(o))
                    }
                })
                .collect(),
        }
    }

    fn build_interface_forward(
        &self,
        declaration: DeclarationWithSpans<InterfaceForwardWithSpans>,
    ) -> InterfaceForward {
        let node = &declaration.node;
        InterfaceForward {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            local: node.local,
            extends: node.extends.iter().map(|span| self.text(span)).collect(),
        }
    }

    fn build_interface(&self, declaration: DeclarationWithSpans<InterfaceWithSpans>) -> Interface {
        let location = Self::location(&declaration);
        let doc = self.doc(&declaration);
        let metadata = self.metadata(&declaration.metadata);
        let node = declaration.node;

        Interface {
            location,
            name: self.identifier(&node.name),
            doc,
            metadata,
            local: node.local,
            extends: node.extends.iter().map(|span| self.text(span)).collect(),
            content: node
                .content
                .into_iter()
                .map(|operation| self.build_operation(operation))
                .collect(),
        }
    }

    fn build_exception(&self, declaration: DeclarationWithSpans<ExceptionWithSpans>) -> Exception {
        let location = Self::location(&declaration);
        let doc = self.doc(&declaration);
        let metadata = self.metadata(&declaration.metadata);
        let node = declaration.node;

        Exception {
            location,
            name: self.identifier(&node.name),
            doc,
            metadata,
            local: node.local,
            extends: node.extends.as_ref().map(|span| self.text(span)),
            content: node
                .content
                .into_iter()
                .map(|field| self.build_field(field))
                .collect(),
        }
    }

    fn build_struct(&self, declaration: DeclarationWithSpans<StructWithSpans>) -> Struct {
        let location = Self::location(&declaration);
        let doc = self.doc(&declaration);
        let metadata = self.metadata(&declaration.metadata);
        let node = declaration.node;

        Struct {
            location,
            name: self.identifier(&node.name),
            doc,
            metadata,
            local: node.local,
            fields: node
                .fields
                .into_iter()
                .map(|field| self.build_struct_field(field))
                .collect(),
        }
    }

    fn build_struct_field(
        &self,
        declaration: DeclarationWithSpans<StructFieldWithSpans>,
    ) -> StructField {
        let node = &declaration.node;
        StructField {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            metadata: self.metadata(&declaration.metadata),
            data_type: self.text(&node.data_type),
            default_value: node.default_value.as_ref().map(|span| self.text(span)),
        }
    }

    fn build_enum(&self, declaration: DeclarationWithSpans<EnumWithSpans>) -> Enum {
        let location = Self::location(&declaration);
        let doc = self.doc(&declaration);
        let metadata = self.metadata(&declaration.metadata);
        let node = declaration.node;

        Enum {
            location,
            name: self.identifier(&node.name),
            doc,
            metadata,
            local: node.local,
            enums: node
                .elements
                .into_iter()
                .map(|element| self.build_enum_element(element))
                .collect(),
        }
    }

    fn build_enum_element(
        &self,
        declaration: DeclarationWithSpans<EnumElementWithSpans>,
    ) -> EnumElement {
        let node = &declaration.node;
        EnumElement {
            location: Self::location(&declaration),
            doc: self.doc(&declaration),
            name: self.identifier(&node.name),
            value: node.value.as_ref().map(|span| self.text(span)),
        }
    }

    fn build_sequence(&self, declaration: DeclarationWithSpans<SequenceWithSpans>) -> Sequence {
        let node = &declaration.node;
        Sequence {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            metadata: self.metadata(&declaration.metadata),
            local: node.local,
            data_type_metadata: self.metadata(&node.element.metadata),
            data_type: self.text(&node.element.data_type),
        }
    }

    fn build_dictionary(
        &self,
        declaration: DeclarationWithSpans<DictionaryWithSpans>,
    ) -> Dictionary {
        let node = &declaration.node;
        Dictionary {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            metadata: self.metadata(&declaration.metadata),
            local: node.local,
            key_type_metadata: self.metadata(&node.key.metadata),
            key_type: self.text(&node.key.data_type),
            value_type_metadata: self.metadata(&node.value.metadata),
            value_type: self.text(&node.value.data_type),
        }
    }

    fn build_const(&self, declaration: DeclarationWithSpans<ConstWithSpans>) -> Const {
        let node = &declaration.node;
        Const {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            data_type: self.text(&node.data_type),
            value: self.text(&node.value),
        }
    }

    fn build_operation(&self, declaration: DeclarationWithSpans<OperationWithSpans>) -> Operation {
        let location = Self::location(&declaration);
        let doc = self.doc(&declaration);
        let metadata = self.metadata(&declaration.metadata);
        let node = declaration.node;

        Operation {
            location,
            name: self.identifier(&node.name),
            doc,
            metadata,
            idempotent: node.idempotent,
            return_optional: node.return_optional,
            return_type: self.text(&node.return_type),
            parameters: node
                .parameters
                .into_iter()
                .map(|parameter| self.build_parameter(parameter))
                .collect(),
            throws: node.throws.iter().map(|span| self.text(span)).collect(),
        }
    }

    fn build_parameter(&self, declaration: DeclarationWithSpans<ParameterWithSpans>) -> Parameter {
        let node = &declaration.node;
        Parameter {
            name: self.identifier(&node.name),
            location: Self::location(&declaration),
            metadata: self.metadata(&declaration.metadata),
            out: node.out,
            optional: node.optional,
            data_type: self.text(&node.data_type),
        }
    }

    fn build_field(&self, declaration: DeclarationWithSpans<FieldWithSpans>) -> Field {
        let node = &declaration.node;
        Field {
            location: Self::location(&declaration),
            name: self.identifier(&node.name),
            doc: self.doc(&declaration),
            metadata: self.metadata(&declaration.metadata),
            optional: node.optional,
            data_type: self.text(&node.data_type),
            default_value: node.default_value.as_ref().map(|span| self.text(span)),
        }
    }
}
