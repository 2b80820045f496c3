//! Content items
//!
//! `ModuleChild` wraps every declaration that can appear inside a module;
//! `ClassChild` wraps the members of a class body. Both serialize as the
//! wrapped node itself, whose own `type` field is the discriminant.

use super::class::{Class, ClassForward};
use super::collections::{Dictionary, Sequence};
use super::constant::Const;
use super::enumeration::Enum;
use super::exception::Exception;
use super::field::Field;
use super::interface::{Interface, InterfaceForward};
use super::module::Module;
use super::operation::Operation;
use super::structure::Struct;
use crate::slice::ast::location::Location;
use crate::slice::ast::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleChild {
    Module(Module),
    ClassForward(ClassForward),
    Class(Class),
    InterfaceForward(InterfaceForward),
    Interface(Interface),
    Exception(Exception),
    Struct(Struct),
    Enum(Enum),
    Sequence(Sequence),
    Dictionary(Dictionary),
    Const(Const),
}

impl ModuleChild {
    fn node(&self) -> &dyn AstNode {
        match self {
            ModuleChild::Module(m) => m,
            ModuleChild::ClassForward(c) => c,
            ModuleChild::Class(c) => c,
            ModuleChild::InterfaceForward(i) => i,
            ModuleChild::Interface(i) => i,
            ModuleChild::Exception(e) => e,
            ModuleChild::Struct(s) => s,
            ModuleChild::Enum(e) => e,
            ModuleChild::Sequence(s) => s,
            ModuleChild::Dictionary(d) => d,
            ModuleChild::Const(c) => c,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ModuleChild::Module(m) => &m.name,
            ModuleChild::ClassForward(c) => &c.name,
            ModuleChild::Class(c) => &c.name,
            ModuleChild::InterfaceForward(i) => &i.name,
            ModuleChild::Interface(i) => &i.name,
            ModuleChild::Exception(e) => &e.name,
            ModuleChild::Struct(s) => &s.name,
            ModuleChild::Enum(e) => &e.name,
            ModuleChild::Sequence(s) => &s.name,
            ModuleChild::Dictionary(d) => &d.name,
            ModuleChild::Const(c) => &c.name,
        }
    }

    pub fn doc(&self) -> Option<&str> {
        match self {
            ModuleChild::Module(m) => m.doc.as_deref(),
            ModuleChild::ClassForward(c) => c.doc.as_deref(),
            ModuleChild::Class(c) => c.doc.as_deref(),
            ModuleChild::InterfaceForward(i) => i.doc.as_deref(),
            ModuleChild::Interface(i) => i.doc.as_deref(),
            ModuleChild::Exception(e) => e.doc.as_deref(),
            ModuleChild::Struct(s) => s.doc.as_deref(),
            ModuleChild::Enum(e) => e.doc.as_deref(),
            ModuleChild::Sequence(s) => s.doc.as_deref(),
            ModuleChild::Dictionary(d) => d.doc.as_deref(),
            ModuleChild::Const(c) => c.doc.as_deref(),
        }
    }

    pub fn as_module(&self) -> Option<&Module> {
        if let ModuleChild::Module(m) = self {
            Some(m)
        } else {
            None
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        if let ModuleChild::Class(c) = self {
            Some(c)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&Interface> {
        if let ModuleChild::Interface(i) = self {
            Some(i)
        } else {
            None
        }
    }

    pub fn as_exception(&self) -> Option<&Exception> {
        if let ModuleChild::Exception(e) = self {
            Some(e)
        } else {
            None
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        if let ModuleChild::Struct(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        if let ModuleChild::Enum(e) = self {
            Some(e)
        } else {
            None
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        if let ModuleChild::Sequence(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        if let ModuleChild::Dictionary(d) = self {
            Some(d)
        } else {
            None
        }
    }

    pub fn as_const(&self) -> Option<&Const> {
        if let ModuleChild::Const(c) = self {
            Some(c)
        } else {
            None
        }
    }
}

impl AstNode for ModuleChild {
    fn node_type(&self) -> &'static str {
        self.node().node_type()
    }

    fn display_label(&self) -> String {
        self.node().display_label()
    }

    fn location(&self) -> Location {
        self.node().location()
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.node().children()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClassChild {
    Field(Field),
    Operation(Operation),
}

impl ClassChild {
    pub fn name(&self) -> &str {
        match self {
            ClassChild::Field(f) => &f.name,
            ClassChild::Operation(o) => &o.name,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        if let ClassChild::Field(f) = self {
            Some(f)
        } else {
            None
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        if let ClassChild::Operation(o) = self {
            Some(o)
        } else {
            None
        }
    }
}

impl AstNode for ClassChild {
    fn node_type(&self) -> &'static str {
        match self {
            ClassChild::Field(f) => f.node_type(),
            ClassChild::Operation(o) => o.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            ClassChild::Field(f) => f.display_label(),
            ClassChild::Operation(o) => o.display_label(),
        }
    }

    fn location(&self) -> Location {
        match self {
            ClassChild::Field(f) => f.location,
            ClassChild::Operation(o) => o.location,
        }
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        match self {
            ClassChild::Field(_) => Vec::new(),
            ClassChild::Operation(o) => o.children(),
        }
    }
}
