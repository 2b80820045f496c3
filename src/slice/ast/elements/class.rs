//! Class elements
//!
//! Classes carry data members and (in older Slice) operations, and support
//! single inheritance. A class may be announced with a forward declaration
//! before its full definition.
//!
//! Syntax:
//!     "local"? "class" <identifier> ("extends" <type>)? ";"
//!     <metadata>? "local"? "class" <identifier> ("(" <compact-id> ")")? ("extends" <type>)?
//!         "{" (<field> | <operation>)* "}" ";"
//!
//! Examples:
//!     class Shape;
//!
//!     class Circle(7) extends Shape
//!     {
//!         optional(1) double radius;
//!         double area();
//!     };

use super::content_item::ClassChild;
use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, label_with_base, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "classForward", rename_all = "camelCase")]
pub struct ClassForward {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "class", rename_all = "camelCase")]
pub struct Class {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_type_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub content: Vec<ClassChild>,
}

impl AstNode for ClassForward {
    fn node_type(&self) -> &'static str {
        "classForward"
    }

    fn display_label(&self) -> String {
        label_with_base(&self.name, self.extends.as_deref())
    }

    fn location(&self) -> Location {
        self.location
    }
}

impl AstNode for Class {
    fn node_type(&self) -> &'static str {
        "class"
    }

    fn display_label(&self) -> String {
        let label = label_with_base(&self.name, self.extends.as_deref());
        match self.compact_type_id {
            Some(id) => format!("{} ({})", label, id),
            None => label,
        }
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.content.iter().map(|c| c as &dyn AstNode).collect()
    }
}
