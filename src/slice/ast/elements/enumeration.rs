//! Enum element
//!
//! Syntax:
//!     <metadata>? "local"? "enum" <identifier> "{" <enumerator> ("," <enumerator>)* ","? "}" ";"
//!
//!     enumerator := <identifier> ("=" <integer> | <constant-name>)?
//!
//! Example:
//!     enum Color { Red, Green = 4, Blue = LastColor };

use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "enum", rename_all = "camelCase")]
pub struct Enum {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    pub enums: Vec<EnumElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "enumElement", rename_all = "camelCase")]
pub struct EnumElement {
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub name: String,
    /// Explicit value, as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl AstNode for Enum {
    fn node_type(&self) -> &'static str {
        "enum"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.enums.iter().map(|e| e as &dyn AstNode).collect()
    }
}

impl AstNode for EnumElement {
    fn node_type(&self) -> &'static str {
        "enumElement"
    }

    fn display_label(&self) -> String {
        match &self.value {
            Some(value) => format!("{} = {}", self.name, value),
            None => self.name.clone(),
        }
    }

    fn location(&self) -> Location {
        self.location
    }
}
