//! Interface elements
//!
//! Interfaces hold the remotely invokable operations. Unlike classes they
//! support multiple inheritance, so `extends` is a list.
//!
//! Syntax:
//!     "local"? "interface" <identifier> ("extends" <type>, ...)? ";"
//!     <metadata>? "local"? "interface" <identifier> ("extends" <type>, ...)?
//!         "{" <operation>* "}" ";"
//!
//! Example:
//!     interface Printer extends Device, ::Demo::Named
//!     {
//!         idempotent void print(string text) throws PrinterError;
//!     };

use super::operation::Operation;
use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, label_with_base, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "interfaceForward", rename_all = "camelCase")]
pub struct InterfaceForward {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "interface", rename_all = "camelCase")]
pub struct Interface {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,
    pub content: Vec<Operation>,
}

impl Interface {
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.content.iter().find(|op| op.name == name)
    }
}

fn bases_label(name: &str, extends: &[String]) -> String {
    if extends.is_empty() {
        name.to_string()
    } else {
        label_with_base(name, Some(&extends.join(", ")))
    }
}

impl AstNode for InterfaceForward {
    fn node_type(&self) -> &'static str {
        "interfaceForward"
    }

    fn display_label(&self) -> String {
        bases_label(&self.name, &self.extends)
    }

    fn location(&self) -> Location {
        self.location
    }
}

impl AstNode for Interface {
    fn node_type(&self) -> &'static str {
        "interface"
    }

    fn display_label(&self) -> String {
        bases_label(&self.name, &self.extends)
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.content.iter().map(|op| op as &dyn AstNode).collect()
    }
}
