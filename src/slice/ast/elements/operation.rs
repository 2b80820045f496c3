//! Operation and parameter elements
//!
//! Syntax:
//!     <metadata>? "idempotent"? <optional>? <type> <identifier>
//!         "(" (<parameter> ("," <parameter>)*)? ")" ("throws" <type> ("," <type>)*)? ";"
//!
//!     parameter := <metadata>? "out"? <optional>? <type> <identifier>
//!     optional  := "optional" "(" <tag> ")"
//!
//! Example:
//!     ["amd"] idempotent optional(1) string find(string key, out optional(2) int hits)
//!         throws NotFound, ::Demo::Unavailable;

use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "operation", rename_all = "camelCase")]
pub struct Operation {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub idempotent: bool,
    /// Optional tag of the return value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_optional: Option<u32>,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<String>,
}

impl Operation {
    pub fn in_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.out)
    }

    pub fn out_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "parameter", rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<u32>,
    pub data_type: String,
}

impl AstNode for Operation {
    fn node_type(&self) -> &'static str {
        "operation"
    }

    fn display_label(&self) -> String {
        format!("{} {}()", self.return_type, self.name)
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.parameters.iter().map(|p| p as &dyn AstNode).collect()
    }
}

impl AstNode for Parameter {
    fn node_type(&self) -> &'static str {
        "parameter"
    }

    fn display_label(&self) -> String {
        let direction = if self.out { "out " } else { "" };
        format!("{}{} {}", direction, self.data_type, self.name)
    }

    fn location(&self) -> Location {
        self.location
    }
}
