//! Data member of a class or exception
//!
//! Unlike struct fields, class and exception members may be optional.
//!
//! Syntax:
//!     <metadata>? ("optional" "(" <tag> ")")? <type> <identifier> ("=" <literal>)? ";"

use crate::slice::ast::location::Location;
use crate::slice::ast::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "field", rename_all = "camelCase")]
pub struct Field {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<u32>,
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl AstNode for Field {
    fn node_type(&self) -> &'static str {
        "field"
    }

    fn display_label(&self) -> String {
        match self.optional {
            Some(tag) => format!("optional({}) {} {}", tag, self.data_type, self.name),
            None => format!("{} {}", self.data_type, self.name),
        }
    }

    fn location(&self) -> Location {
        self.location
    }
}
