//! Struct element
//!
//! Structs are plain value types: data members only, no inheritance and no
//! optional members.
//!
//! Syntax:
//!     <metadata>? "local"? "struct" <identifier> "{" <struct-field>* "}" ";"
//!
//!     struct-field := <metadata>? <type> <identifier> ("=" <literal>)? ";"
//!
//! Example:
//!     struct Point
//!     {
//!         int x = 0;
//!         int y = 0;
//!     };

use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "struct", rename_all = "camelCase")]
pub struct Struct {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    pub fields: Vec<StructField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "structField", rename_all = "camelCase")]
pub struct StructField {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl AstNode for Struct {
    fn node_type(&self) -> &'static str {
        "struct"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.fields.iter().map(|f| f as &dyn AstNode).collect()
    }
}

impl AstNode for StructField {
    fn node_type(&self) -> &'static str {
        "structField"
    }

    fn display_label(&self) -> String {
        format!("{} {}", self.data_type, self.name)
    }

    fn location(&self) -> Location {
        self.location
    }
}
