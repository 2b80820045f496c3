//! Exception element
//!
//! Syntax:
//!     <metadata>? "local"? "exception" <identifier> ("extends" <type>)? "{" <field>* "}" ";"
//!
//! Example:
//!     exception NotFound extends LookupError
//!     {
//!         string key;
//!         optional(2) string hint;
//!     };

use super::field::Field;
use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, label_with_base, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "exception", rename_all = "camelCase")]
pub struct Exception {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub content: Vec<Field>,
}

impl AstNode for Exception {
    fn node_type(&self) -> &'static str {
        "exception"
    }

    fn display_label(&self) -> String {
        label_with_base(&self.name, self.extends.as_deref())
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.content.iter().map(|f| f as &dyn AstNode).collect()
    }
}
