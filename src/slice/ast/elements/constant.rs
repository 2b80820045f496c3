//! Const element
//!
//! Syntax:
//!     "const" <type> <identifier> "=" <literal> ";"
//!
//! Example:
//!     const string Greeting = "hello";
//!     const Color Favourite = Color::Blue;

use crate::slice::ast::location::Location;
use crate::slice::ast::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "const", rename_all = "camelCase")]
pub struct Const {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub data_type: String,
    /// Literal text as written, string literals keep their quotes
    pub value: String,
}

impl AstNode for Const {
    fn node_type(&self) -> &'static str {
        "const"
    }

    fn display_label(&self) -> String {
        format!("{} {} = {}", self.data_type, self.name, self.value)
    }

    fn location(&self) -> Location {
        self.location
    }
}
