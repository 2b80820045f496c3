//! Module element
//!
//! Modules are the only top-level declarations and the scope every other
//! declaration lives in. Modules nest.
//!
//! Syntax:
//!     <metadata>? "module" <identifier> "{" <module-child>* "}" ";"
//!
//! Example:
//!     ["swift:module:Demo"]
//!     module Demo
//!     {
//!         module Inner { struct Point { int x; int y; }; };
//!     };

use super::content_item::ModuleChild;
use crate::slice::ast::location::Location;
use crate::slice::ast::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "module", rename_all = "camelCase")]
pub struct Module {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    pub content: Vec<ModuleChild>,
}

impl Module {
    /// Direct child with the given name
    pub fn find(&self, name: &str) -> Option<&ModuleChild> {
        self.content.iter().find(|child| child.name() == name)
    }
}

impl AstNode for Module {
    fn node_type(&self) -> &'static str {
        "module"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn location(&self) -> Location {
        self.location
    }

    fn children(&self) -> Vec<&dyn AstNode> {
        self.content.iter().map(|c| c as &dyn AstNode).collect()
    }
}
