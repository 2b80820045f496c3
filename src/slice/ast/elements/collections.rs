//! Sequence and dictionary elements
//!
//! Both name a collection type. Element, key and value types may each carry
//! their own metadata, independent of the declaration's metadata.
//!
//! Syntax:
//!     <metadata>? "local"? "sequence" "<" <metadata>? <type> ">" <identifier> ";"
//!     <metadata>? "local"? "dictionary" "<" <metadata>? <type> "," <metadata>? <type> ">" <identifier> ";"
//!
//! Examples:
//!     ["java:type:java.util.LinkedList<Integer>"] sequence<int> IntList;
//!     dictionary<string, ["cpp:type:wstring"] string> Names;

use crate::slice::ast::location::Location;
use crate::slice::ast::traits::{is_false, AstNode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "sequence", rename_all = "camelCase")]
pub struct Sequence {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_type_metadata: Vec<String>,
    pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "dictionary", rename_all = "camelCase")]
pub struct Dictionary {
    pub location: Location,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_type_metadata: Vec<String>,
    pub key_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value_type_metadata: Vec<String>,
    pub value_type: String,
}

impl AstNode for Sequence {
    fn node_type(&self) -> &'static str {
        "sequence"
    }

    fn display_label(&self) -> String {
        format!("{} = sequence<{}>", self.name, self.data_type)
    }

    fn location(&self) -> Location {
        self.location
    }
}

impl AstNode for Dictionary {
    fn node_type(&self) -> &'static str {
        "dictionary"
    }

    fn display_label(&self) -> String {
        format!(
            "{} = dictionary<{}, {}>",
            self.name, self.key_type, self.value_type
        )
    }

    fn location(&self) -> Location {
        self.location
    }
}
