//! Slice source (root node)
//!
//! The root of every parse. It collects what the leading directive section
//! declared and the top-level modules in source order.
//!
//! Syntax:
//!     <directive>* <module>*
//!
//!     directive := "#pragma once" | "#include" <path> | "[[" <metadata-string>, ... "]]"
//!
//! Example:
//!     #pragma once
//!     #include <Ice/Identity.ice>
//!     [["java:package:com.zeroc"]]
//!
//!     module Demo { ... };

use super::module::Module;
use crate::slice::ast::traits::is_false;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename = "source", rename_all = "camelCase")]
pub struct SliceSource {
    /// `true` when `#pragma once` appeared in the directive section
    #[serde(skip_serializing_if = "is_false")]
    pub pragma_once: bool,
    /// Included paths, without their `<>` or `""` delimiters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    /// Parts of every `[[...]]` block, flattened in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_metadata: Vec<String>,
    pub modules: Vec<Module>,
}

impl SliceSource {
    pub fn find_module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name == name)
    }
}
