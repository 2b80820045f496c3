//! AST traits - Common interfaces for uniform node access

use super::location::Location;

/// Common interface for all declaration nodes
pub trait AstNode {
    /// The node's `type` discriminant as it appears in serialized output
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn location(&self) -> Location;

    /// Nested declarations, in source order
    fn children(&self) -> Vec<&dyn AstNode> {
        Vec::new()
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Label helper shared by the node impls: `name` or `name : base`
pub(crate) fn label_with_base(name: &str, base: Option<&str>) -> String {
    match base {
        Some(base) => format!("{} : {}", name, base),
        None => name.to_string(),
    }
}
