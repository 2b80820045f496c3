//! Output formats for parsed sources
//!
//! JSON and YAML are the serde schema of the AST; the tree view is a compact
//! human-readable outline built on [`crate::slice::ast::AstNode`].

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::slice::ast::SliceSource;

/// Serialize to JSON, pretty-printed unless `compact`
pub fn to_json(source: &SliceSource, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(source)
    } else {
        serde_json::to_string_pretty(source)
    }
}

pub fn to_yaml(source: &SliceSource) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::parse;
    use serde_json::{json, Value};

    #[test]
    fn test_json_schema() {
        let source = parse("#pragma once\n/**\n * Doc\n */\n[\"m\"] module M { local struct S { int x = 3; }; };")
            .unwrap();
        let value: Value = serde_json::from_str(&to_json(&source, true).unwrap()).unwrap();

        assert_eq!(value["type"], "source");
        assert_eq!(value["pragmaOnce"], true);
        assert!(value.get("includes").is_none());

        let module = &value["modules"][0];
        assert_eq!(module["type"], "module");
        assert_eq!(module["doc"], "Doc");
        assert_eq!(module["metadata"], json!(["m"]));

        let structure = &module["content"][0];
        assert_eq!(structure["type"], "struct");
        assert_eq!(structure["local"], true);
        assert!(structure.get("doc").is_none());
        assert_eq!(
            structure["fields"][0],
            json!({
                "type": "structField",
                "location": { "start": 62, "end": 72 },
                "name": "x",
                "dataType": "int",
                "defaultValue": "3"
            })
        );
    }

    #[test]
    fn test_yaml_output() {
        let source = parse("module M { const int X = 1; };").unwrap();
        let yaml = to_yaml(&source).unwrap();
        assert!(yaml.contains("type: source"));
        assert!(yaml.contains("dataType: int"));
    }

    #[test]
    fn test_pretty_json_is_multiline() {
        let source = parse("module M { };").unwrap();
        assert!(to_json(&source, false).unwrap().contains('\n'));
        assert!(!to_json(&source, true).unwrap().contains('\n'));
    }
}
