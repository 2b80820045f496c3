//! Doc comments attached to parsed declarations

use rstest::rstest;
use slice_parser::slice::ast::ModuleChild;
use slice_parser::slice::parse;

fn module_doc(source: &str) -> Option<String> {
    parse(source).unwrap().modules[0].doc.clone()
}

fn first_child_doc(source: &str) -> Option<String> {
    let parsed = parse(source).unwrap();
    parsed.modules[0].content[0].doc().map(str::to_string)
}

#[test]
fn test_star_prefixed_doc() {
    let source = "/**\n * Line one\n *   indented line two\n */\nmodule M { };";
    assert_eq!(
        module_doc(source).as_deref(),
        Some("Line one\n  indented line two")
    );
}

#[test]
fn test_doc_before_metadata() {
    let source = "module M {\n  /**\n   * Tagged.\n   */\n  [\"amd\"]\n  interface I { };\n};";
    assert_eq!(first_child_doc(source).as_deref(), Some("Tagged."));
}

#[test]
fn test_doc_inside_conditional_block() {
    let source = "#ifndef GUARD\n/**\n * Guarded.\n */\nmodule M { };\n#endif\n";
    assert_eq!(module_doc(source).as_deref(), Some("Guarded."));
}

#[rstest]
#[case::no_comment("module M { struct S { }; };")]
#[case::line_comment("module M {\n  // Not a doc.\n  struct S { };\n};")]
#[case::single_line_block("module M {\n  /** Same line. */\n  struct S { };\n};")]
#[case::separated_by_declaration(
    "module M {\n  /**\n   * For A.\n   */\n  struct A { };\n  struct S { };\n};"
)]
fn test_absent_doc(#[case] source: &str) {
    let parsed = parse(source).unwrap();
    let structure = parsed.modules[0]
        .content
        .iter()
        .filter_map(ModuleChild::as_struct)
        .find(|s| s.name == "S")
        .unwrap();
    assert_eq!(structure.doc, None);
}

#[test]
fn test_member_docs() {
    let source = "module M {\n  struct S {\n    /**\n     * X coordinate.\n     */\n    int x;\n    int y;\n  };\n};";
    let parsed = parse(source).unwrap();
    let structure = parsed.modules[0].content[0].as_struct().unwrap();
    assert_eq!(structure.fields[0].doc.as_deref(), Some("X coordinate."));
    assert_eq!(structure.fields[1].doc, None);
}

#[test]
fn test_operation_doc_preserves_inner_lines() {
    let source = "module M {\n  interface I {\n    /**\n     * Send it.\n     *\n     * @param a The value.\n     */\n    void send(int a);\n  };\n};";
    let parsed = parse(source).unwrap();
    let interface = parsed.modules[0].content[0].as_interface().unwrap();
    assert_eq!(
        interface.content[0].doc.as_deref(),
        Some("Send it.\n\n@param a The value.")
    );
}
