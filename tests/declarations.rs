//! Declaration parsing, one declaration kind at a time

use rstest::rstest;
use slice_parser::slice::ast::{AstNode, ClassChild, ModuleChild};
use slice_parser::slice::parse;

/// Parse `body` inside `module M { ... };` and return its first declaration
fn first_declaration(body: &str) -> ModuleChild {
    let source = format!("module M\n{{\n{}\n}};\n", body);
    let mut parsed = parse(&source).unwrap_or_else(|e| panic!("{}\n{}", source, e));
    parsed.modules.remove(0).content.remove(0)
}

#[rstest]
#[case::class_forward("class C;", "classForward")]
#[case::local_class_forward("local class C extends B;", "classForward")]
#[case::class("class C { };", "class")]
#[case::interface_forward("interface I extends A, B;", "interfaceForward")]
#[case::interface("interface I { };", "interface")]
#[case::exception("exception E extends Base { string reason; };", "exception")]
#[case::structure("struct S { int x; };", "struct")]
#[case::enumeration("enum E { A, B, };", "enum")]
#[case::sequence("sequence<int> Ints;", "sequence")]
#[case::dictionary("dictionary<string, int> Counts;", "dictionary")]
#[case::constant("const double Pi = 3.14159;", "const")]
#[case::module("module Inner { };", "module")]
fn test_declaration_kind(#[case] body: &str, #[case] expected: &str) {
    assert_eq!(first_declaration(body).node_type(), expected);
}

#[rstest]
#[case("int")]
#[case("Object*")]
#[case("::Ice::Identity")]
#[case("Demo::Nested::Type")]
#[case("Demo::Printer*")]
#[case("::Demo :: Spaced")]
fn test_type_references_are_verbatim(#[case] data_type: &str) {
    let body = format!("struct S {{ {} member; }};", data_type);
    let declaration = first_declaration(&body);
    let structure = declaration.as_struct().unwrap();
    assert_eq!(structure.fields[0].data_type, data_type);
}

#[rstest]
#[case("\"text\"")]
#[case("42")]
#[case("-7")]
#[case("+0x1F")]
#[case("2.5e-3")]
#[case("Color::Red")]
fn test_const_values_are_verbatim(#[case] value: &str) {
    let body = format!("const T X = {};", value);
    let declaration = first_declaration(&body);
    assert_eq!(declaration.as_const().unwrap().value, value);
}

#[rstest]
#[case("\\module", "module")]
#[case("\\interface", "interface")]
#[case("\\Plain", "Plain")]
fn test_escaped_identifiers(#[case] written: &str, #[case] name: &str) {
    let body = format!("struct {} {{ int {}; }};", written, written);
    let declaration = first_declaration(&body);
    let structure = declaration.as_struct().unwrap();
    assert_eq!(structure.name, name);
    assert_eq!(structure.fields[0].name, name);
}

#[test]
fn test_class_with_members() {
    let declaration =
        first_declaration("[\"preserve-slice\"] local class C(3) extends Base\n{\n    optional(2) int count = 0;\n    [\"cpp:const\"] idempotent string name();\n};");
    let class = match declaration {
        ModuleChild::Class(class) => class,
        other => panic!("expected class, got {:?}", other),
    };

    assert_eq!(class.metadata, vec!["preserve-slice"]);
    assert!(class.local);
    assert_eq!(class.compact_type_id, Some(3));
    assert_eq!(class.extends.as_deref(), Some("Base"));

    match &class.content[..] {
        [ClassChild::Field(field), ClassChild::Operation(operation)] => {
            assert_eq!(field.optional, Some(2));
            assert_eq!(field.default_value.as_deref(), Some("0"));
            assert_eq!(operation.metadata, vec!["cpp:const"]);
            assert!(operation.idempotent);
            assert!(operation.parameters.is_empty());
        }
        other => panic!("unexpected members {:?}", other),
    }

    let names: Vec<&str> = class.content.iter().map(ClassChild::name).collect();
    assert_eq!(names, vec!["count", "name"]);
    assert_eq!(
        class.content[0].as_field().map(|f| f.data_type.as_str()),
        Some("int")
    );
    assert!(class.content[0].as_operation().is_none());
    assert_eq!(
        class.content[1].as_operation().map(|o| o.return_type.as_str()),
        Some("string")
    );
    assert!(class.content[1].as_field().is_none());
}

#[test]
fn test_forward_declarations_carry_bases() {
    let declaration = first_declaration("local interface I extends A, ::B::C;");
    let ModuleChild::InterfaceForward(forward) = declaration else {
        panic!("expected forward interface");
    };
    assert!(forward.local);
    assert_eq!(forward.extends, vec!["A", "::B::C"]);
}

#[test]
fn test_operation_without_return_optional() {
    let declaration = first_declaration(
        "interface I { void send(string message, out int id, [\"m\"] optional(1) bool ack) throws A, B; };",
    );
    let interface = declaration.as_interface().unwrap();
    let send = interface.operation("send").unwrap();

    assert!(!send.idempotent);
    assert_eq!(send.return_optional, None);
    assert_eq!(send.return_type, "void");
    assert_eq!(send.throws, vec!["A", "B"]);

    let labels: Vec<String> = send.parameters.iter().map(|p| p.display_label()).collect();
    assert_eq!(labels, vec!["string message", "out int id", "bool ack"]);
    assert_eq!(send.parameters[2].metadata, vec!["m"]);
}

#[test]
fn test_dictionary_type_metadata() {
    let declaration = first_declaration(
        "[\"java:type:java.util.TreeMap<String, Integer>\"] dictionary<[\"cpp:type:wstring\"] string, [\"x\"] int> Counts;",
    );
    let dictionary = declaration.as_dictionary().unwrap();
    assert_eq!(
        dictionary.metadata,
        vec!["java:type:java.util.TreeMap<String, Integer>"]
    );
    assert_eq!(dictionary.key_type_metadata, vec!["cpp:type:wstring"]);
    assert_eq!(dictionary.key_type, "string");
    assert_eq!(dictionary.value_type_metadata, vec!["x"]);
    assert_eq!(dictionary.value_type, "int");
}

#[test]
fn test_enum_values() {
    let declaration = first_declaration("local enum E { A = 1, B = -2, C = A }; ");
    let enumeration = declaration.as_enum().unwrap();
    assert!(enumeration.local);
    let values: Vec<Option<&str>> = enumeration
        .enums
        .iter()
        .map(|e| e.value.as_deref())
        .collect();
    assert_eq!(values, vec![Some("1"), Some("-2"), Some("A")]);
}

#[test]
fn test_multiple_modules_and_empty_source() {
    let parsed = parse("module A { };\nmodule B { module C { }; };").unwrap();
    let names: Vec<&str> = parsed.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert!(parsed.find_module("B").unwrap().content[0].as_module().is_some());
    assert!(parsed.find_module("C").is_none());

    let empty = parse("  \n// nothing here\n").unwrap();
    assert!(empty.modules.is_empty());
    assert!(!empty.pragma_once);
}

#[test]
fn test_comments_between_tokens() {
    let declaration = first_declaration("struct /* inline */ S { int /* gap */ x; // trailing\n };");
    let structure = declaration.as_struct().unwrap();
    assert_eq!(structure.name, "S");
    assert_eq!(structure.fields[0].data_type, "int");
    assert_eq!(structure.fields[0].name, "x");
}
