//! Malformed input fails with a located diagnostic and no partial result

use rstest::rstest;
use slice_parser::slice::{parse, SliceError};

/// Byte range of `marker` in `source`
fn region(source: &str, marker: &str) -> std::ops::Range<usize> {
    let start = source.find(marker).unwrap();
    start..start + marker.len()
}

#[test]
fn test_unterminated_ifdef() {
    let source = "module M {\n#ifdef FEATURE\n  struct S { };\n};\n";
    let err = parse(source).unwrap_err();

    assert!(matches!(err, SliceError::Directive(_)));
    assert!(region(source, "#ifdef FEATURE").contains(&err.offset()));
    assert_eq!(err.position().line, 1);
    assert!(err.to_string().starts_with("Failed to strip directives"));
}

#[test]
fn test_stray_endif() {
    let source = "module M { };\n#endif\n";
    let err = parse(source).unwrap_err();
    assert!(matches!(err, SliceError::Directive(_)));
    assert_eq!(err.offset(), source.find("#endif").unwrap());
}

#[test]
fn test_missing_semicolon() {
    let source = "module M {\n  struct S { int x; }\n  struct T { int y; };\n};\n";
    let err = parse(source).unwrap_err();

    assert!(matches!(err, SliceError::Parse(_)));
    let offending = source.find("struct S").unwrap()..source.find("struct T").unwrap() + "struct T".len();
    assert!(
        offending.contains(&err.offset()),
        "offset {} outside {:?}: {}",
        err.offset(),
        offending,
        err
    );
    assert!(err.to_string().starts_with("Failed to parse slice file"));
}

#[rstest]
#[case::unclosed_module("module M {")]
#[case::missing_name("module { };")]
#[case::field_without_name("module M { struct S { int; }; };")]
#[case::bad_character("module M { struct S { int x@; }; };")]
#[case::declaration_outside_module("struct S { };")]
#[case::directive_after_module("module M { };\n#include <A.ice>\n")]
#[case::compact_id_too_large("module M { class C(4294967296) { }; };")]
#[case::empty_enum("module M { enum E { }; };")]
#[case::metadata_on_const("module M { [\"x\"] const int X = 1; };")]
fn test_rejected_sources(#[case] source: &str) {
    let err = parse(source).unwrap_err();
    assert!(matches!(err, SliceError::Parse(_)), "{}", err);
    assert!(err.offset() <= source.len());
    assert!(!err.message().is_empty());
}

#[test]
fn test_error_message_names_expected_token() {
    let err = parse("module M { sequence<int> Ints };").unwrap_err();
    assert!(err.message().contains("expected"), "{}", err.message());
    assert!(err.message().contains("';'"), "{}", err.message());
}
