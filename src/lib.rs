//! # slice-parser
//!
//! A parser for the Slice interface definition language.
//!
//! ```text
//! let source = slice_parser::slice::parse("module Demo { struct Point { int x; int y; }; };")?;
//! assert_eq!(source.modules[0].name, "Demo");
//! ```

pub mod slice;
