//! AST definitions for Slice sources
//!
//! The AST is an owned, immutable value tree produced in one pass by
//! [`crate::slice::parse`]. Every declaration carries its [`Location`], an
//! optional doc comment and its raw metadata strings.
//!
//! Serialization (serde) is the wire contract consumed by downstream tools:
//! every node has a `type` discriminant, field names are camelCase, and fields
//! that are absent, `false` or empty are omitted rather than written out.
//!
//! ## Modules
//!
//! - `elements` - One file per declaration family
//! - `location` - Byte locations, line/column positions and conversion
//! - `traits` - The `AstNode` interface shared by all declarations

pub mod elements;
pub mod location;
pub mod traits;

pub use elements::{
    Class, ClassChild, ClassForward, Const, Dictionary, Enum, EnumElement, Exception, Field,
    Interface, InterfaceForward, Module, ModuleChild, Operation, Parameter, Sequence,
    SliceSource, Struct, StructField,
};
pub use location::{Location, Position, SourceLocation};
pub use traits::AstNode;
