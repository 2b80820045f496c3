//! AST element definitions, one file per declaration family

pub mod class;
pub mod collections;
pub mod constant;
pub mod content_item;
pub mod enumeration;
pub mod exception;
pub mod field;
pub mod interface;
pub mod module;
pub mod operation;
pub mod source;
pub mod structure;

pub use class::{Class, ClassForward};
pub use collections::{Dictionary, Sequence};
pub use constant::Const;
pub use content_item::{ClassChild, ModuleChild};
pub use enumeration::{Enum, EnumElement};
pub use exception::Exception;
pub use field::Field;
pub use interface::{Interface, InterfaceForward};
pub use module::Module;
pub use operation::{Operation, Parameter};
pub use source::SliceSource;
pub use structure::{Struct, StructField};
