//! AST construction
//!
//! ## Modules
//!
//! - `builders` - Parse tree to AST conversion
//! - `doc_comment` - Doc comment lookup and normalization

pub(crate) mod builders;
pub mod doc_comment;

pub(crate) use builders::AstBuilder;
pub use doc_comment::find_doc;
