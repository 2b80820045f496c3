//! Declaration parsing
//!
//! ## Modules
//!
//! - `ir` - Span-only parse tree
//! - `grammar` - chumsky grammar over declaration tokens
//! - `engine` - [`SliceParser`], the compiled grammars and the per-thread default

pub mod engine;
pub(crate) mod grammar;
pub(crate) mod ir;

pub use engine::{with_default_parser, SliceParser};
