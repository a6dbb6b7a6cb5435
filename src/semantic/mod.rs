//! Semantic state shared by the parser
//!
//! - [`symbols`]: scoped symbol table and the primitive [`DataType`]s
//! - [`diagnostics`]: non-fatal errors and warnings collected during a parse

pub mod diagnostics;
pub mod symbols;

pub use diagnostics::{Diagnostics, SemanticError, SemanticWarning};
pub use symbols::{DataType, IdentifierInfo, Scope, SymbolTable};
