//! # Introduction
//!
//! `esal` is the front end of ESAL, a tiny teaching language. It tokenizes
//! source text, checks it against a small fixed grammar, runs lightweight
//! semantic checks and reports diagnostics together with a dump of the symbol
//! table. A terminal editor built with [ratatui](https://docs.rs/ratatui) sits
//! on top.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser (+ Symbol Table) → CompileReport → TUI
//! ```
//!
//! 1. [`parser`] : tokenises the source and checks statements as it goes.
//! 2. [`semantic`] : the scoped [`semantic::SymbolTable`] and the non-fatal
//!    diagnostics the parser collects.
//! 3. [`compiler`] : [`compile`] runs both and packages a [`CompileReport`].
//! 4. [`ui`] : ratatui-based editor shell; not part of the stable library API.
//!
//! ## Language
//!
//! Programs are wrapped in `esal() { ... }`. Statements: `## name [= expr];`
//! declares an int, `name = expr;` assigns, `@$ expr;` outputs. Expressions
//! are numbers, `"text"` and identifiers joined by `+ - * /`.
//!
//! ```
//! let report = esal::compile("esal() { ## x = 5; x = \"hi\"; }");
//! assert_eq!(report.errors, vec!["Type Error at line 1: cannot assign string to int"]);
//! ```

pub mod compiler;
pub mod logging;
pub mod parser;
pub mod semantic;
pub mod ui;

pub use compiler::{compile, CompileReport};
