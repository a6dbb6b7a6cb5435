//! ESAL source code parser
//!
//! This module checks ESAL source text against the grammar while driving the
//! symbol table:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser struct, fatal errors, program rule
//! - `statements`: declarations, assignments, output statements
//! - `expressions`: operand chains and type inference
//!
//! # Surface syntax
//!
//! | Syntax | Meaning |
//! |---|---|
//! | `esal() { ... }` | program wrapper |
//! | `## name [= expr];` | integer declaration |
//! | `name = expr;` | assignment |
//! | `@$ expr;` | output |
//!
//! `@?`, `@@?`, `@@` and `$$@` are tokenized but have no statement form yet.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one token of lookahead. There is no
//! AST: statements are checked as they are recognized.

mod expressions;
mod statements;

pub mod lexer;
pub mod parse;
