//! Compile driver
//!
//! Runs the lexer and parser over one source text and packages the outcome as
//! a [`CompileReport`] for display. Each call builds its own tokens and symbol
//! table, so nothing is shared between runs.

use crate::parser::lexer::scan;
use crate::parser::parse::Parser;
use std::fmt::Write as _;
use tracing::debug;

/// Everything a front end needs to show after a compile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Formatted symbol table; empty after a fatal error
    pub symbol_table: String,
}

impl CompileReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Output panel text: errors, then warnings, then the symbol table.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if !self.errors.is_empty() {
            out.push_str("ERRORS\n\n");
            for error in &self.errors {
                let _ = writeln!(out, "{}", error);
            }
        }

        if !self.warnings.is_empty() {
            out.push_str("\nWARNINGS\n\n");
            for warning in &self.warnings {
                let _ = writeln!(out, "{}", warning);
            }
        }

        out.push_str("\nSYMBOL TABLE\n\n");
        out.push_str(&self.symbol_table);
        out
    }
}

/// Compile `source` and collect diagnostics and the symbol table.
///
/// A structural error yields exactly that one error, no warnings and an
/// empty symbol table.
pub fn compile(source: &str) -> CompileReport {
    let tokens = scan(source);
    let token_count = tokens.len();

    let report = match Parser::new(tokens).parse_program() {
        Ok(analysis) => CompileReport {
            errors: analysis.diagnostics.error_messages(),
            warnings: analysis.diagnostics.warning_messages(),
            symbol_table: analysis.symbols.format(),
        },
        Err(fatal) => {
            debug!(line = fatal.line(), "structural error: {}", fatal);
            CompileReport {
                errors: vec![fatal.to_string()],
                ..CompileReport::default()
            }
        }
    };

    debug!(
        tokens = token_count,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "compile finished"
    );
    report
}
