//! Semantic diagnostic types
//!
//! Unlike [`ParseError`](crate::parser::parse::ParseError), nothing in here is
//! fatal: the parser records these and keeps going.

use super::symbols::DataType;
use thiserror::Error;

/// Non-fatal semantic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// Name already declared in the innermost scope
    #[error("Redeclaration of '{name}' at line {line}")]
    Redeclaration { name: String, line: usize },

    /// Assignment whose value type differs from the target's declared type
    #[error("Type Error at line {line}: cannot assign {found} to {expected}")]
    TypeMismatch {
        line: usize,
        found: DataType,
        expected: DataType,
    },

    /// Tokens left over after the closing brace of the program
    #[error("Unexpected tokens after program end at line {line}")]
    TrailingTokens { line: usize },
}

/// Semantic warnings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticWarning {
    #[error("Undeclared variable '{name}' at line {line}")]
    UndeclaredVariable { name: String, line: usize },
}

/// Errors and warnings in the order they were encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub errors: Vec<SemanticError>,
    pub warnings: Vec<SemanticWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, error: SemanticError) {
        self.errors.push(error);
    }

    pub fn warn(&mut self, warning: SemanticWarning) {
        self.warnings.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.error(SemanticError::TypeMismatch {
            line: 2,
            found: DataType::Text,
            expected: DataType::Int,
        });
        diagnostics.error(SemanticError::Redeclaration {
            name: "x".to_string(),
            line: 3,
        });
        diagnostics.warn(SemanticWarning::UndeclaredVariable {
            name: "y".to_string(),
            line: 4,
        });

        assert_eq!(
            diagnostics.error_messages(),
            vec![
                "Type Error at line 2: cannot assign string to int".to_string(),
                "Redeclaration of 'x' at line 3".to_string(),
            ]
        );
        assert_eq!(
            diagnostics.warning_messages(),
            vec!["Undeclared variable 'y' at line 4".to_string()]
        );
    }
}
