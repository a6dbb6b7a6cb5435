//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement   ::= declaration | assignment | output | <any other token, skipped>
//! declaration ::= '##' IDENTIFIER ('=' expr)? ';'
//! assignment  ::= IDENTIFIER '=' expr ';'
//! output      ::= '@$' expr ';'
//! ```
//!
//! Declarations always declare an `int`. Their initializer is parsed and typed
//! but not checked against the declared type; only plain assignments are.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::semantic::{DataType, SemanticError, SemanticWarning};
use tracing::trace;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<(), ParseError> {
        match self.peek_kind() {
            TokenKind::VarInt => self.parse_declaration(),
            TokenKind::Identifier => self.parse_assignment(),
            TokenKind::Output => self.parse_output(),
            _ => {
                // if/else/function/return have no production yet; skip like any stray token
                let skipped = self.advance();
                trace!(token = %skipped, "skipping token outside any statement");
                Ok(())
            }
        }
    }

    /// Parse `## name [= expr];`
    fn parse_declaration(&mut self) -> Result<(), ParseError> {
        self.advance(); // consume '##'

        let name = self.expect(TokenKind::Identifier)?;
        if let Err(conflict) = self
            .symbols
            .declare(name.lexeme(), DataType::Int, name.line())
        {
            self.diagnostics.error(conflict);
        }

        if self.check(TokenKind::Assign) {
            self.advance();
            self.parse_expression()?;
        }

        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }

    /// Parse `name = expr;`
    fn parse_assignment(&mut self) -> Result<(), ParseError> {
        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::Assign)?;

        let value_type = self.parse_expression()?;
        let target_type = self
            .symbols
            .lookup(name.lexeme())
            .map(|info| info.data_type);

        if let (Some(expected), Some(found)) = (target_type, value_type) {
            if expected != found {
                self.diagnostics.error(SemanticError::TypeMismatch {
                    line: name.line(),
                    found,
                    expected,
                });
            }
        }

        self.expect(TokenKind::Semicolon)?;

        if target_type.is_none() {
            self.diagnostics.warn(SemanticWarning::UndeclaredVariable {
                name: name.lexeme().to_string(),
                line: name.line(),
            });
        }

        Ok(())
    }

    /// Parse `@$ expr;`
    fn parse_output(&mut self) -> Result<(), ParseError> {
        self.advance(); // consume '@$'
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::scan;
    use crate::parser::parse::{Analysis, ParseError, Parser};
    use crate::semantic::{DataType, SemanticError, SemanticWarning};

    fn parse(source: &str) -> Analysis {
        Parser::new(scan(source))
            .parse_program()
            .expect("program should be well formed")
    }

    #[test]
    fn test_assignment_type_mismatch() {
        let analysis = parse("esal() {\n## x = 5;\nx = \"hi\";\n}");
        assert_eq!(
            analysis.diagnostics.errors,
            vec![SemanticError::TypeMismatch {
                line: 3,
                found: DataType::Text,
                expected: DataType::Int,
            }]
        );
        assert!(analysis.diagnostics.warnings.is_empty());
    }

    #[test]
    fn test_assignment_matching_type() {
        let analysis = parse("esal() { ## x; ## y; x = 5; y = x + 1; }");
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_undeclared_assignment_warns() {
        let analysis = parse("esal() { y = 3; }");
        assert!(analysis.diagnostics.errors.is_empty());
        assert_eq!(
            analysis.diagnostics.warnings,
            vec![SemanticWarning::UndeclaredVariable {
                name: "y".to_string(),
                line: 1,
            }]
        );
        assert!(analysis.symbols.lookup("y").is_none());
    }

    #[test]
    fn test_undeclared_assignment_skips_type_check() {
        let analysis = parse("esal() { y = \"text\"; }");
        assert!(analysis.diagnostics.errors.is_empty());
        assert_eq!(analysis.diagnostics.warnings.len(), 1);
    }

    #[test]
    fn test_redeclaration() {
        let analysis = parse("esal() {\n## x;\n## x = 2;\n}");
        assert_eq!(
            analysis.diagnostics.errors,
            vec![SemanticError::Redeclaration {
                name: "x".to_string(),
                line: 3,
            }]
        );
        assert_eq!(analysis.symbols.lookup("x").unwrap().line, 2);
    }

    #[test]
    fn test_declaration_initializer_is_not_type_checked() {
        let analysis = parse("esal() { ## x = \"hi\"; }");
        assert!(analysis.diagnostics.is_empty());
        assert_eq!(analysis.symbols.lookup("x").unwrap().data_type, DataType::Int);
    }

    #[test]
    fn test_declaration_is_visible_in_own_initializer() {
        let analysis = parse("esal() { ## x = x; }");
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_reserved_sigils_are_skipped() {
        let analysis = parse("esal() { @? @@? @@ $$@ ( ) 5 \"s\" ; ## z; }");
        assert!(analysis.diagnostics.is_empty());
        assert!(analysis.symbols.lookup("z").is_some());
    }

    #[test]
    fn test_output_requires_expression() {
        let err = Parser::new(scan("esal() { @$ ; }"))
            .parse_program()
            .unwrap_err();
        assert_eq!(err, ParseError::InvalidExpression { line: 1 });
    }

    #[test]
    fn test_assignment_requires_assign() {
        let err = Parser::new(scan("esal() {\nx 5;\n}"))
            .parse_program()
            .unwrap_err();
        assert_eq!(err.to_string(), "Expected ASSIGN at line 2");
    }

    #[test]
    fn test_diagnostics_keep_statement_order() {
        let analysis = parse(
            "esal() {\n## a;\nb = 1;\na = \"s\";\n## a;\nc = 2;\n}",
        );
        assert_eq!(
            analysis.diagnostics.error_messages(),
            vec![
                "Type Error at line 4: cannot assign string to int".to_string(),
                "Redeclaration of 'a' at line 5".to_string(),
            ]
        );
        assert_eq!(
            analysis.diagnostics.warning_messages(),
            vec![
                "Undeclared variable 'b' at line 3".to_string(),
                "Undeclared variable 'c' at line 6".to_string(),
            ]
        );
    }
}
