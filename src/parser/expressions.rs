//! Expression parsing
//!
//! ```text
//! expr    ::= operand (ARITH_OP operand)*
//! operand ::= NUMBER | STRING | IDENTIFIER
//! ```
//!
//! The inferred type of an expression is the type of its first operand.
//! Operands after an operator are accepted whatever their type.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};
use crate::semantic::DataType;

fn is_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number | TokenKind::Str | TokenKind::Identifier
    )
}

impl Parser {
    /// Parse an expression and return its inferred type.
    ///
    /// `None` means the type is unknown, i.e. the first operand is an
    /// undeclared identifier.
    pub(crate) fn parse_expression(&mut self) -> Result<Option<DataType>, ParseError> {
        let data_type = self.parse_first_operand()?;

        while self.check(TokenKind::ArithOp) {
            self.advance();

            if !is_operand(self.peek_kind()) {
                return Err(ParseError::ExpectedOperand {
                    line: self.current_line(),
                });
            }
            self.advance();
        }

        Ok(data_type)
    }

    fn parse_first_operand(&mut self) -> Result<Option<DataType>, ParseError> {
        let data_type = match self.peek_kind() {
            TokenKind::Number => Some(DataType::Int),
            TokenKind::Str => Some(DataType::Text),
            TokenKind::Identifier => self
                .symbols
                .lookup(self.peek().lexeme())
                .map(|info| info.data_type),
            _ => {
                return Err(ParseError::InvalidExpression {
                    line: self.current_line(),
                })
            }
        };
        self.advance();
        Ok(data_type)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::scan;
    use crate::parser::parse::{ParseError, Parser};
    use crate::semantic::{DataType, SemanticError};

    #[test]
    fn test_first_operand_decides_type() {
        // "a" + 1 is a string by its first operand, so assigning it to an int fails
        let analysis = Parser::new(scan("esal() { ## x; x = \"a\" + 1; }"))
            .parse_program()
            .unwrap();
        assert_eq!(
            analysis.diagnostics.errors,
            vec![SemanticError::TypeMismatch {
                line: 1,
                found: DataType::Text,
                expected: DataType::Int,
            }]
        );

        // 1 + "a" is an int, operand types are not compared
        let analysis = Parser::new(scan("esal() { ## x; x = 1 + \"a\" * y; }"))
            .parse_program()
            .unwrap();
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_identifier_suppresses_type_check() {
        let analysis = Parser::new(scan("esal() { ## x; x = ghost; }"))
            .parse_program()
            .unwrap();
        assert!(analysis.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_operand_after_operator() {
        let err = Parser::new(scan("esal() {\n@$ 1 +\n;\n}"))
            .parse_program()
            .unwrap_err();
        assert_eq!(err, ParseError::ExpectedOperand { line: 3 });
    }

    #[test]
    fn test_double_operator() {
        let err = Parser::new(scan("esal() { @$ 1 + + 2; }"))
            .parse_program()
            .unwrap_err();
        assert_eq!(err.to_string(), "Expected operand at line 1");
    }
}
