//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the fatal error type, helper methods, and the program entry point.
//!
//! # Parser Architecture
//!
//! One token of lookahead, no backtracking:
//! - This module: Parser struct, helper methods, `program` rule
//! - `statements`: statement dispatch, declarations, assignments, output
//! - `expressions`: operand chains and their inferred type
//!
//! # Error model
//!
//! A grammar mismatch is a [`ParseError`] and stops the parse. Semantic
//! problems are pushed onto [`Diagnostics`] and parsing continues. A
//! successful parse hands back an [`Analysis`] with both the diagnostics and
//! the populated [`SymbolTable`].

use crate::parser::lexer::{Token, TokenKind};
use crate::semantic::{Diagnostics, SemanticError, SymbolTable};
use thiserror::Error;
use tracing::debug;

/// Fatal structural error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected {expected} at line {line}")]
    Expected { expected: TokenKind, line: usize },

    #[error("Invalid expression at line {line}")]
    InvalidExpression { line: usize },

    #[error("Expected operand at line {line}")]
    ExpectedOperand { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Expected { line, .. }
            | ParseError::InvalidExpression { line }
            | ParseError::ExpectedOperand { line } => *line,
        }
    }
}

/// Result of a structurally valid parse
#[derive(Debug, Clone)]
pub struct Analysis {
    pub symbols: SymbolTable,
    pub diagnostics: Diagnostics,
}

/// Recursive descent parser for ESAL
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) symbols: SymbolTable,
    pub(crate) diagnostics: Diagnostics,
}

impl Parser {
    /// Bind a parser to a token stream. A missing trailing `Eof` is added.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(Token::kind) != Some(TokenKind::Eof) {
            let line = tokens.last().map_or(1, Token::line);
            tokens.push(Token::new(TokenKind::Eof, "", line));
        }
        Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Parse `esal() { statement* }`
    pub fn parse_program(mut self) -> Result<Analysis, ParseError> {
        self.expect(TokenKind::ProgramStart)?;
        self.expect(TokenKind::LBrace)?;

        while !self.check(TokenKind::RBrace) {
            if self.is_at_end() {
                // reported as the missing brace below
                break;
            }
            self.parse_statement()?;
        }

        self.expect(TokenKind::RBrace)?;

        if !self.is_at_end() {
            let line = self.current_line();
            self.diagnostics
                .error(SemanticError::TrailingTokens { line });
        }

        debug!(
            errors = self.diagnostics.errors.len(),
            warnings = self.diagnostics.warnings.len(),
            "parse finished"
        );

        Ok(Analysis {
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees a trailing Eof and `advance` never moves past it
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind()
    }

    pub(crate) fn current_line(&self) -> usize {
        self.peek().line()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::Expected {
                expected: kind,
                line: self.current_line(),
            })
        }
    }
}
