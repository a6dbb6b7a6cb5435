//! Lexer (scanner) for ESAL source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! At every position the rules in [`RULES`] are tried in order and the first
//! one that matches wins, even when a later rule would match more text.
//! Characters claimed by no meaningful rule are dropped without a diagnostic.

use std::fmt;
use tracing::debug;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Sigils and keywords
    ProgramStart, // esal()
    Else,         // @@?
    Return,       // $$@
    FuncDef,      // @@
    VarInt,       // ##
    Output,       // @$
    If,           // @?

    // Literals
    Number,
    Str,

    // Operators
    Assign,  // =
    ArithOp, // + - * /

    Identifier,

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;

    // End of file
    Eof,
}

impl TokenKind {
    /// Upper-case tag used in diagnostics, e.g. `RBRACE`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::ProgramStart => "PROGRAM_START",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::FuncDef => "FUNC_DEF",
            TokenKind::VarInt => "VAR_INT",
            TokenKind::Output => "OUTPUT",
            TokenKind::If => "IF",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::ArithOp => "ARITH_OP",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Eof => "EOF",
        }
    }

    /// Sigils that are recognized but have no statement production yet.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Else | TokenKind::Return | TokenKind::FuncDef | TokenKind::If
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact matched text.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based source line.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') [line {}]", self.kind, self.lexeme, self.line)
    }
}

/// Shape of text a rule accepts at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Exact text
    Literal(&'static str),
    /// `digits ('.' digits)?`
    Number,
    /// `"` then any non-quote run then `"`
    Text,
    /// One specific character
    Char(char),
    /// Any single character from the set
    OneOf(&'static str),
    /// Letter or `_`, then letters, digits or `_`
    Identifier,
    Newline,
    /// Run of spaces and tabs
    Blank,
    /// Exactly one character of anything
    AnyChar,
}

impl Pattern {
    /// Byte length of the match at the start of `rest`, if any.
    pub fn match_len(self, rest: &str) -> Option<usize> {
        match self {
            Pattern::Literal(lit) => rest.starts_with(lit).then_some(lit.len()),
            Pattern::Number => {
                let int_len = leading_digits(rest);
                if int_len == 0 {
                    return None;
                }
                let after = &rest[int_len..];
                if let Some(fraction) = after.strip_prefix('.') {
                    let frac_len = leading_digits(fraction);
                    if frac_len > 0 {
                        return Some(int_len + 1 + frac_len);
                    }
                }
                Some(int_len)
            }
            Pattern::Text => {
                let body = rest.strip_prefix('"')?;
                body.find('"').map(|close| close + 2)
            }
            Pattern::Char(expected) => rest
                .starts_with(expected)
                .then_some(expected.len_utf8()),
            Pattern::OneOf(set) => rest
                .chars()
                .next()
                .filter(|c| set.contains(*c))
                .map(char::len_utf8),
            Pattern::Identifier => {
                let mut chars = rest.char_indices();
                let (_, first) = chars.next()?;
                if !(first.is_ascii_alphabetic() || first == '_') {
                    return None;
                }
                let end = chars
                    .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
                    .map(|(idx, _)| idx)
                    .unwrap_or(rest.len());
                Some(end)
            }
            Pattern::Newline => rest.starts_with('\n').then_some(1),
            Pattern::Blank => {
                let len = rest
                    .bytes()
                    .take_while(|b| *b == b' ' || *b == b'\t')
                    .count();
                (len > 0).then_some(len)
            }
            Pattern::AnyChar => rest.chars().next().map(char::len_utf8),
        }
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// What the lexer does with a rule's match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Emit(TokenKind),
    /// Bump the line counter, no token
    Newline,
    /// Whitespace, no token
    Skip,
    /// Unrecognized character, no token
    Drop,
}

/// One entry of the lexical rule table.
#[derive(Debug, Clone, Copy)]
pub struct LexRule {
    pub action: Action,
    pub pattern: Pattern,
}

const fn rule(action: Action, pattern: Pattern) -> LexRule {
    LexRule { action, pattern }
}

/// Lexical rules, highest priority first.
///
/// Multi-character sigils sharing a prefix must come before the shorter
/// ones (`@@?` before `@@`, both before `@?`), and `esal()` must precede the
/// identifier rule.
pub static RULES: &[LexRule] = &[
    rule(Action::Emit(TokenKind::ProgramStart), Pattern::Literal("esal()")),
    rule(Action::Emit(TokenKind::Else), Pattern::Literal("@@?")),
    rule(Action::Emit(TokenKind::Return), Pattern::Literal("$$@")),
    rule(Action::Emit(TokenKind::FuncDef), Pattern::Literal("@@")),
    rule(Action::Emit(TokenKind::VarInt), Pattern::Literal("##")),
    rule(Action::Emit(TokenKind::Output), Pattern::Literal("@$")),
    rule(Action::Emit(TokenKind::If), Pattern::Literal("@?")),
    rule(Action::Emit(TokenKind::Number), Pattern::Number),
    rule(Action::Emit(TokenKind::Str), Pattern::Text),
    rule(Action::Emit(TokenKind::Assign), Pattern::Char('=')),
    rule(Action::Emit(TokenKind::ArithOp), Pattern::OneOf("+-*/")),
    rule(Action::Emit(TokenKind::Identifier), Pattern::Identifier),
    rule(Action::Emit(TokenKind::LParen), Pattern::Char('(')),
    rule(Action::Emit(TokenKind::RParen), Pattern::Char(')')),
    rule(Action::Emit(TokenKind::LBrace), Pattern::Char('{')),
    rule(Action::Emit(TokenKind::RBrace), Pattern::Char('}')),
    rule(Action::Emit(TokenKind::Semicolon), Pattern::Char(';')),
    rule(Action::Newline, Pattern::Newline),
    rule(Action::Skip, Pattern::Blank),
    rule(Action::Drop, Pattern::AnyChar),
];

/// Lexer for ESAL source code
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input. Never fails; the last token is always `Eof`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some((rule, len)) = self.next_match() {
            let lexeme = &self.input[self.position..self.position + len];

            match rule.action {
                Action::Emit(kind) => tokens.push(Token::new(kind, lexeme, self.line)),
                Action::Newline => self.line += 1,
                Action::Skip => {}
                Action::Drop => {
                    debug!(line = self.line, character = ?lexeme, "dropping unrecognized character");
                }
            }

            self.position += len;
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        tokens
    }

    /// First rule matching at the current position, with its match length.
    fn next_match(&self) -> Option<(&'static LexRule, usize)> {
        let rest = self.input.get(self.position..)?;
        if rest.is_empty() {
            return None;
        }
        RULES
            .iter()
            .find_map(|rule| rule.pattern.match_len(rest).map(|len| (rule, len)))
    }
}

/// Scan `source` into tokens.
pub fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_simple_program() {
        let tokens = scan("esal() { ## x = 5; @$ x; }");
        let expected = [
            (TokenKind::ProgramStart, "esal()"),
            (TokenKind::LBrace, "{"),
            (TokenKind::VarInt, "##"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Assign, "="),
            (TokenKind::Number, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Output, "@$"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Eof, ""),
        ];

        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, lexeme)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind(), kind);
            assert_eq!(token.lexeme(), lexeme);
            assert_eq!(token.line(), 1);
        }
    }

    #[test]
    fn test_sigil_priority() {
        assert_eq!(kinds("@@?"), vec![TokenKind::Else, TokenKind::Eof]);
        assert_eq!(kinds("@@"), vec![TokenKind::FuncDef, TokenKind::Eof]);
        assert_eq!(kinds("@?"), vec![TokenKind::If, TokenKind::Eof]);
        assert_eq!(kinds("@$"), vec![TokenKind::Output, TokenKind::Eof]);
        assert_eq!(kinds("$$@"), vec![TokenKind::Return, TokenKind::Eof]);
        // `@@` wins over `@$` at position 0, leaving a lone `$` that is dropped
        assert_eq!(kinds("@@$"), vec![TokenKind::FuncDef, TokenKind::Eof]);
    }

    #[test]
    fn test_program_start_versus_identifier() {
        assert_eq!(kinds("esal"), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(
            kinds("esalx()"),
            vec![
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("esal ()"),
            vec![
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = scan("3.14 42 7.");
        assert_eq!(tokens[0].lexeme(), "3.14");
        assert_eq!(tokens[1].lexeme(), "42");
        // the trailing dot is not part of the literal and is dropped
        assert_eq!(tokens[2].lexeme(), "7");
        assert_eq!(tokens[3].kind(), TokenKind::Eof);
    }

    #[test]
    fn test_string_literal() {
        let tokens = scan(r#"@$ "hello world";"#);
        assert_eq!(tokens[1].kind(), TokenKind::Str);
        assert_eq!(tokens[1].lexeme(), "\"hello world\"");

        // an unterminated quote is just a dropped character
        assert_eq!(
            kinds("\"abc"),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_operators_without_spaces() {
        assert_eq!(
            kinds("x=a+b*2-c/d"),
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::ArithOp,
                TokenKind::Identifier,
                TokenKind::ArithOp,
                TokenKind::Number,
                TokenKind::ArithOp,
                TokenKind::Identifier,
                TokenKind::ArithOp,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_tracking() {
        let tokens = scan("esal()\n{\n\n  ## x;\n}\n");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 2);
        assert_eq!(tokens[2].line(), 4);
        assert_eq!(tokens[3].line(), 4);
        assert_eq!(tokens[5].line(), 5);
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind(), TokenKind::Eof);
        assert_eq!(eof.line(), 6);
    }

    #[test]
    fn test_unrecognized_characters_are_dropped() {
        assert_eq!(kinds("% & ! \r ~ é"), vec![TokenKind::Eof]);
        assert_eq!(
            kinds("## x %;"),
            vec![
                TokenKind::VarInt,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_identifier_rules() {
        let tokens = scan("_tmp1 a_b2 9lives");
        assert_eq!(tokens[0].lexeme(), "_tmp1");
        assert_eq!(tokens[1].lexeme(), "a_b2");
        assert_eq!(tokens[2].kind(), TokenKind::Number);
        assert_eq!(tokens[2].lexeme(), "9");
        assert_eq!(tokens[3].lexeme(), "lives");
    }

    #[test]
    fn test_empty_input() {
        let tokens = scan("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind(), TokenKind::Eof);
        assert_eq!(tokens[0].line(), 1);
    }
}
