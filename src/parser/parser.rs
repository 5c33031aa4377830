//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level parse
//! entry point. Expression parsing is precedence climbing: the next
//! operator is classified against the token *preceding* it (see the
//! classify module) and the climb recurses with the minimum precedence the
//! classification dictates, with no backtracking. Statement parsing sits on
//! top and dispatches through a keyword lookup table.
//!
//! The parser owns the token stream and tracks a single cursor into it;
//! every production advances the cursor, so the tokens a production
//! consumed can be measured as the cursor distance across the call.

use std::rc::Rc;

use crate::{
    ast::statements::SequenceStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the cursor position and the name of
/// the source being parsed. The token stream is guaranteed to end with an
/// EOF token so cursor reads stay in bounds on truncated input.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Counter for generating unique sequence IDs
    current_id: i32,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, whitespace already stripped
    /// * `file` - Reference-counted string containing the source file name
    ///
    /// # Returns
    ///
    /// A new Parser instance ready to parse the token stream. An EOF token
    /// is appended if the stream does not already carry one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map(|token| token.span.end.0).unwrap_or(0);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: Position(end, Rc::clone(&file)),
                    end: Position(end, Rc::clone(&file)),
                }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            current_id: 1024, // Give some space for reserved ids
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token immediately before the cursor, or `None` at the
    /// very start of the stream. This is the classification context for
    /// the operator at the cursor.
    pub fn previous_token(&self) -> Option<&Token> {
        if self.pos == 0 {
            None
        } else {
            self.tokens.get((self.pos - 1) as usize)
        }
    }

    /// Returns the token `offset` positions past the cursor, or `None`
    /// when that runs off the stream.
    pub fn peek_token(&self, offset: i32) -> Option<&Token> {
        self.tokens.get((self.pos + offset) as usize)
    }

    /// Returns the kind of the token `offset` positions past the cursor,
    /// or EOF when that runs off the stream.
    pub fn peek_kind(&self, offset: i32) -> TokenKind {
        self.peek_token(offset)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Returns the cursor as an index into the token stream.
    pub fn index(&self) -> usize {
        self.pos as usize
    }

    /// Returns the whole token stream; used together with `index` when a
    /// production hands a range to the delimiter matcher.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        let kind = token.kind;
        if kind != expected_kind {
            match error {
                Some(_) => Err(error.unwrap()),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.span.start.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Expects a token of the specified kind *and* literal value.
    ///
    /// Kinds here are categories (all operators share one kind, `,` and `;`
    /// share another), so expecting a specific lexeme has to check the
    /// value as well.
    pub fn expect_value(&mut self, expected_kind: TokenKind, value: &str) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind || token.value != value {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: format!("expected `{}`", value),
                },
                token.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        (self.pos as usize) < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    /// Advances the internal sequence ID counter and returns the previous value.
    pub fn advance_id(&mut self) -> i32 {
        let id = self.current_id;
        self.current_id += 1;
        id
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the name of the source file being parsed.
    pub fn get_file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance
/// and parses statements until EOF into a root sequence.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse, whitespace already stripped
/// * `file` - Reference-counted string containing the source file name
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the root SequenceStmt or an Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<SequenceStmt, Error>) {
    let mut parser = Parser::new(tokens, Rc::clone(&file));

    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser);
        if let Ok(stmt) = stmt {
            body.push(stmt);
        } else {
            return (parser, Err(stmt.err().unwrap()));
        }
    }

    let end = parser.get_position();
    let sequence = Ok(SequenceStmt {
        body,
        id: 0,
        span: Span {
            start: Position(0, Rc::clone(&file)),
            end,
        },
    });

    (parser, sequence)
}
