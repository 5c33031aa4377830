//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Identifiers and numeric literals
//! - String literals with escape sequences
//! - Operators, delimiters and separators
//! - Whitespace emission and stripping
//! - Comments
//! - Error cases

use super::{
    lexer::{strip_whitespace, tokenize},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_keywords_are_identifiers() {
    let source = "func if else for while".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_tokenize_strings() {
    let source = "\"hello\" \"a\\nb\" \"\"".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "a\nb");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / ^ % : < > <= >= == != && || ^| ! = += -= *= /= ^= %=".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    let expected = [
        "+", "-", "*", "/", "^", "%", ":", "<", ">", "<=", ">=", "==", "!=", "&&", "||", "^|",
        "!", "=", "+=", "-=", "*=", "/=", "^=", "%=",
    ];

    for (token, expected) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, TokenKind::Operator);
        assert_eq!(token.value, *expected);
    }
    assert_eq!(tokens[expected.len()].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_compound_operators_are_single_tokens() {
    // Maximal munch: `+=` must never lex as `+` `=`.
    let source = "a+=1".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "+=");
    assert_eq!(tokens[2].kind, TokenKind::Number);
}

#[test]
fn test_tokenize_delimiters_and_separators() {
    let source = "( ) { } , ;".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[0].kind, TokenKind::GroupOpen);
    assert_eq!(tokens[1].kind, TokenKind::GroupClose);
    assert_eq!(tokens[2].kind, TokenKind::BlockOpen);
    assert_eq!(tokens[3].kind, TokenKind::BlockClose);
    assert_eq!(tokens[4].kind, TokenKind::Separator);
    assert_eq!(tokens[4].value, ",");
    assert_eq!(tokens[5].kind, TokenKind::Separator);
    assert_eq!(tokens[5].value, ";");
}

#[test]
fn test_whitespace_is_emitted_and_stripped() {
    let source = "1 + 2".to_string();
    let tokens = tokenize(source, Some("test.lang".to_string())).unwrap();

    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Whitespace));

    let stripped = strip_whitespace(tokens);
    assert!(stripped
        .iter()
        .all(|token| token.kind != TokenKind::Whitespace));
    assert_eq!(stripped.len(), 4); // 1, +, 2, EOF
}

#[test]
fn test_tokenize_comments_are_skipped() {
    let source = "1 // a comment\n2".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_appends_eof() {
    let tokens = tokenize("".to_string(), Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("let @ = 1;".to_string(), Some("test.lang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_token_spans_track_source_offsets() {
    let source = "ab + 1".to_string();
    let tokens = strip_whitespace(tokenize(source, Some("test.lang".to_string())).unwrap());

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[1].span.start.0, 3);
    assert_eq!(tokens[2].span.start.0, 5);
}
