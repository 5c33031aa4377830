//! Contextual operator classification.
//!
//! A single operator spelling can denote different operators depending on
//! what precedes it: `-` is unary negation after another operator, a
//! separator, a group opener or at the very start of the input, and binary
//! subtraction after anything that completes an operand. Classification is
//! a pure table lookup keyed by `(operator, has_preceding_operand)`; the
//! context token is the one immediately *before* the operator in the
//! stream, never a lookahead.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::lexer::tokens::{Token, TokenKind};

/// Unary operators bind at this precedence, and their operands are parsed
/// with it as the minimum.
pub const UNARY_PRECEDENCE: u8 = 7;

/// Arity, precedence and associativity of one operator in one context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpInfo {
    pub arity: u8,
    pub precedence: u8,
    pub left_associative: bool,
}

const fn op(arity: u8, precedence: u8, left_associative: bool) -> OpInfo {
    OpInfo {
        arity,
        precedence,
        left_associative,
    }
}

/// Entries shared by both halves of the classification table.
fn context_free_table() -> HashMap<&'static str, OpInfo> {
    let fixed: [(&'static str, OpInfo); 21] = [
        ("^", op(2, 6, false)),
        ("*", op(2, 5, true)),
        ("/", op(2, 5, true)),
        (":", op(2, 4, true)),
        ("%", op(2, 3, true)),
        ("<", op(2, 2, true)),
        (">", op(2, 2, true)),
        ("<=", op(2, 2, true)),
        (">=", op(2, 2, true)),
        ("==", op(2, 2, true)),
        ("!=", op(2, 2, true)),
        ("&&", op(2, 1, true)),
        ("||", op(2, 1, true)),
        ("^|", op(2, 1, true)),
        ("=", op(2, 0, true)),
        ("+=", op(2, 0, true)),
        ("-=", op(2, 0, true)),
        ("*=", op(2, 0, true)),
        ("/=", op(2, 0, true)),
        ("^=", op(2, 0, true)),
        ("%=", op(2, 0, true)),
    ];

    let mut map = HashMap::new();
    for (operator, info) in fixed {
        map.insert(operator, info);
    }
    map
}

lazy_static! {
    /// The `(operator, has_preceding_operand)` table, split on the boolean:
    /// this half answers lookups with a preceding operand (infix positions).
    static ref INFIX_LOOKUP: HashMap<&'static str, OpInfo> = {
        let mut map = context_free_table();
        map.insert("+", op(2, 4, true));
        map.insert("-", op(2, 4, true));
        map.insert("!", op(1, 7, false));
        map
    };

    /// The other half: lookups without a preceding operand (prefix
    /// positions). `!` is unary in both halves.
    static ref PREFIX_LOOKUP: HashMap<&'static str, OpInfo> = {
        let mut map = context_free_table();
        map.insert("+", op(1, 7, false));
        map.insert("-", op(1, 7, false));
        map.insert("!", op(1, 7, false));
        map
    };

    static ref ASSIGNMENT_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("=");
        set.insert("+=");
        set.insert("-=");
        set.insert("*=");
        set.insert("/=");
        set.insert("^=");
        set.insert("%=");
        set
    };
}

/// Whether the context token completes an operand, making a following
/// `+`/`-` infix. Identifiers, literals and a closed group do; operators,
/// separators, an open group, block markers and the start of input do not.
fn has_preceding_operand(context: Option<&Token>) -> bool {
    match context {
        Some(token) => matches!(
            token.kind,
            TokenKind::Identifier | TokenKind::String | TokenKind::Number | TokenKind::GroupClose
        ),
        None => false,
    }
}

/// Looks up an operator in its context.
///
/// Panics on a spelling outside the table: the lexer can never produce
/// one, so reaching this is a contract violation, not a parse error.
pub fn classify(operator: &str, context: Option<&Token>) -> OpInfo {
    let table = if has_preceding_operand(context) {
        &*INFIX_LOOKUP
    } else {
        &*PREFIX_LOOKUP
    };

    match table.get(operator) {
        Some(info) => *info,
        None => panic!("unknown operator: {}", operator),
    }
}

pub fn arity(operator: &str, context: Option<&Token>) -> u8 {
    classify(operator, context).arity
}

pub fn precedence(operator: &str, context: Option<&Token>) -> u8 {
    classify(operator, context).precedence
}

pub fn is_left_associative(operator: &str, context: Option<&Token>) -> bool {
    classify(operator, context).left_associative
}

/// True iff the token is an operator spelling one of the assignment
/// operators. An absent token is never an assignment.
pub fn is_assignment(token: Option<&Token>) -> bool {
    match token {
        Some(token) => {
            token.kind == TokenKind::Operator && ASSIGNMENT_LOOKUP.contains(token.value.as_str())
        }
        None => false,
    }
}
