use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{BinaryExpr, NumberExpr, StringExpr, SymbolExpr, TypedExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    classify::{classify, is_assignment, UNARY_PRECEDENCE},
    matcher::find_matching_group,
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, min_precedence: u8) -> Result<ExprWrapper, Error> {
    if !parser.has_tokens() {
        return Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.get_position(),
        ));
    }

    // The left-hand side is a prefix application when an operator sits in
    // the leading position, a primary otherwise.
    let mut left = if parser.current_token_kind() == TokenKind::Operator {
        parse_unary_expr(parser)?
    } else {
        parse_primary_expr(parser)?
    };

    // Climb: classify each following operator against the token before it,
    // stop below the minimum precedence or at an assignment operator (those
    // belong to the statement layer).
    while parser.has_tokens() && parser.current_token_kind() == TokenKind::Operator {
        let operator = parser.current_token().clone();
        if is_assignment(Some(&operator)) {
            break;
        }

        let context = parser.previous_token().cloned();
        let info = classify(&operator.value, context.as_ref());

        if info.arity == 1 {
            // Only `!` can classify unary here, and it has no postfix form.
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: operator.value.clone(),
                    message: String::from("expected a binary operator"),
                },
                operator.span.start.clone(),
            ));
        }

        if info.precedence < min_precedence {
            break;
        }

        parser.advance();

        let next_min = if info.left_associative {
            info.precedence + 1
        } else {
            info.precedence
        };
        let right = parse_expr(parser, next_min)?;

        left = if operator.value == ":" {
            ExprWrapper::new(TypedExpr {
                span: Span {
                    start: left.get_span().start.clone(),
                    end: right.get_span().end.clone(),
                },
                expression: left,
                annotation: right,
            })
        } else {
            ExprWrapper::new(BinaryExpr {
                span: Span {
                    start: left.get_span().start.clone(),
                    end: right.get_span().end.clone(),
                },
                left,
                operator: operator.clone(),
                right,
            })
        };
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse();

            if result.is_err() {
                Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ))
            } else {
                Ok(ExprWrapper::new(NumberExpr {
                    value: result.unwrap(),
                    span: parser.advance().span.clone(),
                }))
            }
        }
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::String => Ok(ExprWrapper::new(StringExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::GroupOpen => parse_grouping_expr(parser),
        TokenKind::EOF => Err(Error::new(
            ErrorImpl::UnexpectedEndOfInput,
            parser.get_position(),
        )),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected an expression"),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator = parser.current_token().clone();
    let context = parser.previous_token().cloned();
    let info = classify(&operator.value, context.as_ref());

    if info.arity != 1 {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: operator.value.clone(),
                message: String::from("expected an expression"),
            },
            operator.span.start.clone(),
        ));
    }

    parser.advance();
    let operand = parse_expr(parser, UNARY_PRECEDENCE)?;

    Ok(ExprWrapper::new(UnaryExpr {
        span: Span {
            start: operator.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        operator,
        operand,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let open_index = parser.index();
    let open = parser.expect(TokenKind::GroupOpen)?;

    // Locate the close before descending; an unmatched group is fatal to
    // the whole expression.
    let offset = match find_matching_group(parser.tokens(), open_index) {
        Some(offset) => offset,
        None => {
            return Err(Error::new(
                ErrorImpl::UnmatchedDelimiter {
                    delimiter: open.value.clone(),
                },
                open.span.start.clone(),
            ))
        }
    };
    let close_index = open_index + offset;

    let expr = parse_expr(parser, 0)?;

    if parser.index() != close_index {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        ));
    }
    parser.expect(TokenKind::GroupClose)?;

    Ok(expr)
}
