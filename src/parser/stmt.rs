use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::{Expr, ExprWrapper, StmtWrapper},
        expressions::AssignmentExpr,
        statements::{
            DeclarationStmt, ExpressionStmt, ForStmt, FunctionStmt, IfStmt, SequenceStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{classify::is_assignment, expr::parse_expr},
    Span,
};

use super::{
    matcher::{find_matching_block, find_matching_group},
    parser::Parser,
};

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;

lazy_static! {
    // Keywords are ordinary identifier tokens; statements that start with
    // one dispatch through this table.
    static ref STMT_LOOKUP: HashMap<&'static str, StmtHandler> = {
        let mut map: HashMap<&'static str, StmtHandler> = HashMap::new();
        map.insert("func", parse_function);
        map.insert("if", parse_if);
        map.insert("for", parse_for);
        map.insert("while", parse_while);
        map
    };
}

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if parser.current_token_kind() == TokenKind::Identifier {
        if let Some(handler) = STMT_LOOKUP.get(parser.current_token().value.as_str()) {
            return handler(parser);
        }

        if is_declaration_start(parser) {
            return parse_declaration(parser);
        }
    }

    if parser.current_token_kind() == TokenKind::BlockOpen {
        let sequence = parse_sequence(parser)?;
        return Ok(StmtWrapper::new(sequence));
    }

    // Expression statement, or an assignment once the lvalue has been read.
    let expr = parse_expr(parser, 0)?;
    let expr = if is_assignment(Some(parser.current_token())) {
        parse_assignment_expr(parser, expr)?
    } else {
        expr
    };

    parser.expect_value(TokenKind::Separator, ";")?;

    Ok(StmtWrapper::new(ExpressionStmt {
        span: expr.get_span().clone(),
        expression: expr,
    }))
}

fn is_declaration_start(parser: &Parser) -> bool {
    parser.current_token_kind() == TokenKind::Identifier
        && matches!(
            parser.peek_token(1),
            Some(token) if token.kind == TokenKind::Operator && token.value == ":"
        )
}

pub fn parse_declaration(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected identifier during declaration"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

    parser.expect_value(TokenKind::Operator, ":")?;

    let declared_type = parse_expr(parser, 0)?;

    let initializer;
    if is_assignment(Some(parser.current_token())) {
        let operator = parser.current_token().clone();
        if operator.value != "=" {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: operator.value.clone(),
                    message: String::from("only `=` can initialize a declaration"),
                },
                operator.span.start.clone(),
            ));
        }
        parser.advance();
        initializer = Some(parse_expr(parser, 0)?);
    } else {
        initializer = None;
    }

    parser.expect_value(TokenKind::Separator, ";")?;

    Ok(StmtWrapper::new(DeclarationStmt {
        span: Span {
            start: name.span.start.clone(),
            end: parser.get_position(),
        },
        identifier: name.value,
        declared_type,
        initializer,
    }))
}

/// Parses a full assignment: lvalue, assignment operator, value.
pub fn parse_assignment(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let assignee = parse_expr(parser, 0)?;
    parse_assignment_expr(parser, assignee)
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    assignee: ExprWrapper,
) -> Result<ExprWrapper, Error> {
    if !is_assignment(Some(parser.current_token())) {
        let token = parser.current_token();
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected an assignment operator"),
            },
            token.span.start.clone(),
        ));
    }

    let operator = parser.advance().clone();
    let value = parse_expr(parser, 0)?;

    Ok(ExprWrapper::new(AssignmentExpr {
        span: Span {
            start: assignee.get_span().start.clone(),
            end: value.get_span().end.clone(),
        },
        assignee,
        operator,
        value,
    }))
}

/// Parses a brace-delimited statement sequence.
///
/// The matching close is located once at block entry; statements are then
/// parsed until the cursor reaches it. An unmatched block fails the whole
/// enclosing parse.
pub fn parse_sequence(parser: &mut Parser) -> Result<SequenceStmt, Error> {
    let open_index = parser.index();
    let open = parser.expect(TokenKind::BlockOpen)?;

    let offset = match find_matching_block(parser.tokens(), open_index) {
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

    let mut body = Vec::new();
    while parser.index() < close_index {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::BlockClose)?;

    Ok(SequenceStmt {
        body,
        id: parser.advance_id(),
        span: Span {
            start: open.span.start.clone(),
            end: parser.get_position(),
        },
    })
}

pub fn parse_function(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let keyword = parser.expect_value(TokenKind::Identifier, "func")?;

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let open_index = parser.index();
    let open = parser.expect(TokenKind::GroupOpen)?;
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

    let mut parameters = Vec::new();
    while parser.index() < close_index {
        if parser.current_token_kind() == TokenKind::Separator {
            parser.advance();
            continue;
        }

        let name = parser.expect(TokenKind::Identifier)?.value;
        let annotation = if parser.current_token_kind() == TokenKind::Operator
            && parser.current_token().value == ":"
        {
            parser.advance();
            Some(parse_expr(parser, 0)?)
        } else {
            None
        };
        parameters.push((name, annotation));
    }

    parser.expect(TokenKind::GroupClose)?;

    let body = parse_sequence(parser)?;

    Ok(StmtWrapper::new(FunctionStmt {
        span: Span {
            start: keyword.span.start.clone(),
            end: parser.get_position(),
        },
        identifier,
        parameters,
        body,
    }))
}

pub fn parse_if(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let keyword = parser.expect_value(TokenKind::Identifier, "if")?;

    let condition = parse_expr(parser, 0)?;
    let then_body = parse_sequence(parser)?;

    let else_body;
    if parser.has_tokens()
        && parser.current_token_kind() == TokenKind::Identifier
        && parser.current_token().value == "else"
    {
        parser.advance();
        else_body = Some(parse_sequence(parser)?);
    } else {
        else_body = None;
    }

    Ok(StmtWrapper::new(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span {
            start: keyword.span.start.clone(),
            end: parser.get_position(),
        },
    }))
}

pub fn parse_while(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let keyword = parser.expect_value(TokenKind::Identifier, "while")?;

    let condition = parse_expr(parser, 0)?;
    let body = parse_sequence(parser)?;

    Ok(StmtWrapper::new(WhileStmt {
        condition,
        body,
        span: Span {
            start: keyword.span.start.clone(),
            end: parser.get_position(),
        },
    }))
}

pub fn parse_for(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let keyword = parser.expect_value(TokenKind::Identifier, "for")?;

    // Header: `init; cond; step` where init is a declaration or an
    // assignment and step is an assignment.
    let init = if is_declaration_start(parser) {
        parse_declaration(parser)?
    } else {
        let assignment = parse_assignment(parser)?;
        let stmt = StmtWrapper::new(ExpressionStmt {
            span: assignment.get_span().clone(),
            expression: assignment,
        });
        parser.expect_value(TokenKind::Separator, ";")?;
        stmt
    };

    let condition = parse_expr(parser, 0)?;
    parser.expect_value(TokenKind::Separator, ";")?;

    let step = parse_assignment(parser)?;

    let body = parse_sequence(parser)?;

    Ok(StmtWrapper::new(ForStmt {
        init,
        condition,
        step,
        body,
        span: Span {
            start: keyword.span.start.clone(),
            end: parser.get_position(),
        },
    }))
}
