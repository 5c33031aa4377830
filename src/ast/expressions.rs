use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// The operator token is kept as lexed; which operator it denotes was
/// already fixed by classification when the node was built.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Unary Expression
/// Represents a prefix operation on a single operand in the AST.
#[derive(Debug)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: ExprWrapper,
    pub span: Span,
}

impl Expr for UnaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Unary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(UnaryExpr {
            operator: self.operator.clone(),
            operand: self.operand.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Typed Expression
/// Represents a `value : type` annotation in the AST. The annotation is an
/// ordinary expression subtree.
#[derive(Debug)]
pub struct TypedExpr {
    pub expression: ExprWrapper,
    pub annotation: ExprWrapper,
    pub span: Span,
}

impl Expr for TypedExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Typed
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(TypedExpr {
            expression: self.expression.clone_wrapper(),
            annotation: self.annotation.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Assignment Expression
/// Represents an assignment operation in the AST. Built at the statement
/// boundary, never inside expression climbing.
#[derive(Debug)]
pub struct AssignmentExpr {
    pub assignee: ExprWrapper,
    pub operator: Token,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Expr for AssignmentExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(AssignmentExpr {
            assignee: self.assignee.clone_wrapper(),
            operator: self.operator.clone(),
            value: self.value.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}
