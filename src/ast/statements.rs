use std::{
    any::Any,
    slice::{Iter, IterMut},
};

use crate::Span;

use super::ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper};

#[derive(Debug, Clone)]
pub struct SequenceStmt {
    pub body: Vec<StmtWrapper>,
    pub id: i32,
    pub span: Span,
}

impl SequenceStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, StmtWrapper> {
        self.body.iter_mut()
    }
}

impl Stmt for SequenceStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::SequenceStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.expression.into_cloned_stmt_wrapper()
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct DeclarationStmt {
    pub identifier: String,
    pub declared_type: ExprWrapper,
    pub initializer: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for DeclarationStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::DeclarationStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(DeclarationStmt {
            identifier: self.identifier.clone(),
            declared_type: self.declared_type.clone_wrapper(),
            initializer: self
                .initializer
                .as_ref()
                .map(|initializer| initializer.clone_wrapper()),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct FunctionStmt {
    pub identifier: String,
    pub parameters: Vec<(String, Option<ExprWrapper>)>,
    pub body: SequenceStmt,
    pub span: Span,
}

impl Stmt for FunctionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FunctionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(FunctionStmt {
            identifier: self.identifier.clone(),
            parameters: self
                .parameters
                .iter()
                .map(|(name, annotation)| {
                    (
                        name.clone(),
                        annotation.as_ref().map(|annotation| annotation.clone_wrapper()),
                    )
                })
                .collect(),
            body: self.body.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct IfStmt {
    pub condition: ExprWrapper,
    pub then_body: SequenceStmt,
    pub else_body: Option<SequenceStmt>,
    pub span: Span,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(IfStmt {
            condition: self.condition.clone_wrapper(),
            then_body: self.then_body.clone(),
            else_body: self.else_body.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct WhileStmt {
    pub condition: ExprWrapper,
    pub body: SequenceStmt,
    pub span: Span,
}

impl Stmt for WhileStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::WhileStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(WhileStmt {
            condition: self.condition.clone_wrapper(),
            body: self.body.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct ForStmt {
    pub init: StmtWrapper,
    pub condition: ExprWrapper,
    pub step: ExprWrapper,
    pub body: SequenceStmt,
    pub span: Span,
}

impl Stmt for ForStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ForStmt {
            init: self.init.clone(),
            condition: self.condition.clone_wrapper(),
            step: self.step.clone_wrapper(),
            body: self.body.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
