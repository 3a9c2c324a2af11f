//! Tree builders shared by unit tests

use super::*;
use crate::semantic::{SemanticType, TypeBinding};

fn at() -> TextRange {
    TextRange::new(0, 0)
}

pub(crate) fn ident(name: &str) -> Expr {
    Expr::Ident {
        id: NodeId::new(),
        range: at(),
        name: name.to_string(),
    }
}

pub(crate) fn ident_with_id(id: u64, name: &str) -> Expr {
    Expr::Ident {
        id: NodeId(id),
        range: at(),
        name: name.to_string(),
    }
}

pub(crate) fn lit(text: &str) -> Expr {
    Expr::Literal {
        id: NodeId::new(),
        range: at(),
        text: text.to_string(),
    }
}

pub(crate) fn type_ref(text: &str) -> TypeRef {
    TypeRef {
        id: NodeId::new(),
        range: at(),
        text: text.to_string(),
    }
}

/// `operand is ty`
pub(crate) fn is_expr(operand: &str, ty: &str) -> Expr {
    Expr::Is {
        id: NodeId::new(),
        range: at(),
        operand: Box::new(ident(operand)),
        type_ref: type_ref(ty),
        negated: false,
    }
}

pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        id: NodeId::new(),
        range: at(),
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

pub(crate) fn call(callee: &str, args: Vec<Expr>) -> Expr {
    Expr::Call {
        id: NodeId::new(),
        range: at(),
        callee: Box::new(ident(callee)),
        args,
    }
}

pub(crate) fn block(statements: Vec<Stmt>) -> Expr {
    Expr::Block {
        id: NodeId::new(),
        range: at(),
        statements,
    }
}

pub(crate) fn cond(expr: Expr) -> WhenCondition {
    WhenCondition::Expression {
        id: NodeId::new(),
        range: at(),
        expr,
    }
}

/// `is ty ->` under a subject
pub(crate) fn is_pattern(ty: &str) -> WhenCondition {
    WhenCondition::IsPattern {
        id: NodeId::new(),
        range: at(),
        type_ref: type_ref(ty),
        negated: false,
    }
}

pub(crate) fn entry(conditions: Vec<WhenCondition>, body: Expr) -> WhenEntry {
    WhenEntry {
        id: NodeId::new(),
        range: at(),
        conditions,
        body,
    }
}

pub(crate) fn else_entry(body: Expr) -> WhenEntry {
    entry(Vec::new(), body)
}

pub(crate) fn when_expr(subject: Option<Expr>, entries: Vec<WhenEntry>) -> WhenExpr {
    WhenExpr {
        id: NodeId::new(),
        range: at(),
        subject: subject.map(Box::new),
        entries,
    }
}

pub(crate) fn function(name: &str, body: Option<Expr>) -> Decl {
    Decl::Function(FunctionDecl {
        id: NodeId::new(),
        range: at(),
        name: name.to_string(),
        body,
    })
}

pub(crate) fn class(name: &str, members: Vec<Decl>) -> Decl {
    Decl::Class(ClassDecl {
        id: NodeId::new(),
        range: at(),
        name: name.to_string(),
        members,
    })
}

pub(crate) fn property(name: &str, initializer: Option<Expr>) -> Decl {
    Decl::Property(PropertyDecl {
        id: NodeId::new(),
        range: at(),
        name: name.to_string(),
        initializer,
    })
}

pub(crate) fn binding(node: u64, name: &str, is_enum: bool) -> TypeBinding {
    TypeBinding {
        node: NodeId(node),
        ty: SemanticType::new(name, is_enum),
    }
}

pub(crate) fn syntax_file(
    name: &str,
    declarations: Vec<Decl>,
    bindings: Option<Vec<TypeBinding>>,
) -> SyntaxFile {
    SyntaxFile {
        path: std::path::PathBuf::from(name),
        text: String::new(),
        declarations,
        bindings,
    }
}
