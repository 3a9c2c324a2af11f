//! Depth-first traversal over the syntax tree.
//!
//! [`Walk`] yields every node in pre-order, left to right, without recursion.
//! The node kinds form a closed set and [`children`] matches each of them
//! exhaustively, so a new node kind cannot be silently skipped.

use super::ast::*;

/// A borrowed reference to any node in the tree
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Decl(&'a Decl),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Entry(&'a WhenEntry),
    Condition(&'a WhenCondition),
}

/// Direct children of a node, in source order
pub fn children(node: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut out = Vec::new();
    match node {
        NodeRef::Decl(decl) => match decl {
            Decl::Function(function) => {
                out.extend(function.body.iter().map(NodeRef::Expr));
            }
            Decl::Class(class) => {
                out.extend(class.members.iter().map(NodeRef::Decl));
            }
            Decl::Property(property) => {
                out.extend(property.initializer.iter().map(NodeRef::Expr));
            }
        },
        NodeRef::Stmt(stmt) => match stmt {
            Stmt::Decl(decl) => out.push(NodeRef::Decl(decl)),
            Stmt::Expr(expr) => out.push(NodeRef::Expr(expr)),
        },
        NodeRef::Expr(expr) => match expr {
            Expr::Ident { .. } | Expr::Literal { .. } => {}
            Expr::Call { callee, args, .. } => {
                out.push(NodeRef::Expr(callee));
                out.extend(args.iter().map(NodeRef::Expr));
            }
            Expr::DotQualified { receiver, .. } => out.push(NodeRef::Expr(receiver)),
            Expr::Binary { lhs, rhs, .. } => {
                out.push(NodeRef::Expr(lhs));
                out.push(NodeRef::Expr(rhs));
            }
            Expr::Unary { operand, .. } => out.push(NodeRef::Expr(operand)),
            Expr::Is { operand, .. } => out.push(NodeRef::Expr(operand)),
            Expr::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                out.push(NodeRef::Expr(condition));
                out.push(NodeRef::Expr(then_branch));
                out.extend(else_branch.iter().map(|e| NodeRef::Expr(e)));
            }
            Expr::When(when) => {
                out.extend(when.subject.iter().map(|e| NodeRef::Expr(e)));
                out.extend(when.entries.iter().map(NodeRef::Entry));
            }
            Expr::Block { statements, .. } => {
                out.extend(statements.iter().map(NodeRef::Stmt));
            }
            Expr::Return { value, .. } => {
                out.extend(value.iter().map(|e| NodeRef::Expr(e)));
            }
        },
        NodeRef::Entry(entry) => {
            out.extend(entry.conditions.iter().map(NodeRef::Condition));
            out.push(NodeRef::Expr(&entry.body));
        }
        NodeRef::Condition(condition) => match condition {
            WhenCondition::Expression { expr, .. } | WhenCondition::InRange { expr, .. } => {
                out.push(NodeRef::Expr(expr))
            }
            WhenCondition::IsPattern { .. } => {}
        },
    }
    out
}

/// Lazy pre-order iterator over a forest of nodes
pub struct Walk<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Walk<'a> {
    /// Walk every declaration of a file
    pub fn decls(decls: &'a [Decl]) -> Self {
        Self {
            stack: decls.iter().rev().map(NodeRef::Decl).collect(),
        }
    }

    /// Walk a single subtree, including its root
    pub fn subtree(root: NodeRef<'a>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(children(node).into_iter().rev());
        Some(node)
    }
}

/// Every `when` expression in the file, outer before nested
pub fn when_expressions(decls: &[Decl]) -> impl Iterator<Item = &WhenExpr> {
    Walk::decls(decls).filter_map(|node| match node {
        NodeRef::Expr(Expr::When(when)) => Some(when),
        _ => None,
    })
}

/// Every named function in the file, including members and local functions
pub fn function_declarations(decls: &[Decl]) -> impl Iterator<Item = &FunctionDecl> {
    Walk::decls(decls).filter_map(|node| match node {
        NodeRef::Decl(Decl::Function(function)) => Some(function),
        _ => None,
    })
}

/// Tested type of every type test under `root`, in source order.
/// Both forms count, negated or not.
pub fn type_tests(root: NodeRef<'_>) -> impl Iterator<Item = &TypeRef> {
    Walk::subtree(root).filter_map(|node| match node {
        NodeRef::Expr(Expr::Is { type_ref, .. })
        | NodeRef::Condition(WhenCondition::IsPattern { type_ref, .. }) => Some(type_ref),
        _ => None,
    })
}
