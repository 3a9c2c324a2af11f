//! Semantic type information attached to the syntax tree.
//!
//! Types are resolved by the external front end; this module only exposes
//! them through [`TypeResolver`]. Every lookup may fail, and a whole file may
//! come without any semantic context at all.

use crate::syntax::{Expr, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolved type of an expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticType {
    /// Display name, e.g. `Color` or `com.example.Color`
    pub name: String,

    #[serde(default)]
    pub is_enum: bool,
}

impl SemanticType {
    pub fn new(name: impl Into<String>, is_enum: bool) -> Self {
        Self {
            name: name.into(),
            is_enum,
        }
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum
    }
}

/// One entry of a serialized binding table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBinding {
    pub node: NodeId,
    #[serde(rename = "type")]
    pub ty: SemanticType,
}

/// Read-only access to resolved types
pub trait TypeResolver {
    /// `false` when the file was analyzed without semantic context
    fn is_available(&self) -> bool;

    /// Resolved type of `expr`, if any
    fn type_of(&self, expr: &Expr) -> Option<&SemanticType>;
}

/// Binding table for one file
#[derive(Debug, Clone, Default)]
pub enum BindingContext {
    /// No semantic information was produced for the file
    #[default]
    Empty,
    Resolved(HashMap<NodeId, SemanticType>),
}

impl BindingContext {
    pub fn from_bindings(bindings: impl IntoIterator<Item = TypeBinding>) -> Self {
        BindingContext::Resolved(
            bindings
                .into_iter()
                .map(|binding| (binding.node, binding.ty))
                .collect(),
        )
    }

    /// Number of nodes with a resolved type
    pub fn resolved_count(&self) -> usize {
        match self {
            BindingContext::Empty => 0,
            BindingContext::Resolved(types) => types.len(),
        }
    }
}

impl TypeResolver for BindingContext {
    fn is_available(&self) -> bool {
        matches!(self, BindingContext::Resolved(_))
    }

    fn type_of(&self, expr: &Expr) -> Option<&SemanticType> {
        match self {
            BindingContext::Empty => None,
            BindingContext::Resolved(types) => types.get(&expr.id()),
        }
    }
}

#[cfg(test)]
mod tests;
