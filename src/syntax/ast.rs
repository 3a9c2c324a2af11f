//! Syntax tree definitions for analyzed Kotlin files
//!
//! All nodes include:
//! - Unique node ID (the key used by the binding table)
//! - Byte range into the file text
//! - Node-specific data

use super::span::TextRange;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for syntax nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Generate a new unique node ID
    pub fn new() -> Self {
        // Above the range used by parser-assigned IDs
        static COUNTER: AtomicU64 = AtomicU64::new(1 << 32);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level and member declarations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Decl {
    Function(FunctionDecl),
    Class(ClassDecl),
    Property(PropertyDecl),
}

/// Named function declaration (`fun name(...) { ... }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    #[serde(default)]
    pub id: NodeId,
    pub range: TextRange,
    pub name: String,
    /// Absent for abstract and interface functions
    #[serde(default)]
    pub body: Option<Expr>,
}

/// Class, interface, object or enum class declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecl {
    #[serde(default)]
    pub id: NodeId,
    pub range: TextRange,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Decl>,
}

/// Property declaration (`val`/`var`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDecl {
    #[serde(default)]
    pub id: NodeId,
    pub range: TextRange,
    pub name: String,
    #[serde(default)]
    pub initializer: Option<Expr>,
}

/// A statement inside a block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stmt {
    Decl(Decl),
    Expr(Expr),
}

/// Expressions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Ident {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        name: String,
    },
    Literal {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        text: String,
    },
    Call {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        callee: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// `receiver.selector`
    DotQualified {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        receiver: Box<Expr>,
        selector: String,
    },
    Binary {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// Type test in expression form: `operand is T` / `operand !is T`
    Is {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        operand: Box<Expr>,
        type_ref: TypeRef,
        #[serde(default)]
        negated: bool,
    },
    If {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        #[serde(default)]
        else_branch: Option<Box<Expr>>,
    },
    When(WhenExpr),
    Block {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        #[serde(default)]
        statements: Vec<Stmt>,
    },
    Return {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        #[serde(default)]
        value: Option<Box<Expr>>,
    },
}

impl Expr {
    /// The node ID of this expression
    pub fn id(&self) -> NodeId {
        match self {
            Expr::Ident { id, .. }
            | Expr::Literal { id, .. }
            | Expr::Call { id, .. }
            | Expr::DotQualified { id, .. }
            | Expr::Binary { id, .. }
            | Expr::Unary { id, .. }
            | Expr::Is { id, .. }
            | Expr::If { id, .. }
            | Expr::Block { id, .. }
            | Expr::Return { id, .. } => *id,
            Expr::When(when) => when.id,
        }
    }

    /// The source range of this expression
    pub fn range(&self) -> TextRange {
        match self {
            Expr::Ident { range, .. }
            | Expr::Literal { range, .. }
            | Expr::Call { range, .. }
            | Expr::DotQualified { range, .. }
            | Expr::Binary { range, .. }
            | Expr::Unary { range, .. }
            | Expr::Is { range, .. }
            | Expr::If { range, .. }
            | Expr::Block { range, .. }
            | Expr::Return { range, .. } => *range,
            Expr::When(when) => when.range,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // Logical
    And,
    Or,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Neg,
    Not,
}

/// A reference to a type as written in source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub id: NodeId,
    pub range: TextRange,
    /// Source text of the reference, e.g. `Shape.Circle` or `List<*>`
    pub text: String,
}

/// `when` expression, with or without a subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhenExpr {
    #[serde(default)]
    pub id: NodeId,
    pub range: TextRange,
    /// `when (subject) { ... }`; `None` for the boolean form `when { ... }`
    #[serde(default)]
    pub subject: Option<Box<Expr>>,
    #[serde(default)]
    pub entries: Vec<WhenEntry>,
}

/// One arm of a `when` expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhenEntry {
    #[serde(default)]
    pub id: NodeId,
    pub range: TextRange,
    /// Empty for the `else` arm
    #[serde(default)]
    pub conditions: Vec<WhenCondition>,
    pub body: Expr,
}

/// A single condition of a `when` arm
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WhenCondition {
    /// Plain expression condition (`RED ->`, `a is Square ->`)
    Expression {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        expr: Expr,
    },
    /// Type test in pattern form: `is T ->` / `!is T ->`
    IsPattern {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        type_ref: TypeRef,
        #[serde(default)]
        negated: bool,
    },
    /// Range test: `in lo..hi ->` / `!in xs ->`
    InRange {
        #[serde(default)]
        id: NodeId,
        range: TextRange,
        expr: Expr,
        #[serde(default)]
        negated: bool,
    },
}
