//! Borrowed node references for uniform traversal.
//!
//! [`NodeRef`] lets the traversal engine and the rules handle every node
//! kind through one type without consuming or mutating the tree.

use crate::nodes::{
    Assign, Attribute, Call, ClassDef, Constant, Expr, ExprStmt, For, FunctionDef, Global, If,
    Import, ImportFrom, Module, Name, Pass, Position, Return, Stmt, Tuple, While,
};

/// A borrowed reference to any node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// Reference to a [`Module`].
    Module(&'a Module),
    /// Reference to a [`FunctionDef`].
    FunctionDef(&'a FunctionDef),
    /// Reference to a [`ClassDef`].
    ClassDef(&'a ClassDef),
    /// Reference to a [`Return`].
    Return(&'a Return),
    /// Reference to an [`Assign`].
    Assign(&'a Assign),
    /// Reference to a [`For`].
    For(&'a For),
    /// Reference to a [`While`].
    While(&'a While),
    /// Reference to an [`If`].
    If(&'a If),
    /// Reference to a [`Global`].
    Global(&'a Global),
    /// Reference to an [`ExprStmt`].
    ExprStmt(&'a ExprStmt),
    /// Reference to a [`Pass`].
    Pass(&'a Pass),
    /// Reference to an [`Import`].
    Import(&'a Import),
    /// Reference to an [`ImportFrom`].
    ImportFrom(&'a ImportFrom),
    /// Reference to a [`Name`].
    Name(&'a Name),
    /// Reference to an [`Attribute`].
    Attribute(&'a Attribute),
    /// Reference to a [`Call`].
    Call(&'a Call),
    /// Reference to a [`Constant`].
    Constant(&'a Constant),
    /// Reference to a [`Tuple`].
    Tuple(&'a Tuple),
}

impl<'a> NodeRef<'a> {
    /// The node-kind name, for logging and debugging.
    #[must_use]
    pub fn kind_name(self) -> &'static str {
        match self {
            Self::Module(_) => "Module",
            Self::FunctionDef(_) => "FunctionDef",
            Self::ClassDef(_) => "ClassDef",
            Self::Return(_) => "Return",
            Self::Assign(_) => "Assign",
            Self::For(_) => "For",
            Self::While(_) => "While",
            Self::If(_) => "If",
            Self::Global(_) => "Global",
            Self::ExprStmt(_) => "Expr",
            Self::Pass(_) => "Pass",
            Self::Import(_) => "Import",
            Self::ImportFrom(_) => "ImportFrom",
            Self::Name(_) => "Name",
            Self::Attribute(_) => "Attribute",
            Self::Call(_) => "Call",
            Self::Constant(_) => "Constant",
            Self::Tuple(_) => "Tuple",
        }
    }

    /// Source position of the node, absent only for the module root.
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Module(_) => None,
            Self::FunctionDef(node) => Some(node.pos),
            Self::ClassDef(node) => Some(node.pos),
            Self::Return(node) => Some(node.pos),
            Self::Assign(node) => Some(node.pos),
            Self::For(node) => Some(node.pos),
            Self::While(node) => Some(node.pos),
            Self::If(node) => Some(node.pos),
            Self::Global(node) => Some(node.pos),
            Self::ExprStmt(node) => Some(node.pos),
            Self::Pass(node) => Some(node.pos),
            Self::Import(node) => Some(node.pos),
            Self::ImportFrom(node) => Some(node.pos),
            Self::Name(node) => Some(node.pos),
            Self::Attribute(node) => Some(node.pos),
            Self::Call(node) => Some(node.pos),
            Self::Constant(node) => Some(node.pos),
            Self::Tuple(node) => Some(node.pos),
        }
    }

    /// Child nodes in field declaration order.
    ///
    /// Statement lists keep source order; a node with no node-valued
    /// fields yields an empty vector.
    #[must_use]
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            Self::Module(node) => node.body.iter().map(NodeRef::from).collect(),
            Self::FunctionDef(node) => node
                .body
                .iter()
                .map(NodeRef::from)
                .chain(node.decorator_list.iter().map(NodeRef::from))
                .collect(),
            Self::ClassDef(node) => node
                .bases
                .iter()
                .map(NodeRef::from)
                .chain(node.body.iter().map(NodeRef::from))
                .chain(node.decorator_list.iter().map(NodeRef::from))
                .collect(),
            Self::Return(node) => node.value.iter().map(NodeRef::from).collect(),
            Self::Assign(node) => node
                .targets
                .iter()
                .map(NodeRef::from)
                .chain(std::iter::once(NodeRef::from(&node.value)))
                .collect(),
            Self::For(node) => [&node.target, &node.iter]
                .into_iter()
                .map(NodeRef::from)
                .chain(node.body.iter().map(NodeRef::from))
                .chain(node.orelse.iter().map(NodeRef::from))
                .collect(),
            Self::While(node) => std::iter::once(NodeRef::from(&node.test))
                .chain(node.body.iter().map(NodeRef::from))
                .chain(node.orelse.iter().map(NodeRef::from))
                .collect(),
            Self::If(node) => std::iter::once(NodeRef::from(&node.test))
                .chain(node.body.iter().map(NodeRef::from))
                .chain(node.orelse.iter().map(NodeRef::from))
                .collect(),
            Self::ExprStmt(node) => vec![NodeRef::from(&node.value)],
            Self::Attribute(node) => vec![NodeRef::from(node.value.as_ref())],
            Self::Call(node) => std::iter::once(NodeRef::from(node.func.as_ref()))
                .chain(node.args.iter().map(NodeRef::from))
                .collect(),
            Self::Tuple(node) => node.elts.iter().map(NodeRef::from).collect(),
            Self::Global(_)
            | Self::Pass(_)
            | Self::Import(_)
            | Self::ImportFrom(_)
            | Self::Name(_)
            | Self::Constant(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Module> for NodeRef<'a> {
    fn from(node: &'a Module) -> Self {
        Self::Module(node)
    }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        match stmt {
            Stmt::FunctionDef(node) => Self::FunctionDef(node),
            Stmt::ClassDef(node) => Self::ClassDef(node),
            Stmt::Return(node) => Self::Return(node),
            Stmt::Assign(node) => Self::Assign(node),
            Stmt::For(node) => Self::For(node),
            Stmt::While(node) => Self::While(node),
            Stmt::If(node) => Self::If(node),
            Stmt::Global(node) => Self::Global(node),
            Stmt::Expr(node) => Self::ExprStmt(node),
            Stmt::Pass(node) => Self::Pass(node),
            Stmt::Import(node) => Self::Import(node),
            Stmt::ImportFrom(node) => Self::ImportFrom(node),
        }
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Name(node) => Self::Name(node),
            Expr::Attribute(node) => Self::Attribute(node),
            Expr::Call(node) => Self::Call(node),
            Expr::Constant(node) => Self::Constant(node),
            Expr::Tuple(node) => Self::Tuple(node),
        }
    }
}

macro_rules! impl_node_ref_from {
    ($($node:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $node> for NodeRef<'a> {
                fn from(node: &'a $node) -> Self {
                    Self::$node(node)
                }
            }
        )*
    };
}

impl_node_ref_from!(
    FunctionDef,
    ClassDef,
    Return,
    Assign,
    For,
    While,
    If,
    Global,
    ExprStmt,
    Pass,
    Import,
    ImportFrom,
    Name,
    Attribute,
    Call,
    Constant,
    Tuple,
);

/// Identity of a node, usable as a key in side tables.
///
/// Derived from the node's address, so it is stable exactly as long as the
/// tree is alive and unmoved. Always key the same concrete node struct,
/// never the enum wrapping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey(usize);

impl NodeKey {
    /// Keys the given node.
    #[must_use]
    pub fn of<T>(node: &T) -> Self {
        Self(std::ptr::from_ref(node) as usize)
    }
}
