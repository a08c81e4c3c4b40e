//! # namelint-ast
//!
//! Owned node model for the Python-like syntax trees that `namelint`
//! checks.
//!
//! The model is deliberately small: it covers the statement and expression
//! kinds the naming rules inspect, plus the plumbing the traversal engine
//! needs:
//!
//! - [`Module`], [`Stmt`], [`Expr`] and their payload structs
//! - [`NodeRef`] for borrowed, kind-agnostic traversal
//! - [`NodeKey`] for keying derived facts in side tables
//! - [`Module::from_json`] / [`Module::to_json`] for the front-end boundary
//!
//! ## Example
//!
//! ```
//! use namelint_ast::{Arguments, FunctionDef, Module, Position, Stmt};
//!
//! let module = Module::new(vec![Stmt::from(FunctionDef::new(
//!     "handler",
//!     Arguments::positional(["event"]),
//!     vec![Stmt::Pass(namelint_ast::Pass::new(Position::new(2, 4)))],
//!     Position::new(1, 0),
//! ))]);
//! assert_eq!(module.body.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json;
mod node_ref;
mod nodes;

pub use json::TreeError;
pub use node_ref::{NodeKey, NodeRef};
pub use nodes::{
    Alias, Arg, Arguments, Assign, Attribute, Call, ClassDef, Constant, Expr, ExprStmt, For,
    FunctionDef, Global, If, Import, ImportFrom, Literal, Module, Name, Pass, Position, Return,
    Stmt, Tuple, While,
};
