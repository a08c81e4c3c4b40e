//! # namelint
//!
//! Rule-based naming-convention checker for Python syntax trees.
//!
//! A host linter parses source into the [`ast`] node model (or ships it
//! over as JSON), then runs the registered rules over the tree:
//!
//! - [`Rule`] is the per-node-kind handler contract
//! - [`registered_rules`] is the static registry of shipped rules
//! - [`Checker`] drives the traversal and yields [`Diagnostic`]s lazily
//!
//! The shipped rules cover PEP 8 naming: class, function, argument and
//! local-variable names, plus convention-changing import aliases.
//!
//! ## Example
//!
//! ```
//! use namelint::{Checker, Options};
//! use namelint_ast::{Arguments, FunctionDef, Module, Pass, Position, Stmt};
//!
//! let tree = Module::new(vec![Stmt::from(FunctionDef::new(
//!     "badName",
//!     Arguments::new(),
//!     vec![Stmt::Pass(Pass::new(Position::new(2, 4)))],
//!     Position::new(1, 0),
//! ))]);
//!
//! let checker = Checker::new(Some(&tree), "example.py", Options::default());
//! for diagnostic in checker.run() {
//!     println!("{}: {diagnostic}", checker.filename());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod annotate;
mod checker;
mod diagnostic;
mod options;
mod registry;
mod rule;

pub mod rules;

pub use annotate::{Annotations, FunctionRole};
pub use checker::{Checker, Diagnostics};
pub use diagnostic::{Code, Diagnostic, Severity};
pub use options::Options;
pub use registry::registered_rules;
pub use rule::{CheckContext, Rule, RuleBox};

/// Re-export of the node model for consumers that build trees.
pub use namelint_ast as ast;
