//! Rule: function names are lowercase.
//!
//! # Rationale
//!
//! Function names should be lowercase, with words separated by underscores
//! as necessary to improve readability. Double leading and trailing
//! underscores are reserved for magic methods, so plain functions must not
//! use them.

use crate::annotate::FunctionRole;
use crate::diagnostic::{Code, Diagnostic};
use crate::rule::{CheckContext, Rule};
use crate::rules::patterns;
use namelint_ast::{FunctionDef, NodeRef};

/// Code for function names not being lowercase.
pub const E801: Code = Code::new("E801", "function name should be lowercase");

/// Rule name for function-names.
pub const NAME: &str = "function-names";

/// Checks that function names are lowercase and that only methods use
/// dunder names.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionNames;

impl FunctionNames {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FunctionNames {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Function names should be lowercase"
    }

    fn check_function_def(
        &self,
        node: &FunctionDef,
        ctx: &CheckContext<'_, '_>,
    ) -> Vec<Diagnostic> {
        let name = node.name.as_str();
        let dunder = name.starts_with("__") || name.ends_with("__");
        let plain_function = ctx.role(node) == FunctionRole::Function;
        if (plain_function && dunder) || !patterns::is_lowercase(name) {
            vec![self.err(NodeRef::from(node), E801)]
        } else {
            Vec::new()
        }
    }
}
