//! Rule: function arguments are lowercase, and bound methods name their
//! first argument conventionally.
//!
//! # Rationale
//!
//! The argument names of a function should be lowercase, with words
//! separated by underscores. A classmethod should have `cls` as first
//! argument; a method should have `self`.

use crate::annotate::FunctionRole;
use crate::diagnostic::{Code, Diagnostic};
use crate::rule::{CheckContext, Rule};
use crate::rules::patterns;
use namelint_ast::{FunctionDef, NodeRef};

/// Code for argument names not being lowercase.
pub const E802: Code = Code::new("E802", "argument name should be lowercase");

/// Code for a classmethod whose first argument is not `cls`.
pub const E803: Code = Code::new("E803", "first argument of a classmethod should be named 'cls'");

/// Code for a method whose first argument is not `self`.
pub const E804: Code = Code::new("E804", "first argument of a method should be named 'self'");

/// Rule name for argument-names.
pub const NAME: &str = "argument-names";

/// Checks argument naming, including the `self`/`cls` conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentNames;

impl ArgumentNames {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ArgumentNames {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Argument names should be lowercase; methods take self, classmethods take cls"
    }

    fn check_function_def(
        &self,
        node: &FunctionDef,
        ctx: &CheckContext<'_, '_>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        // A bad **kwargs or *args name ends the check for this definition.
        if let Some(kwarg) = &node.args.kwarg {
            if !patterns::is_lowercase(&kwarg.name) {
                diagnostics.push(self.err(NodeRef::from(node), E802));
                return diagnostics;
            }
        }
        if let Some(vararg) = &node.args.vararg {
            if !patterns::is_lowercase(&vararg.name) {
                diagnostics.push(self.err(NodeRef::from(node), E802));
                return diagnostics;
            }
        }

        let arg_names: Vec<&str> = node
            .args
            .args
            .iter()
            .chain(&node.args.kwonlyargs)
            .map(|arg| arg.name.as_str())
            .collect();
        let Some(first) = arg_names.first() else {
            return diagnostics;
        };

        match ctx.role(node) {
            FunctionRole::Method if *first != "self" => {
                diagnostics.push(self.err(NodeRef::from(node), E804));
            }
            FunctionRole::ClassMethod if *first != "cls" => {
                diagnostics.push(self.err(NodeRef::from(node), E803));
            }
            _ => {}
        }

        for name in &arg_names {
            if !patterns::is_lowercase(name) {
                diagnostics.push(self.err(NodeRef::from(node), E802));
                break;
            }
        }
        diagnostics
    }
}
