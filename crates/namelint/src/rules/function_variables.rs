//! Rule: local variables in functions are lowercase.
//!
//! # Rationale
//!
//! Constants live at module scope; a name assigned inside a function is a
//! local variable and should be lowercase. Names the function declares
//! `global` are module state, not locals, and are left alone.

use crate::diagnostic::{Code, Diagnostic};
use crate::rule::{CheckContext, Rule};
use crate::rules::patterns;
use namelint_ast::{Assign, Expr, NodeRef};

/// Code for uppercase variables assigned in a function.
pub const E805: Code = Code::new("E805", "variable in function should be lowercase");

/// Rule name for function-variables.
pub const NAME: &str = "function-variables";

/// Checks that names assigned inside functions are lowercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionVariables;

impl FunctionVariables {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for FunctionVariables {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Variables assigned in functions should be lowercase"
    }

    fn check_assign(&self, node: &Assign, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        // Walk outward to the nearest enclosing definition. A class body
        // reached first means this is an attribute, not a local.
        let mut enclosing = None;
        for ancestor in ctx.ancestors.iter().rev() {
            match ancestor {
                NodeRef::ClassDef(_) => return Vec::new(),
                NodeRef::FunctionDef(func) => {
                    enclosing = Some(*func);
                    break;
                }
                _ => {}
            }
        }
        let Some(func) = enclosing else {
            return Vec::new();
        };

        let mut diagnostics = Vec::new();
        for target in &node.targets {
            // Unpacking targets and globals end the check for the whole
            // statement.
            let Expr::Name(name) = target else {
                return diagnostics;
            };
            if ctx.declares_global(func, &name.id) {
                return diagnostics;
            }
            if !patterns::is_lowercase(&name.id) && !name.id.starts_with('_') {
                diagnostics.push(self.err(NodeRef::from(name), E805));
            }
        }
        diagnostics
    }
}
