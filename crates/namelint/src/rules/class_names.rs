//! Rule: class names use the CapWords convention.
//!
//! # Rationale
//!
//! Almost without exception, class names use the CapWords convention.
//! Classes for internal use have a leading underscore in addition.

use crate::diagnostic::{Code, Diagnostic};
use crate::rule::{CheckContext, Rule};
use crate::rules::patterns;
use namelint_ast::{ClassDef, NodeRef};

/// Code for class names not following CapWords.
pub const E800: Code = Code::new("E800", "class names should use CapWords convention");

/// Rule name for class-names.
pub const NAME: &str = "class-names";

/// Checks that class names use CapWords.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNames;

impl ClassNames {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ClassNames {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Class names should use the CapWords convention"
    }

    fn check_class_def(&self, node: &ClassDef, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        if patterns::is_mixed_case(&node.name) {
            Vec::new()
        } else {
            vec![self.err(NodeRef::from(node), E800)]
        }
    }
}
