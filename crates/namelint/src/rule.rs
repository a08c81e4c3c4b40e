//! The rule contract: per-kind handlers dispatched by the traversal engine.

use crate::annotate::{Annotations, FunctionRole};
use crate::diagnostic::{Code, Diagnostic};
use crate::options::Options;
use namelint_ast::{
    Assign, Attribute, Call, ClassDef, Constant, ExprStmt, For, FunctionDef, Global, If, Import,
    ImportFrom, Module, Name, NodeRef, Pass, Return, Tuple, While,
};

/// Context handed to every handler invocation.
///
/// Rules read it; only the engine builds it during traversal. All fields
/// are public so tests can drive a handler directly.
pub struct CheckContext<'w, 't> {
    /// Ancestors of the current node, root first, current node excluded.
    pub ancestors: &'w [NodeRef<'t>],
    /// Facts derived by the annotation pre-passes.
    pub annotations: &'w Annotations,
    /// Name of the file under check, for logging.
    pub filename: &'w str,
    /// Host-provided options.
    pub options: &'w Options,
}

impl CheckContext<'_, '_> {
    /// Role of `func` as derived by the annotation pre-pass.
    #[must_use]
    pub fn role(&self, func: &FunctionDef) -> FunctionRole {
        self.annotations.role_of(func)
    }

    /// True if `func`'s own body declares `name` as `global`.
    #[must_use]
    pub fn declares_global(&self, func: &FunctionDef, name: &str) -> bool {
        self.annotations.declares_global(func, name)
    }
}

/// A naming-convention rule.
///
/// A rule overrides the handlers for the node kinds it cares about; the
/// engine calls the handler matching each visited node's kind, in rule
/// registration order. Default handlers report nothing.
///
/// # Example
///
/// ```ignore
/// use namelint::{CheckContext, Code, Diagnostic, Rule};
/// use namelint_ast::ClassDef;
///
/// const CODE: Code = Code::new("X100", "class names should be short");
///
/// pub struct ShortClassNames;
///
/// impl Rule for ShortClassNames {
///     fn name(&self) -> &'static str { "short-class-names" }
///
///     fn check_class_def(&self, node: &ClassDef, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
///         if node.name.len() > 40 {
///             vec![self.err(node.into(), CODE)]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "class-names").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Builds a diagnostic at `node` carrying this rule's identity.
    fn err(&self, node: NodeRef<'_>, code: Code) -> Diagnostic {
        Diagnostic::positioned(node, code, self.name())
    }

    /// Handles the module root.
    fn check_module(&self, _node: &Module, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a function definition.
    fn check_function_def(
        &self,
        _node: &FunctionDef,
        _ctx: &CheckContext<'_, '_>,
    ) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a class definition.
    fn check_class_def(&self, _node: &ClassDef, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a `return` statement.
    fn check_return(&self, _node: &Return, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles an assignment statement.
    fn check_assign(&self, _node: &Assign, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a `for` loop.
    fn check_for(&self, _node: &For, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a `while` loop.
    fn check_while(&self, _node: &While, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles an `if` statement.
    fn check_if(&self, _node: &If, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a `global` declaration.
    fn check_global(&self, _node: &Global, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles an expression statement.
    fn check_expr_stmt(&self, _node: &ExprStmt, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a `pass` statement.
    fn check_pass(&self, _node: &Pass, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles an `import` statement.
    fn check_import(&self, _node: &Import, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a `from ... import ...` statement.
    fn check_import_from(
        &self,
        _node: &ImportFrom,
        _ctx: &CheckContext<'_, '_>,
    ) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a name expression.
    fn check_name(&self, _node: &Name, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles an attribute access.
    fn check_attribute(&self, _node: &Attribute, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a call expression.
    fn check_call(&self, _node: &Call, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a constant expression.
    fn check_constant(&self, _node: &Constant, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Handles a tuple display.
    fn check_tuple(&self, _node: &Tuple, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use namelint_ast::Position;

    const CODE: Code = Code::new("T100", "test finding");

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check_class_def(&self, node: &ClassDef, _ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
            vec![self.err(NodeRef::from(node), CODE)]
        }
    }

    #[test]
    fn err_carries_rule_identity() {
        let class = ClassDef::new("C", vec![], Position::new(1, 0));
        let annotations = Annotations::new();
        let options = Options::new();
        let ctx = CheckContext {
            ancestors: &[],
            annotations: &annotations,
            filename: "test.py",
            options: &options,
        };

        let rule = TestRule;
        let diagnostics = rule.check_class_def(&class, &ctx);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "test-rule");
        assert_eq!(diagnostics[0].code, "T100");
    }

    #[test]
    fn default_handlers_report_nothing() {
        let rule = TestRule;
        let annotations = Annotations::new();
        let options = Options::new();
        let ctx = CheckContext {
            ancestors: &[],
            annotations: &annotations,
            filename: "test.py",
            options: &options,
        };

        let module = Module::new(vec![]);
        assert!(rule.check_module(&module, &ctx).is_empty());

        let pass = Pass::new(Position::new(1, 0));
        assert!(rule.check_pass(&pass, &ctx).is_empty());
    }
}
