//! Traversal engine: walks the tree and dispatches nodes to the rules.

use crate::annotate::Annotations;
use crate::diagnostic::Diagnostic;
use crate::options::Options;
use crate::registry;
use crate::rule::{CheckContext, Rule, RuleBox};
use namelint_ast::{Module, NodeRef};
use std::collections::VecDeque;
use tracing::debug;

/// One naming-convention check over one tree.
///
/// The checker does not own the tree; an absent tree means the front-end
/// failed to parse the file, and the check reports nothing.
///
/// # Example
///
/// ```
/// use namelint::{Checker, Options};
/// use namelint_ast::{ClassDef, Module, Pass, Position, Stmt};
///
/// let tree = Module::new(vec![Stmt::from(ClassDef::new(
///     "http_server",
///     vec![Stmt::Pass(Pass::new(Position::new(2, 4)))],
///     Position::new(1, 0),
/// ))]);
///
/// let checker = Checker::new(Some(&tree), "server.py", Options::default());
/// let diagnostics: Vec<_> = checker.run().collect();
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].code, "E800");
/// ```
pub struct Checker<'t> {
    tree: Option<&'t Module>,
    filename: String,
    options: Options,
}

impl<'t> Checker<'t> {
    /// Creates a checker for one file.
    #[must_use]
    pub fn new(tree: Option<&'t Module>, filename: impl Into<String>, options: Options) -> Self {
        Self {
            tree,
            filename: filename.into(),
            options,
        }
    }

    /// The filename diagnostics are reported under.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Runs the registered rules over the tree.
    ///
    /// The returned stream is lazy: nothing is visited until it is
    /// iterated, and dropping it cancels the rest of the walk.
    #[must_use = "the stream is lazy; nothing is checked until iterated"]
    pub fn run(&self) -> Diagnostics<'t> {
        self.run_with_rules(registry::registered_rules())
    }

    /// Runs an explicit rule slice, for tests and embedders with their
    /// own rule sets.
    pub(crate) fn run_with_rules(&self, rules: &'t [RuleBox]) -> Diagnostics<'t> {
        let mut stack = Vec::new();
        match self.tree {
            Some(module) => {
                debug!("checking {} with {} rules", self.filename, rules.len());
                stack.push(Step::Enter(NodeRef::from(module)));
            }
            None => debug!("no tree for {}, reporting nothing", self.filename),
        }
        Diagnostics {
            rules,
            filename: self.filename.clone(),
            options: self.options.clone(),
            annotations: Annotations::new(),
            ancestors: Vec::new(),
            stack,
            pending: VecDeque::new(),
        }
    }
}

/// One unit of traversal work.
enum Step<'t> {
    /// Visit this node, then schedule its children.
    Enter(NodeRef<'t>),
    /// The children of the ancestor on top are done; pop it.
    Leave,
}

/// Lazy stream of diagnostics in visit order.
///
/// Nodes are visited pre-order; within one node, diagnostics follow rule
/// registration order.
pub struct Diagnostics<'t> {
    rules: &'t [RuleBox],
    filename: String,
    options: Options,
    annotations: Annotations,
    ancestors: Vec<NodeRef<'t>>,
    stack: Vec<Step<'t>>,
    pending: VecDeque<Diagnostic>,
}

impl<'t> Diagnostics<'t> {
    /// Visits `node`: runs the pre-passes, dispatches every rule, and
    /// schedules the children.
    fn enter(&mut self, node: NodeRef<'t>) {
        match node {
            NodeRef::ClassDef(class) => self.annotations.tag_class_functions(class),
            NodeRef::FunctionDef(func) => self.annotations.record_global_names(func),
            _ => {}
        }

        let ctx = CheckContext {
            ancestors: &self.ancestors,
            annotations: &self.annotations,
            filename: &self.filename,
            options: &self.options,
        };
        for rule in self.rules {
            self.pending.extend(dispatch(rule.as_ref(), node, &ctx));
        }

        self.stack.push(Step::Leave);
        let mut children = node.children();
        children.reverse();
        self.stack.extend(children.into_iter().map(Step::Enter));
        self.ancestors.push(node);
    }
}

impl Iterator for Diagnostics<'_> {
    type Item = Diagnostic;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(diagnostic) = self.pending.pop_front() {
                return Some(diagnostic);
            }
            match self.stack.pop()? {
                Step::Enter(node) => self.enter(node),
                Step::Leave => {
                    self.ancestors.pop();
                }
            }
        }
    }
}

/// Calls the handler matching the node's kind.
fn dispatch(rule: &dyn Rule, node: NodeRef<'_>, ctx: &CheckContext<'_, '_>) -> Vec<Diagnostic> {
    match node {
        NodeRef::Module(n) => rule.check_module(n, ctx),
        NodeRef::FunctionDef(n) => rule.check_function_def(n, ctx),
        NodeRef::ClassDef(n) => rule.check_class_def(n, ctx),
        NodeRef::Return(n) => rule.check_return(n, ctx),
        NodeRef::Assign(n) => rule.check_assign(n, ctx),
        NodeRef::For(n) => rule.check_for(n, ctx),
        NodeRef::While(n) => rule.check_while(n, ctx),
        NodeRef::If(n) => rule.check_if(n, ctx),
        NodeRef::Global(n) => rule.check_global(n, ctx),
        NodeRef::ExprStmt(n) => rule.check_expr_stmt(n, ctx),
        NodeRef::Pass(n) => rule.check_pass(n, ctx),
        NodeRef::Import(n) => rule.check_import(n, ctx),
        NodeRef::ImportFrom(n) => rule.check_import_from(n, ctx),
        NodeRef::Name(n) => rule.check_name(n, ctx),
        NodeRef::Attribute(n) => rule.check_attribute(n, ctx),
        NodeRef::Call(n) => rule.check_call(n, ctx),
        NodeRef::Constant(n) => rule.check_constant(n, ctx),
        NodeRef::Tuple(n) => rule.check_tuple(n, ctx),
    }
}
