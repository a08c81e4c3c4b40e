//! Pre-passes that derive facts the rules need: function roles and
//! `global` declarations.
//!
//! Derived facts live in a side table keyed by [`NodeKey`], so the tree
//! itself stays immutable and shareable.

use namelint_ast::{ClassDef, Expr, FunctionDef, NodeKey, NodeRef, Stmt};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Classification of a function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionRole {
    /// Defined outside any class body.
    Function,
    /// Defined in a class body without a role decorator.
    Method,
    /// Decorated with (or reassigned through) `classmethod`.
    ClassMethod,
    /// Decorated with (or reassigned through) `staticmethod`.
    StaticMethod,
}

impl FunctionRole {
    /// The role name as Python spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::ClassMethod => "classmethod",
            Self::StaticMethod => "staticmethod",
        }
    }
}

impl std::fmt::Display for FunctionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps `classmethod` / `staticmethod` to the role it confers.
fn wrapper_role(name: &str) -> Option<FunctionRole> {
    match name {
        "classmethod" => Some(FunctionRole::ClassMethod),
        "staticmethod" => Some(FunctionRole::StaticMethod),
        _ => None,
    }
}

/// Role conferred by a decorator expression, if any.
fn decorator_role(decorator: &Expr) -> Option<FunctionRole> {
    match decorator {
        Expr::Name(name) => wrapper_role(&name.id),
        _ => None,
    }
}

/// Side table of facts derived ahead of rule dispatch.
#[derive(Debug, Default)]
pub struct Annotations {
    roles: HashMap<NodeKey, FunctionRole>,
    globals: HashMap<NodeKey, HashSet<String>>,
}

impl Annotations {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a role to every function defined directly in `class`'s body.
    ///
    /// Besides decorators, this honors the pre-decorator idiom of
    /// reassigning through the wrapper:
    ///
    /// ```text
    /// class C:
    ///     def method(cls): ...
    ///     method = classmethod(method)
    /// ```
    ///
    /// A reassignment wins over a decorator; among decorators the first
    /// role-conferring one wins; everything else defaults to `Method`.
    pub fn tag_class_functions(&mut self, class: &ClassDef) {
        let mut late_decoration: HashMap<&str, FunctionRole> = HashMap::new();
        for stmt in &class.body {
            let Stmt::Assign(assign) = stmt else { continue };
            let Expr::Call(call) = &assign.value else {
                continue;
            };
            let Expr::Name(wrapper) = call.func.as_ref() else {
                continue;
            };
            let Some(role) = wrapper_role(&wrapper.id) else {
                continue;
            };
            if let [Expr::Name(wrapped)] = call.args.as_slice() {
                late_decoration.insert(wrapped.id.as_str(), role);
            }
        }

        for stmt in &class.body {
            let Stmt::FunctionDef(func) = stmt else {
                continue;
            };
            let role = late_decoration
                .get(func.name.as_str())
                .copied()
                .or_else(|| func.decorator_list.iter().find_map(decorator_role))
                .unwrap_or(FunctionRole::Method);
            self.roles.insert(NodeKey::of(func), role);
        }
    }

    /// Records every name declared `global` in `func`'s own body.
    ///
    /// The walk descends through compound statements but stops at nested
    /// function and class definitions, whose `global` declarations belong
    /// to their own scope.
    pub fn record_global_names(&mut self, func: &FunctionDef) {
        let mut names = HashSet::new();
        let mut worklist: Vec<NodeRef<'_>> = NodeRef::from(func).children();
        while let Some(node) = worklist.pop() {
            if let NodeRef::Global(global) = node {
                names.extend(global.names.iter().cloned());
            }
            if !matches!(node, NodeRef::FunctionDef(_) | NodeRef::ClassDef(_)) {
                worklist.extend(node.children());
            }
        }
        self.globals.insert(NodeKey::of(func), names);
    }

    /// Role recorded for `func`.
    ///
    /// Functions never seen by [`Self::tag_class_functions`] are plain
    /// functions.
    #[must_use]
    pub fn role_of(&self, func: &FunctionDef) -> FunctionRole {
        self.roles
            .get(&NodeKey::of(func))
            .copied()
            .unwrap_or(FunctionRole::Function)
    }

    /// The `global` name set recorded for `func`, if the pre-pass ran.
    #[must_use]
    pub fn global_names_of(&self, func: &FunctionDef) -> Option<&HashSet<String>> {
        self.globals.get(&NodeKey::of(func))
    }

    /// True if `name` was declared `global` anywhere in `func`'s own body.
    #[must_use]
    pub fn declares_global(&self, func: &FunctionDef, name: &str) -> bool {
        self.global_names_of(func)
            .is_some_and(|names| names.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namelint_ast::{Arguments, Assign, Call, Global, If, Literal, Pass, Position};

    fn pos(line: usize) -> Position {
        Position::new(line, 0)
    }

    fn function(name: &str, body: Vec<Stmt>) -> FunctionDef {
        FunctionDef::new(name, Arguments::new(), body, pos(1))
    }

    fn wrap_assign(target: &str, wrapper: &str, wrapped: Expr) -> Stmt {
        Stmt::from(Assign::new(
            vec![Expr::name(target, pos(3))],
            Expr::Call(Call::new(Expr::name(wrapper, pos(3)), vec![wrapped], pos(3))),
            pos(3),
        ))
    }

    // --- role tagging ---

    #[test]
    fn undecorated_class_function_is_a_method() {
        let class = ClassDef::new(
            "C",
            vec![Stmt::from(function("m", vec![Stmt::from(Pass::new(pos(2)))]))],
            pos(1),
        );
        let Stmt::FunctionDef(func) = &class.body[0] else {
            unreachable!()
        };

        let mut annotations = Annotations::new();
        annotations.tag_class_functions(&class);
        assert_eq!(annotations.role_of(func), FunctionRole::Method);
    }

    #[test]
    fn decorator_confers_role() {
        let decorated =
            function("m", vec![Stmt::from(Pass::new(pos(2)))]).with_decorators(vec![
                Expr::name("cached", pos(1)),
                Expr::name("staticmethod", pos(1)),
            ]);
        let class = ClassDef::new("C", vec![Stmt::from(decorated)], pos(1));
        let Stmt::FunctionDef(func) = &class.body[0] else {
            unreachable!()
        };

        let mut annotations = Annotations::new();
        annotations.tag_class_functions(&class);
        assert_eq!(annotations.role_of(func), FunctionRole::StaticMethod);
    }

    #[test]
    fn reassignment_through_wrapper_confers_role() {
        let class = ClassDef::new(
            "C",
            vec![
                Stmt::from(function("m", vec![Stmt::from(Pass::new(pos(2)))])),
                wrap_assign("m", "classmethod", Expr::name("m", pos(3))),
            ],
            pos(1),
        );
        let Stmt::FunctionDef(func) = &class.body[0] else {
            unreachable!()
        };

        let mut annotations = Annotations::new();
        annotations.tag_class_functions(&class);
        assert_eq!(annotations.role_of(func), FunctionRole::ClassMethod);
    }

    #[test]
    fn reassignment_wins_over_decorator() {
        let decorated = function("m", vec![Stmt::from(Pass::new(pos(2)))])
            .with_decorators(vec![Expr::name("classmethod", pos(1))]);
        let class = ClassDef::new(
            "C",
            vec![
                Stmt::from(decorated),
                wrap_assign("m", "staticmethod", Expr::name("m", pos(3))),
            ],
            pos(1),
        );
        let Stmt::FunctionDef(func) = &class.body[0] else {
            unreachable!()
        };

        let mut annotations = Annotations::new();
        annotations.tag_class_functions(&class);
        assert_eq!(annotations.role_of(func), FunctionRole::StaticMethod);
    }

    #[test]
    fn wrapper_call_must_wrap_exactly_one_name() {
        let class = ClassDef::new(
            "C",
            vec![
                Stmt::from(function("m", vec![Stmt::from(Pass::new(pos(2)))])),
                // Wraps a constant, not a name: no role.
                wrap_assign(
                    "m",
                    "staticmethod",
                    Expr::constant(Literal::Int(1), pos(3)),
                ),
            ],
            pos(1),
        );
        let Stmt::FunctionDef(func) = &class.body[0] else {
            unreachable!()
        };

        let mut annotations = Annotations::new();
        annotations.tag_class_functions(&class);
        assert_eq!(annotations.role_of(func), FunctionRole::Method);
    }

    #[test]
    fn untagged_function_defaults_to_function() {
        let func = function("free", vec![Stmt::from(Pass::new(pos(2)))]);
        let annotations = Annotations::new();
        assert_eq!(annotations.role_of(&func), FunctionRole::Function);
    }

    // --- global declarations ---

    #[test]
    fn records_globals_in_nested_branches() {
        let func = function(
            "f",
            vec![Stmt::from(If::new(
                Expr::name("flag", pos(2)),
                vec![Stmt::from(Global::new(["counter", "total"], pos(3)))],
                pos(2),
            ))],
        );

        let mut annotations = Annotations::new();
        annotations.record_global_names(&func);
        assert!(annotations.declares_global(&func, "counter"));
        assert!(annotations.declares_global(&func, "total"));
        assert!(!annotations.declares_global(&func, "other"));
    }

    #[test]
    fn globals_of_nested_definitions_are_excluded() {
        let inner = function("inner", vec![Stmt::from(Global::new(["hidden"], pos(3)))]);
        let outer = function("outer", vec![Stmt::from(inner)]);

        let mut annotations = Annotations::new();
        annotations.record_global_names(&outer);
        assert!(!annotations.declares_global(&outer, "hidden"));
        assert_eq!(
            annotations.global_names_of(&outer).map(HashSet::len),
            Some(0)
        );
    }

    #[test]
    fn unrecorded_function_has_no_global_set() {
        let func = function("f", vec![]);
        let annotations = Annotations::new();
        assert!(annotations.global_names_of(&func).is_none());
        assert!(!annotations.declares_global(&func, "x"));
    }
}
