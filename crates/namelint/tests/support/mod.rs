//! Shared builders for engine integration tests.

#![allow(dead_code)] // Each test file uses its own subset of these builders.

use namelint::{Checker, Diagnostic, Options};
use namelint_ast::{
    Alias, Arguments, Assign, ClassDef, Expr, FunctionDef, Global, ImportFrom, Literal, Module,
    Pass, Position, Stmt,
};

/// Runs the full registered rule set over `module`.
pub fn check(module: &Module) -> Vec<Diagnostic> {
    Checker::new(Some(module), "test.py", Options::default())
        .run()
        .collect()
}

/// The codes of `diagnostics`, in order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
    diagnostics.iter().map(|d| d.code).collect()
}

pub fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

pub fn function(name: &str, args: &[&str], body: Vec<Stmt>, pos: Position) -> Stmt {
    Stmt::from(FunctionDef::new(
        name,
        Arguments::positional(args.iter().copied()),
        body,
        pos,
    ))
}

pub fn class(name: &str, body: Vec<Stmt>, pos: Position) -> Stmt {
    Stmt::from(ClassDef::new(name, body, pos))
}

pub fn assign_name(name: &str, pos: Position) -> Stmt {
    Stmt::from(Assign::new(
        vec![Expr::name(name, pos)],
        Expr::constant(Literal::Int(0), pos),
        pos,
    ))
}

pub fn import_from(module: &str, name: &str, asname: Option<&str>, pos: Position) -> Stmt {
    let mut alias = Alias::new(name);
    if let Some(asname) = asname {
        alias = alias.with_asname(asname);
    }
    Stmt::from(ImportFrom::new(module, vec![alias], pos))
}

pub fn global_decl(names: &[&str], pos: Position) -> Stmt {
    Stmt::from(Global::new(names.iter().copied(), pos))
}

pub fn pass_stmt(pos: Position) -> Stmt {
    Stmt::from(Pass::new(pos))
}

/// A module exercising every shipped rule:
///
/// ```text
/// from os.path import join as JOIN     #  1  W801
/// @register                            #  2
/// class badClass:                      #  3  E800 at 4:6
///     def __init__(self):              #  4
///         pass                         #  5
///     def Method(this):                #  6  E801 and E804 at 6:8
///         BAD = 1                      #  7  E805 at 7:8
/// def ok():                            #  8
///     pass                             #  9
/// ```
pub fn sample_module() -> Module {
    let init = function(
        "__init__",
        &["self"],
        vec![pass_stmt(pos(5, 8))],
        pos(4, 4),
    );
    let method = function(
        "Method",
        &["this"],
        vec![assign_name("BAD", pos(7, 8))],
        pos(6, 4),
    );
    let bad_class = ClassDef::new("badClass", vec![init, method], pos(3, 0))
        .with_decorators(vec![Expr::name("register", pos(2, 1))]);

    Module::new(vec![
        import_from("os.path", "join", Some("JOIN"), pos(1, 0)),
        Stmt::from(bad_class),
        function("ok", &[], vec![pass_stmt(pos(9, 4))], pos(8, 0)),
    ])
}
