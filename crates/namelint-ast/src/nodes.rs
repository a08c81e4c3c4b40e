//! Node definitions for the Python-like syntax tree.
//!
//! The model covers the statement and expression kinds the naming rules
//! look at. Trees are plain owned data: front-ends either build them with
//! the constructors here or decode them from JSON (see [`crate::TreeError`]).

use serde::{Deserialize, Serialize};

/// Position of a node in the original source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (0-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Top-level statements in source order.
    pub body: Vec<Stmt>,
}

impl Module {
    /// Creates a module from its top-level statements.
    #[must_use]
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `def name(...): ...`
    FunctionDef(FunctionDef),
    /// `class Name(...): ...`
    ClassDef(ClassDef),
    /// `return value`
    Return(Return),
    /// `targets = value`
    Assign(Assign),
    /// `for target in iter: ...`
    For(For),
    /// `while test: ...`
    While(While),
    /// `if test: ...`
    If(If),
    /// `global names`
    Global(Global),
    /// A bare expression used as a statement.
    Expr(ExprStmt),
    /// `pass`
    Pass(Pass),
    /// `import names`
    Import(Import),
    /// `from module import names`
    ImportFrom(ImportFrom),
}

impl Stmt {
    /// Position of the statement's first token.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::FunctionDef(node) => node.pos,
            Self::ClassDef(node) => node.pos,
            Self::Return(node) => node.pos,
            Self::Assign(node) => node.pos,
            Self::For(node) => node.pos,
            Self::While(node) => node.pos,
            Self::If(node) => node.pos,
            Self::Global(node) => node.pos,
            Self::Expr(node) => node.pos,
            Self::Pass(node) => node.pos,
            Self::Import(node) => node.pos,
            Self::ImportFrom(node) => node.pos,
        }
    }
}

/// A function definition.
///
/// The position points at the `def` keyword; decorators sit on the lines
/// above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Function name.
    pub name: String,
    /// Declared parameters.
    pub args: Arguments,
    /// Body statements.
    pub body: Vec<Stmt>,
    /// Decorator expressions, outermost first.
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
    /// Position of the `def` keyword line.
    pub pos: Position,
}

impl FunctionDef {
    /// Creates a function definition without decorators.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Arguments, body: Vec<Stmt>, pos: Position) -> Self {
        Self {
            name: name.into(),
            args,
            body,
            decorator_list: Vec::new(),
            pos,
        }
    }

    /// Sets the decorator list.
    #[must_use]
    pub fn with_decorators(mut self, decorators: Vec<Expr>) -> Self {
        self.decorator_list = decorators;
        self
    }
}

/// A class definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// Base-class expressions.
    #[serde(default)]
    pub bases: Vec<Expr>,
    /// Body statements.
    pub body: Vec<Stmt>,
    /// Decorator expressions, outermost first.
    #[serde(default)]
    pub decorator_list: Vec<Expr>,
    /// Position of the `class` keyword line.
    pub pos: Position,
}

impl ClassDef {
    /// Creates a class definition without bases or decorators.
    #[must_use]
    pub fn new(name: impl Into<String>, body: Vec<Stmt>, pos: Position) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            body,
            decorator_list: Vec::new(),
            pos,
        }
    }

    /// Sets the base-class list.
    #[must_use]
    pub fn with_bases(mut self, bases: Vec<Expr>) -> Self {
        self.bases = bases;
        self
    }

    /// Sets the decorator list.
    #[must_use]
    pub fn with_decorators(mut self, decorators: Vec<Expr>) -> Self {
        self.decorator_list = decorators;
        self
    }
}

/// A `return` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Return {
    /// Returned expression, absent for a bare `return`.
    #[serde(default)]
    pub value: Option<Expr>,
    /// Position of the `return` keyword.
    pub pos: Position,
}

impl Return {
    /// Creates a return statement.
    #[must_use]
    pub fn new(value: Option<Expr>, pos: Position) -> Self {
        Self { value, pos }
    }
}

/// An assignment statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    /// Assignment targets, one per `=` chain link.
    pub targets: Vec<Expr>,
    /// Assigned expression.
    pub value: Expr,
    /// Position of the first target.
    pub pos: Position,
}

impl Assign {
    /// Creates an assignment.
    #[must_use]
    pub fn new(targets: Vec<Expr>, value: Expr, pos: Position) -> Self {
        Self {
            targets,
            value,
            pos,
        }
    }
}

/// A `for` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct For {
    /// Loop target.
    pub target: Expr,
    /// Iterated expression.
    pub iter: Expr,
    /// Loop body.
    pub body: Vec<Stmt>,
    /// `else` clause body.
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    /// Position of the `for` keyword.
    pub pos: Position,
}

impl For {
    /// Creates a `for` loop without an `else` clause.
    #[must_use]
    pub fn new(target: Expr, iter: Expr, body: Vec<Stmt>, pos: Position) -> Self {
        Self {
            target,
            iter,
            body,
            orelse: Vec::new(),
            pos,
        }
    }

    /// Sets the `else` clause body.
    #[must_use]
    pub fn with_orelse(mut self, orelse: Vec<Stmt>) -> Self {
        self.orelse = orelse;
        self
    }
}

/// A `while` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct While {
    /// Loop condition.
    pub test: Expr,
    /// Loop body.
    pub body: Vec<Stmt>,
    /// `else` clause body.
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    /// Position of the `while` keyword.
    pub pos: Position,
}

impl While {
    /// Creates a `while` loop without an `else` clause.
    #[must_use]
    pub fn new(test: Expr, body: Vec<Stmt>, pos: Position) -> Self {
        Self {
            test,
            body,
            orelse: Vec::new(),
            pos,
        }
    }

    /// Sets the `else` clause body.
    #[must_use]
    pub fn with_orelse(mut self, orelse: Vec<Stmt>) -> Self {
        self.orelse = orelse;
        self
    }
}

/// An `if` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct If {
    /// Branch condition.
    pub test: Expr,
    /// Branch body.
    pub body: Vec<Stmt>,
    /// `elif`/`else` continuation.
    #[serde(default)]
    pub orelse: Vec<Stmt>,
    /// Position of the `if` keyword.
    pub pos: Position,
}

impl If {
    /// Creates an `if` statement without an `else` branch.
    #[must_use]
    pub fn new(test: Expr, body: Vec<Stmt>, pos: Position) -> Self {
        Self {
            test,
            body,
            orelse: Vec::new(),
            pos,
        }
    }

    /// Sets the `elif`/`else` continuation.
    #[must_use]
    pub fn with_orelse(mut self, orelse: Vec<Stmt>) -> Self {
        self.orelse = orelse;
        self
    }
}

/// A `global` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Global {
    /// Declared names.
    pub names: Vec<String>,
    /// Position of the `global` keyword.
    pub pos: Position,
}

impl Global {
    /// Creates a `global` declaration.
    #[must_use]
    pub fn new<I, S>(names: I, pos: Position) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            pos,
        }
    }
}

/// An expression used in statement position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    /// The wrapped expression.
    pub value: Expr,
    /// Position of the expression.
    pub pos: Position,
}

impl ExprStmt {
    /// Creates an expression statement.
    #[must_use]
    pub fn new(value: Expr, pos: Position) -> Self {
        Self { value, pos }
    }
}

/// A `pass` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    /// Position of the `pass` keyword.
    pub pos: Position,
}

impl Pass {
    /// Creates a `pass` statement.
    #[must_use]
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

/// An `import` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    /// Imported module aliases.
    pub names: Vec<Alias>,
    /// Position of the `import` keyword.
    pub pos: Position,
}

impl Import {
    /// Creates an `import` statement.
    #[must_use]
    pub fn new(names: Vec<Alias>, pos: Position) -> Self {
        Self { names, pos }
    }
}

/// A `from module import names` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFrom {
    /// Source module, absent for `from . import x`.
    #[serde(default)]
    pub module: Option<String>,
    /// Imported aliases.
    pub names: Vec<Alias>,
    /// Relative-import level (number of leading dots).
    #[serde(default)]
    pub level: usize,
    /// Position of the `from` keyword.
    pub pos: Position,
}

impl ImportFrom {
    /// Creates an absolute `from ... import ...` statement.
    #[must_use]
    pub fn new(module: impl Into<String>, names: Vec<Alias>, pos: Position) -> Self {
        Self {
            module: Some(module.into()),
            names,
            level: 0,
            pos,
        }
    }

    /// Sets the relative-import level.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }
}

/// One `name` or `name as asname` clause of an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Imported name.
    pub name: String,
    /// Binding name after `as`, absent when not renamed.
    #[serde(default)]
    pub asname: Option<String>,
}

impl Alias {
    /// Creates an alias without renaming.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asname: None,
        }
    }

    /// Sets the `as` binding name.
    #[must_use]
    pub fn with_asname(mut self, asname: impl Into<String>) -> Self {
        self.asname = Some(asname.into());
        self
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A bare identifier.
    Name(Name),
    /// `value.attr`
    Attribute(Attribute),
    /// `func(args)`
    Call(Call),
    /// A literal constant.
    Constant(Constant),
    /// `(a, b, ...)`
    Tuple(Tuple),
}

impl Expr {
    /// Position of the expression's first token.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Name(node) => node.pos,
            Self::Attribute(node) => node.pos,
            Self::Call(node) => node.pos,
            Self::Constant(node) => node.pos,
            Self::Tuple(node) => node.pos,
        }
    }

    /// Shorthand for a [`Name`] expression.
    #[must_use]
    pub fn name(id: impl Into<String>, pos: Position) -> Self {
        Self::Name(Name::new(id, pos))
    }

    /// Shorthand for a [`Call`] expression.
    #[must_use]
    pub fn call(func: Expr, args: Vec<Expr>, pos: Position) -> Self {
        Self::Call(Call::new(func, args, pos))
    }

    /// Shorthand for a [`Constant`] expression.
    #[must_use]
    pub fn constant(value: Literal, pos: Position) -> Self {
        Self::Constant(Constant::new(value, pos))
    }
}

/// A bare identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// The identifier text.
    pub id: String,
    /// Position of the identifier.
    pub pos: Position,
}

impl Name {
    /// Creates a name expression.
    #[must_use]
    pub fn new(id: impl Into<String>, pos: Position) -> Self {
        Self {
            id: id.into(),
            pos,
        }
    }
}

/// An attribute access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Expression the attribute is read from.
    pub value: Box<Expr>,
    /// Attribute name.
    pub attr: String,
    /// Position of the whole access.
    pub pos: Position,
}

impl Attribute {
    /// Creates an attribute access.
    #[must_use]
    pub fn new(value: Expr, attr: impl Into<String>, pos: Position) -> Self {
        Self {
            value: Box::new(value),
            attr: attr.into(),
            pos,
        }
    }
}

/// A call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Called expression.
    pub func: Box<Expr>,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Expr>,
    /// Position of the called expression.
    pub pos: Position,
}

impl Call {
    /// Creates a call expression.
    #[must_use]
    pub fn new(func: Expr, args: Vec<Expr>, pos: Position) -> Self {
        Self {
            func: Box::new(func),
            args,
            pos,
        }
    }
}

/// A literal constant expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    /// The literal value.
    pub value: Literal,
    /// Position of the literal.
    pub pos: Position,
}

impl Constant {
    /// Creates a constant expression.
    #[must_use]
    pub fn new(value: Literal, pos: Position) -> Self {
        Self { value, pos }
    }
}

/// A tuple display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    /// Tuple elements.
    pub elts: Vec<Expr>,
    /// Position of the first element or opening parenthesis.
    pub pos: Position,
}

impl Tuple {
    /// Creates a tuple display.
    #[must_use]
    pub fn new(elts: Vec<Expr>, pos: Position) -> Self {
        Self { elts, pos }
    }
}

/// A literal value carried by a [`Constant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// An integer literal.
    Int(i64),
    /// A floating-point literal.
    Float(f64),
    /// A string literal.
    Str(String),
    /// A boolean literal.
    Bool(bool),
    /// The `None` literal.
    None,
}

/// The declared parameters of a function.
///
/// Mirrors the split Python makes: plain positionals, `*args`,
/// keyword-only parameters, `**kwargs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arguments {
    /// Plain positional parameters.
    #[serde(default)]
    pub args: Vec<Arg>,
    /// `*args` parameter, if declared.
    #[serde(default)]
    pub vararg: Option<Arg>,
    /// Keyword-only parameters (after `*`).
    #[serde(default)]
    pub kwonlyargs: Vec<Arg>,
    /// `**kwargs` parameter, if declared.
    #[serde(default)]
    pub kwarg: Option<Arg>,
}

impl Arguments {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parameter list of plain positionals.
    ///
    /// Parameter positions default to [`Position::default`]; the naming
    /// rules report at the enclosing definition, not at parameters.
    #[must_use]
    pub fn positional<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: names
                .into_iter()
                .map(|name| Arg::new(name, Position::default()))
                .collect(),
            ..Self::default()
        }
    }

    /// Sets the `*args` parameter.
    #[must_use]
    pub fn with_vararg(mut self, vararg: Arg) -> Self {
        self.vararg = Some(vararg);
        self
    }

    /// Sets the keyword-only parameters.
    #[must_use]
    pub fn with_kwonly(mut self, kwonlyargs: Vec<Arg>) -> Self {
        self.kwonlyargs = kwonlyargs;
        self
    }

    /// Sets the `**kwargs` parameter.
    #[must_use]
    pub fn with_kwarg(mut self, kwarg: Arg) -> Self {
        self.kwarg = Some(kwarg);
        self
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arg {
    /// Parameter name.
    pub name: String,
    /// Position of the parameter name.
    #[serde(default)]
    pub pos: Position,
}

impl Arg {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
        }
    }
}

macro_rules! impl_from_stmt {
    ($($node:ident),* $(,)?) => {
        $(
            impl From<$node> for Stmt {
                fn from(node: $node) -> Self {
                    Self::$node(node)
                }
            }
        )*
    };
}

impl_from_stmt!(FunctionDef, ClassDef, Return, Assign, For, While, If, Global, Pass, Import, ImportFrom);

impl From<ExprStmt> for Stmt {
    fn from(node: ExprStmt) -> Self {
        Self::Expr(node)
    }
}

macro_rules! impl_from_expr {
    ($($node:ident),* $(,)?) => {
        $(
            impl From<$node> for Expr {
                fn from(node: $node) -> Self {
                    Self::$node(node)
                }
            }
        )*
    };
}

impl_from_expr!(Name, Attribute, Call, Constant, Tuple);
