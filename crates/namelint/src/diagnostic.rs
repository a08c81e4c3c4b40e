//! Diagnostic types shared by every rule.

use namelint_ast::NodeRef;
use serde::Serialize;

/// A diagnostic code paired with its fixed message text.
///
/// Rules declare these as consts; the engine never invents codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Short identifier (e.g., "E800").
    pub code: &'static str,
    /// Message text reported with the code.
    pub text: &'static str,
}

impl Code {
    /// Creates a code definition.
    #[must_use]
    pub const fn new(code: &'static str, text: &'static str) -> Self {
        Self { code, text }
    }
}

/// Severity of a diagnostic, derived from the code letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning-level finding (codes starting with `W`).
    Warning,
    /// Error-level finding (codes starting with `E`).
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (0-indexed).
    pub column: usize,
    /// Diagnostic code (e.g., "E800").
    pub code: &'static str,
    /// Human-readable message.
    pub message: &'static str,
    /// Kebab-case name of the reporting rule.
    pub rule: &'static str,
}

impl Diagnostic {
    /// Builds a diagnostic pointed at `node`.
    ///
    /// Definitions get their position adjusted so the report lands on the
    /// name rather than on the first decorator or the keyword: class and
    /// function definitions shift down one line per decorator, and right
    /// past `class ` or `def `.
    #[must_use]
    pub fn positioned(node: NodeRef<'_>, code: Code, rule: &'static str) -> Self {
        let pos = node.position().unwrap_or_default();
        let (mut line, mut column) = (pos.line, pos.column);
        match node {
            NodeRef::ClassDef(class) => {
                line += class.decorator_list.len();
                column += 6;
            }
            NodeRef::FunctionDef(func) => {
                line += func.decorator_list.len();
                column += 4;
            }
            _ => {}
        }
        Self {
            line,
            column,
            code: code.code,
            message: code.text,
            rule,
        }
    }

    /// Severity implied by the code letter.
    #[must_use]
    pub fn severity(&self) -> Severity {
        if self.code.starts_with('W') {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} {}",
            self.line, self.column, self.code, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namelint_ast::{Arguments, ClassDef, Expr, FunctionDef, Name, Position};

    const CODE: Code = Code::new("E800", "class names should use CapWords convention");

    #[test]
    fn class_position_shifts_past_keyword_and_decorators() {
        let class = ClassDef::new("myClass", vec![], Position::new(3, 0)).with_decorators(vec![
            Expr::name("register", Position::new(1, 1)),
            Expr::name("final", Position::new(2, 1)),
        ]);

        let diagnostic = Diagnostic::positioned(NodeRef::from(&class), CODE, "class-names");
        assert_eq!((diagnostic.line, diagnostic.column), (5, 6));
    }

    #[test]
    fn function_position_shifts_past_def() {
        let func = FunctionDef::new("BadName", Arguments::new(), vec![], Position::new(10, 4));

        let diagnostic = Diagnostic::positioned(
            NodeRef::from(&func),
            Code::new("E801", "function name should be lowercase"),
            "function-names",
        );
        assert_eq!((diagnostic.line, diagnostic.column), (10, 8));
    }

    #[test]
    fn decorated_function_shifts_one_line_per_decorator() {
        let func = FunctionDef::new("BadName", Arguments::new(), vec![], Position::new(2, 0))
            .with_decorators(vec![Expr::name("cached", Position::new(1, 1))]);

        let diagnostic = Diagnostic::positioned(
            NodeRef::from(&func),
            Code::new("E801", "function name should be lowercase"),
            "function-names",
        );
        assert_eq!((diagnostic.line, diagnostic.column), (3, 4));
    }

    #[test]
    fn plain_nodes_keep_their_position() {
        let name = Name::new("X", Position::new(4, 2));
        let diagnostic = Diagnostic::positioned(
            NodeRef::from(&name),
            Code::new("E805", "variable in function should be lowercase"),
            "function-variables",
        );
        assert_eq!((diagnostic.line, diagnostic.column), (4, 2));
    }

    #[test]
    fn severity_follows_code_letter() {
        let name = Name::new("x", Position::new(1, 0));
        let warning = Diagnostic::positioned(
            NodeRef::from(&name),
            Code::new("W800", "constant imported as non constant"),
            "import-as",
        );
        let error = Diagnostic::positioned(NodeRef::from(&name), CODE, "class-names");

        assert_eq!(warning.severity(), Severity::Warning);
        assert_eq!(error.severity(), Severity::Error);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn display_is_line_column_code_message() {
        let name = Name::new("X", Position::new(12, 8));
        let diagnostic = Diagnostic::positioned(
            NodeRef::from(&name),
            Code::new("E805", "variable in function should be lowercase"),
            "function-variables",
        );
        assert_eq!(
            diagnostic.to_string(),
            "12:8: E805 variable in function should be lowercase"
        );
    }
}
