//! Rule: imports must not change the naming convention.
//!
//! # Rationale
//!
//! `from x import y as z` should not turn a constant into a variable, a
//! lowercase name into something else, or a CapWords name into either.

use crate::diagnostic::{Code, Diagnostic};
use crate::rule::{CheckContext, Rule};
use crate::rules::patterns;
use namelint_ast::{ImportFrom, NodeRef};

/// Code for a constant imported under a non-constant name.
pub const W800: Code = Code::new("W800", "constant imported as non constant");

/// Code for a lowercase name imported under a non-lowercase name.
pub const W801: Code = Code::new("W801", "lowercase imported as non lowercase");

/// Code for a CapWords name imported as lowercase.
pub const W802: Code = Code::new("W802", "camelcase imported as lowercase");

/// Code for a CapWords name imported as a constant.
pub const W803: Code = Code::new("W803", "camelcase imported as constant");

/// Rule name for import-as.
pub const NAME: &str = "import-as";

/// Checks that `as` bindings keep the imported name's convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportAs;

impl ImportAs {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ImportAs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Import aliases should keep the imported name's convention"
    }

    fn check_import_from(
        &self,
        node: &ImportFrom,
        _ctx: &CheckContext<'_, '_>,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for alias in &node.names {
            let Some(asname) = alias.asname.as_deref() else {
                continue;
            };
            if patterns::is_uppercase(&alias.name) {
                if !patterns::is_uppercase(asname) {
                    diagnostics.push(self.err(NodeRef::from(node), W800));
                }
            } else if patterns::is_lowercase(&alias.name) {
                if !patterns::is_lowercase(asname) {
                    diagnostics.push(self.err(NodeRef::from(node), W801));
                }
            } else if patterns::is_lowercase(asname) {
                diagnostics.push(self.err(NodeRef::from(node), W802));
            } else if patterns::is_uppercase(asname) {
                diagnostics.push(self.err(NodeRef::from(node), W803));
            }
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Annotations;
    use crate::options::Options;
    use namelint_ast::{Alias, Position};

    fn check(aliases: Vec<Alias>) -> Vec<Diagnostic> {
        let node = ImportFrom::new("somewhere", aliases, Position::new(1, 0));
        let annotations = Annotations::new();
        let options = Options::new();
        let ctx = CheckContext {
            ancestors: &[],
            annotations: &annotations,
            filename: "test.py",
            options: &options,
        };
        ImportAs::new().check_import_from(&node, &ctx)
    }

    fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
        diagnostics.iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_unrenamed_imports_are_ignored() {
        assert!(check(vec![Alias::new("WEIRD_Name")]).is_empty());
    }

    #[test]
    fn test_convention_preserving_renames_pass() {
        let diagnostics = check(vec![
            Alias::new("MAX_SIZE").with_asname("LIMIT"),
            Alias::new("getcwd").with_asname("cwd"),
            Alias::new("Counter").with_asname("Tally"),
        ]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_constant_demoted_is_w800() {
        let diagnostics = check(vec![Alias::new("MAX_SIZE").with_asname("max_size")]);
        assert_eq!(codes(&diagnostics), ["W800"]);
    }

    #[test]
    fn test_lowercase_promoted_is_w801() {
        let diagnostics = check(vec![Alias::new("getcwd").with_asname("GETCWD")]);
        assert_eq!(codes(&diagnostics), ["W801"]);
    }

    #[test]
    fn test_camelcase_lowered_is_w802() {
        let diagnostics = check(vec![Alias::new("Counter").with_asname("counter")]);
        assert_eq!(codes(&diagnostics), ["W802"]);
    }

    #[test]
    fn test_camelcase_raised_is_w803() {
        let diagnostics = check(vec![Alias::new("Counter").with_asname("COUNTER")]);
        assert_eq!(codes(&diagnostics), ["W803"]);
    }

    #[test]
    fn test_each_alias_is_checked() {
        let diagnostics = check(vec![
            Alias::new("MAX_SIZE").with_asname("max_size"),
            Alias::new("path"),
            Alias::new("Counter").with_asname("counter"),
        ]);
        assert_eq!(codes(&diagnostics), ["W800", "W802"]);
    }
}
