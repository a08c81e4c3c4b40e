//! Process-wide rule registry.
//!
//! Rules register here statically; the traversal engine reads the
//! registry when a check starts. There is no runtime mutation: adding a
//! rule means adding it to [`default_rules`] at compile time.

use crate::rule::RuleBox;
use crate::rules::{ArgumentNames, ClassNames, FunctionNames, FunctionVariables, ImportAs};
use std::sync::LazyLock;

static REGISTRY: LazyLock<Vec<RuleBox>> = LazyLock::new(default_rules);

/// Every shipped rule, in registration order.
///
/// Registration order is the dispatch order within each visited node, so
/// it is part of the observable diagnostic ordering.
fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ClassNames::new()),
        Box::new(FunctionNames::new()),
        Box::new(ArgumentNames::new()),
        Box::new(ImportAs::new()),
        Box::new(FunctionVariables::new()),
    ]
}

/// The registered rules.
///
/// The slice is created on first use and lives for the rest of the
/// process.
#[must_use]
pub fn registered_rules() -> &'static [RuleBox] {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_is_stable_across_calls() {
        let first: Vec<&str> = registered_rules().iter().map(|r| r.name()).collect();
        let second: Vec<&str> = registered_rules().iter().map(|r| r.name()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn rule_names_are_unique() {
        let names: HashSet<&str> = registered_rules().iter().map(|r| r.name()).collect();
        assert_eq!(names.len(), registered_rules().len());
    }

    #[test]
    fn registration_order_is_fixed() {
        let names: Vec<&str> = registered_rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "class-names",
                "function-names",
                "argument-names",
                "import-as",
                "function-variables",
            ]
        );
    }

    #[test]
    fn every_rule_has_a_description() {
        for rule in registered_rules() {
            assert!(!rule.description().is_empty(), "{} lacks one", rule.name());
        }
    }
}
