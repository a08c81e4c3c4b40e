//! Shared name-style patterns.

use regex::Regex;
use std::sync::LazyLock;

static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_a-z][_a-z0-9]*$").expect("valid pattern"));

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_A-Z][_A-Z0-9]*$").expect("valid pattern"));

static MIXEDCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_?[A-Z][a-zA-Z0-9]*$").expect("valid pattern"));

/// `snake_case` style: lowercase with underscores and digits.
pub(crate) fn is_lowercase(name: &str) -> bool {
    LOWERCASE.is_match(name)
}

/// Constant style: uppercase with underscores and digits.
pub(crate) fn is_uppercase(name: &str) -> bool {
    UPPERCASE.is_match(name)
}

/// CapWords style, with at most one leading underscore.
pub(crate) fn is_mixed_case(name: &str) -> bool {
    MIXEDCASE.is_match(name)
}
