//! Host-provided configuration, carried through but never interpreted.

use serde::{Deserialize, Serialize};

/// Opaque configuration handed over by the embedding linter.
///
/// The engine stores the options and exposes them to rules through
/// [`crate::CheckContext`]; none of the shipped rules read them. Hosts
/// that configure custom rules put whatever they need in `settings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Options {
    /// Raw host settings, forwarded verbatim.
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl Options {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
