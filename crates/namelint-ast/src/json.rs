//! JSON bridge for trees handed over by out-of-process front-ends.
//!
//! A parser owns the source text; it ships the tree here as JSON with the
//! node-kind tag as the single object key, e.g.
//! `{"body": [{"Pass": {"pos": {"line": 1, "column": 0}}}]}`.

use crate::nodes::Module;
use thiserror::Error;

/// Error raised when a tree payload cannot be decoded or encoded.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The payload is not valid JSON or does not match the node model.
    #[error("invalid tree payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl Module {
    /// Decodes a module from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Payload`] when the payload is malformed.
    pub fn from_json(data: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Encodes this module as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Payload`] when serialization fails.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(self)?)
    }
}
