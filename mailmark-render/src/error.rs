//! Error types for inspection operations
//!
//! Rendering itself never fails: every input maps to some HTML. These errors only come
//! from the edges, where the parsed model is dumped for inspection.

use thiserror::Error;

/// Errors that can occur while inspecting parsed content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Inspection view not known
    #[error("View '{0}' not found")]
    UnknownView(String),
    /// Error while serializing the parsed model
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
