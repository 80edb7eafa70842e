//! CLI error types.

use mailmark_config::LoadError;
use mailmark_render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Invalid value '{value}' for --extra-{flag}")]
    InvalidExtra { flag: String, value: String },
}
