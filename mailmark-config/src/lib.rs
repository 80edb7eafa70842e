//! Shared configuration loader for the mailmark toolchain.
//!
//! `defaults/mailmark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top of those
//! defaults via [`Loader`] before deserializing into [`MailmarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mailmark_render::Fallbacks;
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError as LoadError;

const DEFAULT_TOML: &str = include_str!("../defaults/mailmark.default.toml");

/// Top-level configuration consumed by mailmark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MailmarkConfig {
    pub card: CardConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

impl MailmarkConfig {
    /// Fallbacks to hand to [`mailmark_render::Renderer::new`].
    pub fn fallbacks(&self) -> Fallbacks {
        Fallbacks::from(&self.card)
    }
}

/// Metric card settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    pub fallback_title: String,
    pub fallback_description: String,
    pub content: CardContentConfig,
}

impl From<&CardConfig> for Fallbacks {
    fn from(config: &CardConfig) -> Self {
        Fallbacks::new(
            config.fallback_title.clone(),
            config.fallback_description.clone(),
        )
    }
}

/// Preset metric inputs, the stand-in for pre-filled form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CardContentConfig {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub output: OutputMode,
    pub subject: String,
}

/// Shape of the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OutputMode {
    /// The bare HTML fragment
    #[serde(rename = "fragment")]
    Fragment,
    /// The fragment wrapped in a standalone HTML document
    #[serde(rename = "document")]
    Document,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MailmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MailmarkConfig, ConfigError> {
    Loader::new().build()
}
