//! Parsed representation of authored content.
//!
//! Every value here is built fresh for a single render call and discarded with it. The
//! types derive `Serialize` so callers can inspect what the parser saw.

use serde::Serialize;

/// Title used when the metric title is empty.
pub const DEFAULT_TITLE: &str = "Metric Update";

/// Description used when the metric description is empty.
pub const DEFAULT_DESCRIPTION: &str = "Description not set.";

/// One top-level unit of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Separator,
    MetricCardPlaceholder,
}

/// Values substituted for empty metric card fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fallbacks {
    pub title: String,
    pub description: String,
}

impl Fallbacks {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_DESCRIPTION)
    }
}

/// Raw metric card fields as the author typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCardInput {
    pub title: String,
    pub description: String,
}

impl MetricCardInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Replace empty fields with the given fallbacks.
    ///
    /// Only the empty string counts as absent; whitespace is kept as typed.
    pub fn resolve(self, fallbacks: &Fallbacks) -> Self {
        let title = if self.title.is_empty() {
            fallbacks.title.clone()
        } else {
            self.title
        };
        let description = if self.description.is_empty() {
            fallbacks.description.clone()
        } else {
            self.description
        };
        Self { title, description }
    }
}

/// Content of a `[CODE] … [/CODE]` fence, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSegment {
    pub content: String,
}

/// Trailing pipe-delimited list of a metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocList {
    pub title: String,
    pub items: Vec<String>,
}

/// One description group after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    List { items: Vec<String> },
    Paragraph { text: String },
}

/// A fully parsed metric card, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub sections: Vec<Section>,
    pub code: Option<CodeSegment>,
    pub soc_list: Option<SocList>,
}
