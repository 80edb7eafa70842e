//! Email-safe HTML from the mailmark authoring dialect
//!
//!     Authors write plain text into a few fields (a body, a metric title and a metric
//!     description). This crate turns that text into nested, inline-styled, table-based HTML
//!     that survives email clients.
//!
//!     This is a pure lib: it powers mailmark-cli but makes no assumptions about a shell. No
//!     printing, no environment variables, no files. Every render is a pure function of its
//!     inputs: same input, byte-identical output.
//!
//! The Dialect
//!
//!     | Token                            | Meaning                                        |
//!     |----------------------------------|------------------------------------------------|
//!     | `**text**`                       | bold                                           |
//!     | `*text*`                         | italic (body paragraphs only)                  |
//!     | `---` on its own line            | horizontal rule                                |
//!     | `[METRIC_ATTACH_CARD]` own line  | insert the metric card                         |
//!     | `[CODE] … [/CODE]`               | code block inside a description, multi-line    |
//!     | `|` inside a description group   | bullet list, or the SOC list if it is last     |
//!     | blank line(s)                    | group separator inside a description           |
//!
//!     Nothing is escaped: author text is trusted and may contain raw HTML.
//!
//! Architecture
//!
//!     Rendering runs in two stages: parse into the explicit model (./model.rs), then render
//!     the model with the fragment templates (./templates.rs).
//!
//!     .
//!     ├── error.rs        # RenderError (inspection only; rendering never fails)
//!     ├── inline.rs       # Bold / italic emphasis
//!     ├── body.rs         # Body text → blocks → HTML
//!     ├── card            # Metric card
//!     │   ├── code.rs     # [CODE] fence extraction
//!     │   ├── groups.rs   # Blank-line groups, SOC list, list vs paragraph
//!     │   └── mod.rs      # Parse + render
//!     ├── model.rs        # Parsed values
//!     ├── templates.rs    # Inline-styled HTML fragments and brand colours
//!     ├── inspect.rs      # JSON / text views of the parsed model
//!     └── renderer.rs     # Renderer: fallbacks + orchestration
//!
//! Known Dialect Limits
//!
//!     The pipe has no escape: a description group with `|` in its prose is always read as a
//!     list. A list group whose items are all empty still renders an (empty) list wrapper.

pub mod body;
pub mod card;
pub mod error;
pub mod inline;
pub mod inspect;
pub mod model;
pub mod renderer;
pub mod templates;

pub use error::RenderError;
pub use model::{
    Block, CodeSegment, Fallbacks, MetricCard, MetricCardInput, Section, SocList,
    DEFAULT_DESCRIPTION, DEFAULT_TITLE,
};
pub use renderer::Renderer;

/// Render body text with the default fallbacks.
///
/// Each `[METRIC_ATTACH_CARD]` line is replaced by the card built from `metric_title` and
/// `metric_description`.
pub fn render_body(body: &str, metric_title: &str, metric_description: &str) -> String {
    Renderer::default().render_body(body, metric_title, metric_description)
}

/// Render a standalone metric card with the default fallbacks.
pub fn render_metric_card(title: &str, description: &str) -> String {
    Renderer::default().render_metric_card(title, description)
}
