//! The renderer entry point.
//!
//! [`Renderer`] ties the block parser to the card renderer and owns the fallbacks used
//! for empty metric fields. It holds no other state, so a single value can be shared
//! across threads and reused for any number of calls.

use crate::body::{parse_body, render_blocks};
use crate::card::{parse_metric_card, render_metric_card};
use crate::model::{Block, Fallbacks, MetricCard, MetricCardInput};
use tracing::debug;

/// Renders body text and metric cards to email-safe HTML.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    fallbacks: Fallbacks,
}

impl Renderer {
    /// Create a renderer with custom fallbacks
    pub fn new(fallbacks: Fallbacks) -> Self {
        Self { fallbacks }
    }

    /// Fallbacks applied to empty metric fields
    pub fn fallbacks(&self) -> &Fallbacks {
        &self.fallbacks
    }

    /// Render body text, expanding every `[METRIC_ATTACH_CARD]` line into the card built
    /// from `title` and `description`.
    pub fn render_body(&self, body: &str, title: &str, description: &str) -> String {
        let blocks = parse_body(body);
        let card = blocks
            .contains(&Block::MetricCardPlaceholder)
            .then(|| self.parse_metric_card(title, description));
        debug!(
            blocks = blocks.len(),
            with_card = card.is_some(),
            "rendering body"
        );
        render_blocks(&blocks, || {
            card.as_ref().map(render_metric_card).unwrap_or_default()
        })
    }

    /// Render a standalone metric card.
    pub fn render_metric_card(&self, title: &str, description: &str) -> String {
        render_metric_card(&self.parse_metric_card(title, description))
    }

    /// Parse a metric card without rendering it, fallbacks applied.
    pub fn parse_metric_card(&self, title: &str, description: &str) -> MetricCard {
        let input = MetricCardInput::new(title, description).resolve(&self.fallbacks);
        parse_metric_card(&input)
    }
}
