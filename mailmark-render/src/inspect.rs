//! Views over the parsed model
//!
//! These let a caller see what the parser made of some input without reading HTML. They
//! are the only fallible operations in the crate.

use crate::error::RenderError;
use crate::model::{Block, MetricCard, Section};
use std::fmt;

/// Pretty JSON for a list of body blocks.
pub fn blocks_to_json(blocks: &[Block]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Pretty JSON for a parsed metric card.
pub fn card_to_json(card: &MetricCard) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(card)?)
}

/// One line per card part, indented by nesting.
pub fn card_summary(card: &MetricCard) -> String {
    CardSummary(card).to_string()
}

struct CardSummary<'a>(&'a MetricCard);

impl fmt::Display for CardSummary<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = self.0;
        writeln!(out, "card: {}", card.title)?;
        for section in &card.sections {
            match section {
                Section::Paragraph { text } => {
                    writeln!(out, "  paragraph: {}", first_line(text))?;
                }
                Section::List { items } => {
                    writeln!(out, "  list ({} items)", items.len())?;
                    for item in items {
                        writeln!(out, "    - {item}")?;
                    }
                }
            }
        }
        match &card.code {
            Some(code) => writeln!(out, "  code ({} lines)", code.content.lines().count())?,
            None => writeln!(out, "  code: none")?,
        }
        if let Some(soc) = &card.soc_list {
            writeln!(out, "  soc list: {} ({} items)", soc.title, soc.items.len())?;
            for item in &soc.items {
                writeln!(out, "    - {item}")?;
            }
        }
        Ok(())
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}
