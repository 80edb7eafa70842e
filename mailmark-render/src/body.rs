//! Body text blocks
//!
//! Body text is read line by line, top to bottom. Each line is trimmed (a byte order mark
//! counts as whitespace) and then becomes exactly one block, or nothing when it is blank:
//!
//! | Line (trimmed)           | Block                   |
//! |--------------------------|-------------------------|
//! | `[METRIC_ATTACH_CARD]`   | metric card placeholder |
//! | empty                    | (skipped)               |
//! | `---`                    | separator               |
//! | anything else            | paragraph               |
//!
//! Tokens must match the whole trimmed line; a token inside a sentence is ordinary text.

use crate::inline::format_inline;
use crate::model::Block;
use crate::templates;
use tracing::trace;

/// Line token replaced by the rendered metric card.
pub const METRIC_CARD_TOKEN: &str = "[METRIC_ATTACH_CARD]";

/// Line token rendered as a horizontal rule.
pub const SEPARATOR_TOKEN: &str = "---";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split body text into blocks, dropping blank lines.
pub fn parse_body(text: &str) -> Vec<Block> {
    text.split('\n').filter_map(classify_line).collect()
}

fn classify_line(line: &str) -> Option<Block> {
    let trimmed = line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    let block = match trimmed {
        METRIC_CARD_TOKEN => Block::MetricCardPlaceholder,
        "" => return None,
        SEPARATOR_TOKEN => Block::Separator,
        text => Block::Paragraph {
            text: text.to_string(),
        },
    };
    trace!(?block, "classified body line");
    Some(block)
}

/// Render blocks in order, calling `metric_card` once per placeholder.
pub fn render_blocks<F>(blocks: &[Block], mut metric_card: F) -> String
where
    F: FnMut() -> String,
{
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::Paragraph { text } => {
                html.push_str(&templates::body_paragraph(&format_inline(text)));
            }
            Block::Separator => html.push_str(templates::SEPARATOR),
            Block::MetricCardPlaceholder => html.push_str(&metric_card()),
        }
    }
    html
}
