//! Metric card parsing and rendering
//!
//! A metric card is a titled, styled block built from a loosely structured description.
//! The description is read in a fixed order:
//!
//!     1. Code:     the first `[CODE] … [/CODE]` span is cut out (./code.rs)
//!     2. Groups:   the rest is split on blank-line runs (./groups.rs)
//!     3. SOC list: the last raw segment becomes the SOC list if it contains `|`
//!     4. Sections: every remaining non-empty group is a bullet list (contains `|`) or a
//!                  paragraph
//!
//! Parsing produces a [`MetricCard`]; rendering turns it into one table fragment holding
//! the heading, the sections, a code table and the SOC list. The code table always has a
//! row (an empty one when there is no code) so its structure never changes.

pub mod code;
pub mod groups;

use crate::inline::format_bold;
use crate::model::{MetricCard, MetricCardInput, Section};
use crate::templates;
use tracing::{debug, trace};

pub use code::{extract_code_segment, CODE_END, CODE_START};
pub use groups::{
    classify_group, extract_soc_list, split_groups, split_items, split_segments,
    DEFAULT_SOC_TITLE, LIST_DELIMITER,
};

/// Parse a resolved card input into its parts.
///
/// `input` is expected to have its fallbacks applied already; see
/// [`MetricCardInput::resolve`].
pub fn parse_metric_card(input: &MetricCardInput) -> MetricCard {
    let (code, remainder) = extract_code_segment(&input.description);
    let (soc_list, groups) = extract_soc_list(&remainder);

    let sections: Vec<Section> = groups
        .iter()
        .map(|group| {
            let section = classify_group(group);
            trace!(?section, "classified description group");
            section
        })
        .collect();

    debug!(
        sections = sections.len(),
        has_code = code.is_some(),
        has_soc_list = soc_list.is_some(),
        "parsed metric card"
    );

    MetricCard {
        title: input.title.clone(),
        sections,
        code,
        soc_list,
    }
}

/// Render a parsed card to HTML.
pub fn render_metric_card(card: &MetricCard) -> String {
    let sections: String = card.sections.iter().map(render_section).collect();

    let code_row = match &card.code {
        Some(code) => templates::code_row(&templates::line_breaks(&code.content)),
        None => templates::EMPTY_CODE_ROW.to_string(),
    };

    let soc_list = card
        .soc_list
        .as_ref()
        .map(|soc| {
            let items: Vec<String> = soc.items.iter().map(|item| format_bold(item)).collect();
            templates::soc_list(&soc.title, &items)
        })
        .unwrap_or_default();

    templates::metric_card(&card.title, &sections, &code_row, &soc_list)
}

fn render_section(section: &Section) -> String {
    match section {
        Section::List { items } => {
            let items: Vec<String> = items.iter().map(|item| format_bold(item)).collect();
            templates::card_list(&items)
        }
        Section::Paragraph { text } => {
            templates::card_paragraph(&templates::line_breaks(&format_bold(text)))
        }
    }
}
