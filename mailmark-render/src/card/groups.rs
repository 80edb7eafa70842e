//! Description groups and their classification.
//!
//! A group is the text between blank-line runs (a newline, any whitespace, a newline).
//! Any group holding the list delimiter is a list, even when the pipe sits inside prose:
//! the dialect has no escape for it. The last raw segment, when it is a list, becomes the
//! card's SOC list instead of a section. A trailing blank-line run leaves an empty last
//! segment, so it never holds a SOC list.

use crate::model::{Section, SocList};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separates list items.
pub const LIST_DELIMITER: char = '|';

/// Title used for a SOC list whose first line has no colon.
pub const DEFAULT_SOC_TITLE: &str = "List includes:";

static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern"));

/// Split text on blank-line runs, keeping every segment as is, empty ones included.
pub fn split_segments(text: &str) -> Vec<&str> {
    BLANK_LINE_RUN.split(text).collect()
}

/// Split text into trimmed, non-empty groups on blank-line boundaries.
pub fn split_groups(text: &str) -> Vec<String> {
    non_empty_groups(split_segments(text))
}

fn non_empty_groups(segments: Vec<&str>) -> Vec<String> {
    segments
        .into_iter()
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a group on the delimiter, dropping items that are empty after trimming.
pub fn split_items(group: &str) -> Vec<String> {
    group
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Take the SOC list off the end of `text` when its last segment contains the delimiter.
///
/// Returns the list (if any) together with the trimmed, non-empty groups that remain as
/// sections.
pub fn extract_soc_list(text: &str) -> (Option<SocList>, Vec<String>) {
    let mut segments = split_segments(text);
    let soc_list = match segments.last().copied() {
        Some(last) if last.contains(LIST_DELIMITER) => {
            segments.pop();
            Some(parse_soc_list(last))
        }
        _ => None,
    };
    (soc_list, non_empty_groups(segments))
}

fn parse_soc_list(source: &str) -> SocList {
    let prefix = title_prefix(source);
    let title = match prefix {
        Some(prefix) => format!("{}:", prefix[..prefix.len() - 1].trim()),
        None => DEFAULT_SOC_TITLE.to_string(),
    };

    let items = split_items(source)
        .into_iter()
        .map(|item| match prefix.and_then(|prefix| item.strip_prefix(prefix)) {
            Some(rest) => rest.trim().to_string(),
            None => item,
        })
        .collect();

    SocList { title, items }
}

/// Text from the start of the group up to and including the first colon on its first line.
///
/// The match is kept verbatim (untrimmed, case as typed); items echoing it exactly get it
/// stripped.
fn title_prefix(source: &str) -> Option<&str> {
    let first_line = source
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .next()
        .unwrap_or_default();
    first_line
        .find(':')
        .map(|colon| &source[..colon + ':'.len_utf8()])
}

/// Classify a group as a bullet list or a paragraph.
pub fn classify_group(group: &str) -> Section {
    if group.contains(LIST_DELIMITER) {
        Section::List {
            items: split_items(group),
        }
    } else {
        Section::Paragraph {
            text: group.to_string(),
        }
    }
}
