//! Inline emphasis formatting
//!
//! Two passes over a line of text:
//!
//!     1. `**text**` → `<b>text</b>`
//!     2. `*text*`   → `<i>text</i>`
//!
//! Each pass takes the shortest span it can find, left to right, without overlap. Spans
//! never cross a line break and never nest: once a span is substituted its interior is not
//! scanned again for the same marker. Unmatched markers are left as literal asterisks.
//!
//! Author text is trusted, so nothing is escaped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));

/// Applies bold then italic emphasis. Used for body paragraphs.
pub fn format_inline(text: &str) -> String {
    let bold = bold_pass(text);
    ITALIC.replace_all(&bold, "<i>${1}</i>").into_owned()
}

/// Applies bold emphasis only. Metric card content never gets italics.
pub fn format_bold(text: &str) -> String {
    bold_pass(text).into_owned()
}

fn bold_pass(text: &str) -> Cow<'_, str> {
    BOLD.replace_all(text, "<b>${1}</b>")
}
