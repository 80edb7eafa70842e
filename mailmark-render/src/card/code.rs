//! Fenced code extraction.
//!
//! Only the first `[CODE] … [/CODE]` span is taken, matched non-greedily across line
//! breaks. The span is cut out of the description and both halves are handed back as a
//! pair; nothing is spliced in place.

use crate::model::CodeSegment;

/// Opening fence token.
pub const CODE_START: &str = "[CODE]";
/// Closing fence token.
pub const CODE_END: &str = "[/CODE]";

/// Split a description into its code segment (if any) and the remainder.
///
/// The remainder is trimmed only when a segment was cut out. An unterminated fence or a
/// fence with nothing between the tokens is not a code segment: the text comes back
/// unchanged, surrounding blank lines included.
pub fn extract_code_segment(description: &str) -> (Option<CodeSegment>, String) {
    let Some((start, end)) = find_fence(description) else {
        return (None, description.to_string());
    };

    let interior = &description[start + CODE_START.len()..end - CODE_END.len()];
    if interior.is_empty() {
        return (None, description.to_string());
    }

    let mut remainder = String::with_capacity(description.len() - (end - start));
    remainder.push_str(&description[..start]);
    remainder.push_str(&description[end..]);

    let segment = CodeSegment {
        content: interior.trim().to_string(),
    };
    (Some(segment), remainder.trim().to_string())
}

/// Byte range of the first complete fence, delimiters included.
fn find_fence(text: &str) -> Option<(usize, usize)> {
    let start = text.find(CODE_START)?;
    let body_start = start + CODE_START.len();
    let body_len = text[body_start..].find(CODE_END)?;
    Some((start, body_start + body_len + CODE_END.len()))
}
