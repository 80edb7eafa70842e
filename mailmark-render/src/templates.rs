//! HTML fragments for email clients
//!
//! Email clients ignore most modern CSS, so layout is table based and every style is
//! inlined on the element. Each function returns a complete, balanced fragment; callers
//! only ever concatenate them.
//!
//! Brand colours are fixed here and are not configurable per render.

/// Card background.
pub const CARD_BACKGROUND: &str = "#fcf4f9";
/// Left border accent of the card.
pub const CARD_ACCENT: &str = "#e20074";
/// Card heading colour.
pub const HEADING_COLOR: &str = "#A3005A";
/// Code block background.
pub const CODE_BACKGROUND: &str = "#FADDE7";

const TEXT_COLOR: &str = "#333333";
const CODE_TEXT_COLOR: &str = "#312e81";
const FONT_FAMILY: &str = "Arial, sans-serif";
const TABLE_ATTRS: &str =
    r#"role="presentation" width="100%" cellspacing="0" cellpadding="0" border="0""#;

/// Row emitted in place of a code block so the card table keeps the same shape.
pub const EMPTY_CODE_ROW: &str = r#"<tr><td style="padding-top: 0;"></td></tr>"#;

/// Horizontal rule between body paragraphs.
pub const SEPARATOR: &str =
    r#"<div style="margin: 20px 0; border-top: 1px solid #e0e0e0;"></div>"#;

/// Converts line breaks into explicit `<br>` tags.
pub(crate) fn line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}

/// Body paragraph. `inner` is already formatted.
pub(crate) fn body_paragraph(inner: &str) -> String {
    format!(r#"<p style="margin: 0 0 15px 0;">{inner}</p>"#)
}

/// Card paragraph section. `inner` is already formatted and line-broken.
pub(crate) fn card_paragraph(inner: &str) -> String {
    format!(
        r#"<p style="color: {TEXT_COLOR}; line-height: 1.6; margin: 0 0 10px 0; padding-left: 8px;">{inner}</p>"#
    )
}

/// Card bullet list section.
pub(crate) fn card_list(items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!(r#"<li style="margin: 0 0 4px 0;">{item}</li>"#))
        .collect();
    format!(
        r#"<ul style="list-style-type: disc; margin: 0 0 10px 0; padding-left: 20px; font-size: 16px; color: {TEXT_COLOR};">{items}</ul>"#
    )
}

/// Code block row. `content` is already line-broken.
pub(crate) fn code_row(content: &str) -> String {
    format!(
        r#"<tr><td style="padding-top: 0;"><div style="padding: 12px; background-color: {CODE_BACKGROUND}; border-radius: 8px; font-size: 14px; color: {CODE_TEXT_COLOR}; font-family: monospace; word-wrap: break-word; margin-bottom: 10px;">{content}</div></td></tr>"#
    )
}

/// Titled list trailing the card.
pub(crate) fn soc_list(title: &str, items: &[String]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!(r#"<li style="font-weight: bold;">{item}</li>"#))
        .collect();
    format!(
        concat!(
            r#"<table {attrs} style="padding-top: 10px;"><tr><td style="font-family: {font};">"#,
            r#"<p style="font-size: 16px; font-weight: bold; color: {color}; margin: 0 0 8px 0; padding-left: 8px;">{title}</p>"#,
            r#"<ul style="list-style-type: disc; margin: 0; padding-left: 30px; font-size: 16px; color: {color};">{items}</ul>"#,
            r#"</td></tr></table>"#
        ),
        attrs = TABLE_ATTRS,
        font = FONT_FAMILY,
        color = TEXT_COLOR,
        title = title,
        items = items,
    )
}

/// The outer card. All arguments are finished fragments.
pub(crate) fn metric_card(title: &str, sections: &str, code_row: &str, soc_list: &str) -> String {
    format!(
        concat!(
            r#"<table {attrs} style="background-color: {background}; border-left: 4px solid {accent}; padding: 20px 20px 20px 25px; border-radius: 8px; margin: 20px 0; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);">"#,
            r#"<tr><td style="font-family: {font};">"#,
            r#"<h2 style="font-size: 24px; font-weight: bold; color: {heading}; margin-top: 0; margin-bottom: 12px; padding-left: 8px;">{title}</h2>"#,
            "{sections}",
            r#"<table {attrs}>{code_row}</table>"#,
            "{soc_list}",
            r#"</td></tr></table>"#
        ),
        attrs = TABLE_ATTRS,
        background = CARD_BACKGROUND,
        accent = CARD_ACCENT,
        font = FONT_FAMILY,
        heading = HEADING_COLOR,
        title = title,
        sections = sections,
        code_row = code_row,
        soc_list = soc_list,
    )
}

/// Wraps a rendered fragment in a minimal standalone email document.
pub fn document(subject: &str, fragment: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            "<title>{subject}</title></head>",
            r#"<body style="margin: 0; padding: 0;">"#,
            r#"<table {attrs}><tr><td style="font-family: {font}; font-size: 16px; color: {color}; padding: 20px;">"#,
            "{fragment}",
            "</td></tr></table></body></html>\n"
        ),
        attrs = TABLE_ATTRS,
        font = FONT_FAMILY,
        color = TEXT_COLOR,
        subject = subject,
        fragment = fragment,
    )
}
