use insta::assert_snapshot;
use mailmark_render::body::parse_body;
use mailmark_render::{render_body, render_metric_card, Block};

const CARD_TITLE: &str = "Open rate";
const CARD_DESCRIPTION: &str = "Up **4%** on last week.";

// ============================================================================
// BLOCKS
// ============================================================================

#[test]
fn test_paragraphs_and_separator() {
    let html = render_body("Hello **world**\n\n---\n*bye*", "", "");
    assert_snapshot!(html, @r##"<p style="margin: 0 0 15px 0;">Hello <b>world</b></p><div style="margin: 20px 0; border-top: 1px solid #e0e0e0;"></div><p style="margin: 0 0 15px 0;"><i>bye</i></p>"##);
}

#[test]
fn test_empty_body_renders_nothing() {
    assert_eq!(render_body("", CARD_TITLE, CARD_DESCRIPTION), "");
    assert_eq!(render_body("\n   \n\n", CARD_TITLE, CARD_DESCRIPTION), "");
}

#[test]
fn test_lines_are_trimmed() {
    let html = render_body("   indented line   ", "", "");
    assert_eq!(html, r#"<p style="margin: 0 0 15px 0;">indented line</p>"#);
}

#[test]
fn test_html_is_passed_through() {
    let html = render_body("<a href=\"https://example.com\">link</a>", "", "");
    assert!(html.contains("<a href=\"https://example.com\">link</a>"));
}

// ============================================================================
// METRIC CARD PLACEHOLDER
// ============================================================================

#[test]
fn test_placeholder_is_replaced_by_card() {
    let html = render_body(
        "Team,\n[METRIC_ATTACH_CARD]\nThanks",
        CARD_TITLE,
        CARD_DESCRIPTION,
    );
    let card = render_metric_card(CARD_TITLE, CARD_DESCRIPTION);

    assert!(html.starts_with(r#"<p style="margin: 0 0 15px 0;">Team,</p>"#));
    assert!(html.contains(&card));
    assert!(html.ends_with(r#"<p style="margin: 0 0 15px 0;">Thanks</p>"#));
}

#[test]
fn test_placeholder_repeats() {
    let body = "[METRIC_ATTACH_CARD]\n---\n[METRIC_ATTACH_CARD]";
    let html = render_body(body, CARD_TITLE, CARD_DESCRIPTION);
    let card = render_metric_card(CARD_TITLE, CARD_DESCRIPTION);

    assert_eq!(html.matches(&card).count(), 2);
    assert_eq!(
        html,
        format!(
            "{card}{}{card}",
            mailmark_render::templates::SEPARATOR
        )
    );
}

#[test]
fn test_placeholder_uses_fallbacks() {
    let html = render_body("[METRIC_ATTACH_CARD]", "", "");
    assert!(html.contains(">Metric Update</h2>"));
    assert!(html.contains(">Description not set.</p>"));
}

#[test]
fn test_inline_placeholder_is_plain_text() {
    let blocks = parse_body("Attach [METRIC_ATTACH_CARD] please");
    assert_eq!(
        blocks,
        vec![Block::Paragraph {
            text: "Attach [METRIC_ATTACH_CARD] please".to_string()
        }]
    );
}
