use insta::assert_snapshot;
use mailmark_render::templates::EMPTY_CODE_ROW;
use mailmark_render::{render_metric_card, Fallbacks, Renderer};

#[test]
fn test_simple_card() {
    let html = render_metric_card("Open rate", "Up **4%** on last week.");
    assert_snapshot!(html, @r##"<table role="presentation" width="100%" cellspacing="0" cellpadding="0" border="0" style="background-color: #fcf4f9; border-left: 4px solid #e20074; padding: 20px 20px 20px 25px; border-radius: 8px; margin: 20px 0; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);"><tr><td style="font-family: Arial, sans-serif;"><h2 style="font-size: 24px; font-weight: bold; color: #A3005A; margin-top: 0; margin-bottom: 12px; padding-left: 8px;">Open rate</h2><p style="color: #333333; line-height: 1.6; margin: 0 0 10px 0; padding-left: 8px;">Up <b>4%</b> on last week.</p><table role="presentation" width="100%" cellspacing="0" cellpadding="0" border="0"><tr><td style="padding-top: 0;"></td></tr></table></td></tr></table>"##);
}

#[test]
fn test_code_block_fragment() {
    let html = render_metric_card("Query", "[CODE]a\nb[/CODE]");
    assert!(html.contains(
        r#"font-family: monospace; word-wrap: break-word; margin-bottom: 10px;">a<br>b</div>"#
    ));
    assert!(!html.contains(EMPTY_CODE_ROW));
    // Heading, then straight into the code table: no sections.
    assert!(html.contains(r#"Query</h2><table role="presentation""#));
}

#[test]
fn test_soc_list_fragment() {
    let html = render_metric_card("T", "Intro text.\n\nEligible SOCs include: A | B | C");
    assert!(html.contains(r#"padding-left: 8px;">Eligible SOCs include:</p>"#));
    assert!(html.contains(
        r#"<li style="font-weight: bold;">A</li><li style="font-weight: bold;">B</li><li style="font-weight: bold;">C</li></ul>"#
    ));
    assert_eq!(html.matches("<p ").count(), 2);
}

#[test]
fn test_section_list_fragment() {
    let html = render_metric_card("T", "x | **y** | z\n\nthe end");
    assert!(html.contains(
        r#"<li style="margin: 0 0 4px 0;">x</li><li style="margin: 0 0 4px 0;"><b>y</b></li><li style="margin: 0 0 4px 0;">z</li></ul>"#
    ));
}

#[test]
fn test_part_order() {
    let html = render_metric_card("T", "para\n\n[CODE]code[/CODE]\n\nList: a | b");
    let heading = html.find("</h2>").unwrap();
    let para = html.find(">para</p>").unwrap();
    let code = html.find(">code</div>").unwrap();
    let soc = html.find(">List:</p>").unwrap();
    assert!(heading < para && para < code && code < soc);
}

#[test]
fn test_tables_are_balanced() {
    let html = render_metric_card("T", "a\n\n[CODE]b[/CODE]\n\nc | d");
    assert_eq!(html.matches("<table").count(), html.matches("</table>").count());
    assert_eq!(html.matches("<tr>").count(), html.matches("</tr>").count());
}

#[test]
fn test_configured_fallbacks() {
    let renderer = Renderer::new(Fallbacks::new("KPI", "TBD"));
    let html = renderer.render_metric_card("", "");
    assert!(html.contains(">KPI</h2>"));
    assert!(html.contains(">TBD</p>"));
}
