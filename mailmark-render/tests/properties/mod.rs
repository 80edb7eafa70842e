//! Properties that hold for any input

use mailmark_render::body::parse_body;
use mailmark_render::{render_body, render_metric_card};
use proptest::prelude::*;

fn dialect_text() -> impl Strategy<Value = String> {
    "[a-z *|:\\-\n\\[\\]/A-Z]{0,80}"
}

fn non_blank_line() -> impl Strategy<Value = String> {
    "[a-z*][a-z *]{0,20}"
}

proptest! {
    #[test]
    fn rendering_is_deterministic(
        body in dialect_text(),
        title in "[a-zA-Z ]{0,12}",
        description in dialect_text(),
    ) {
        prop_assert_eq!(
            render_body(&body, &title, &description),
            render_body(&body, &title, &description)
        );
        prop_assert_eq!(
            render_metric_card(&title, &description),
            render_metric_card(&title, &description)
        );
    }

    #[test]
    fn blank_lines_are_neutral(lines in prop::collection::vec(non_blank_line(), 0..8)) {
        let tight = lines.join("\n");
        let loose = lines.join("\n\n   \n");
        prop_assert_eq!(render_body(&tight, "", ""), render_body(&loose, "", ""));
    }

    #[test]
    fn one_block_per_non_blank_line(body in dialect_text()) {
        let expected = body.split('\n').filter(|line| !line.trim().is_empty()).count();
        prop_assert_eq!(parse_body(&body).len(), expected);
    }

    #[test]
    fn card_markup_is_balanced(title in "[a-zA-Z ]{0,12}", description in dialect_text()) {
        let html = render_metric_card(&title, &description);
        for (open, close) in [("<table", "</table>"), ("<tr>", "</tr>"), ("<ul", "</ul>"), ("<li", "</li>"), ("<p ", "</p>")] {
            prop_assert_eq!(html.matches(open).count(), html.matches(close).count());
        }
    }
}
