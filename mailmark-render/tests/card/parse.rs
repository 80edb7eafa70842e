use mailmark_render::{CodeSegment, Renderer, Section, SocList};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_description() {
    let description = "\
Weekly active users grew **12%**.
Most of it came from mobile.

Web | iOS | Android

[CODE]
SELECT count(*)
FROM users
[/CODE]

Eligible SOCs include: 15-1252 | 15-1253 | 15-1254";

    let card = Renderer::default().parse_metric_card("WAU", description);

    assert_eq!(card.title, "WAU");
    assert_eq!(
        card.sections,
        vec![
            Section::Paragraph {
                text: "Weekly active users grew **12%**.\nMost of it came from mobile.".to_string()
            },
            Section::List {
                items: strings(&["Web", "iOS", "Android"])
            },
        ]
    );
    assert_eq!(
        card.code,
        Some(CodeSegment {
            content: "SELECT count(*)\nFROM users".to_string()
        })
    );
    assert_eq!(
        card.soc_list,
        Some(SocList {
            title: "Eligible SOCs include:".to_string(),
            items: strings(&["15-1252", "15-1253", "15-1254"]),
        })
    );
}

#[test]
fn test_code_round_trip() {
    let card = Renderer::default().parse_metric_card("T", "[CODE]a\nb[/CODE]");
    assert_eq!(card.code.unwrap().content, "a\nb");
    assert!(card.sections.is_empty());
    assert!(card.soc_list.is_none());
}

#[test]
fn test_trailing_blank_lines_leave_no_soc_list() {
    let card = Renderer::default().parse_metric_card("T", "Intro\n\nA | B\n\n\n");
    assert!(card.soc_list.is_none());
    assert_eq!(
        card.sections,
        vec![
            Section::Paragraph {
                text: "Intro".to_string()
            },
            Section::List {
                items: strings(&["A", "B"])
            },
        ]
    );
}

#[test]
fn test_whitespace_only_trailing_group_leaves_no_soc_list() {
    let card = Renderer::default().parse_metric_card("T", "a\n \t\nb | c\n\n\n");
    assert!(card.soc_list.is_none());
    assert_eq!(card.sections.len(), 2);
    assert!(matches!(&card.sections[1], Section::List { items } if items.len() == 2));
}

#[test]
fn test_trailing_blank_lines_after_code_are_trimmed() {
    // Cutting a fence out trims the remainder, so the list is still last.
    let card = Renderer::default().parse_metric_card("T", "[CODE]x[/CODE]\n\nA | B\n\n\n");
    assert_eq!(card.soc_list.unwrap().items, strings(&["A", "B"]));
    assert!(card.sections.is_empty());
}

#[test]
fn test_unterminated_code_stays_in_text() {
    let card = Renderer::default().parse_metric_card("T", "See [CODE]x");
    assert!(card.code.is_none());
    assert_eq!(
        card.sections,
        vec![Section::Paragraph {
            text: "See [CODE]x".to_string()
        }]
    );
}

#[test]
fn test_whitespace_description_is_kept() {
    // Only the empty string triggers the fallback; whitespace parses to nothing.
    let card = Renderer::default().parse_metric_card("T", "   ");
    assert!(card.sections.is_empty());
    assert!(card.code.is_none());
    assert!(card.soc_list.is_none());
}

#[test]
fn test_earlier_list_groups_stay_sections() {
    let card = Renderer::default().parse_metric_card("T", "a | b\n\nc | d");
    assert_eq!(
        card.sections,
        vec![Section::List {
            items: strings(&["a", "b"])
        }]
    );
    assert_eq!(card.soc_list.unwrap().items, strings(&["c", "d"]));
}

#[test]
fn test_pipe_in_prose_is_a_known_boundary() {
    // The delimiter has no escape, so this sentence becomes the SOC list.
    let card = Renderer::default().parse_metric_card("T", "Compare A | B: a close race");
    let soc = card.soc_list.unwrap();
    assert_eq!(soc.title, "Compare A | B:");
    assert_eq!(soc.items, strings(&["Compare A", "B: a close race"]));
}
