//! Markdown to HTML conversion through a [`RenderPolicy`].

use pulldown_cmark::{html, Event, HeadingLevel, Options, Parser, Tag};

use crate::policy::RenderPolicy;

/// A heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Heading text content
    pub title: String,
    /// Heading level (1-6)
    pub level: u8,
}

fn parser_options() -> Options {
    // Math stays disabled: `$` must reach the policy untouched.
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML.
///
/// Paragraphs, list items and headings are rendered by `policy`; every other
/// construct uses pulldown-cmark's HTML writer.
pub fn render_html<P: RenderPolicy + ?Sized>(source: &str, policy: &P) -> String {
    let events: Vec<Event<'_>> = Parser::new_ext(source, parser_options()).collect();

    let mut out = String::with_capacity(source.len() * 3 / 2);
    render_events(&events, policy, &mut out);
    out
}

/// Collect every heading in document order.
pub fn outline(source: &str) -> Vec<HeadingEntry> {
    let events: Vec<Event<'_>> = Parser::new_ext(source, parser_options()).collect();

    let mut entries = Vec::new();
    let mut i = 0;
    while i < events.len() {
        if let Event::Start(Tag::Heading { level, .. }) = &events[i] {
            let end = matching_end(&events, i);
            entries.push(HeadingEntry {
                title: plain_text(&events[i + 1..end]),
                level: heading_number(*level),
            });
            i = end + 1;
        } else {
            i += 1;
        }
    }

    entries
}

fn render_events<P: RenderPolicy + ?Sized>(events: &[Event<'_>], policy: &P, out: &mut String) {
    let mut i = 0;
    while i < events.len() {
        match &events[i] {
            Event::Start(Tag::Paragraph) => {
                let end = matching_end(events, i);
                let text = inline_html(&events[i + 1..end]);
                out.push_str(&policy.paragraph(&text));
                i = end + 1;
            }

            Event::Start(Tag::Item) => {
                let end = matching_end(events, i);
                let content = &events[i + 1..end];

                // The stock writer breaks the line between `<li>` and a
                // leading block, as in loose lists.
                let mut inner = String::new();
                if content.first().is_some_and(opens_block) {
                    inner.push('\n');
                }
                render_events(content, policy, &mut inner);
                out.push_str(&policy.list_item(&inner));
                i = end + 1;
            }

            Event::Start(Tag::Heading { level, .. }) => {
                let end = matching_end(events, i);
                let inner = &events[i + 1..end];
                out.push_str(&policy.heading(&inline_html(inner), &plain_text(inner), *level));
                i = end + 1;
            }

            _ => {
                // Everything up to the next intercepted block goes through the
                // stock writer in one run, so its own state (tables, newlines)
                // stays consistent.
                let run_end = events[i..]
                    .iter()
                    .position(is_intercepted)
                    .map(|offset| i + offset)
                    .unwrap_or(events.len());
                html::push_html(out, events[i..run_end].iter().cloned());
                i = run_end;
            }
        }
    }
}

fn is_intercepted(event: &Event<'_>) -> bool {
    matches!(
        event,
        Event::Start(Tag::Paragraph) | Event::Start(Tag::Item) | Event::Start(Tag::Heading { .. })
    )
}

/// Whether the HTML writer puts this event on a new line after an open tag.
fn opens_block(event: &Event<'_>) -> bool {
    matches!(
        event,
        Event::Start(
            Tag::Paragraph
                | Tag::Heading { .. }
                | Tag::BlockQuote(_)
                | Tag::CodeBlock(_)
                | Tag::List(_)
        ) | Event::Rule
    )
}

/// Index of the `End` event closing the `Start` event at `start`.
fn matching_end(events: &[Event<'_>], start: usize) -> usize {
    let mut depth = 0usize;
    for (offset, event) in events[start..].iter().enumerate() {
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return start + offset;
                }
            }
            _ => {}
        }
    }
    events.len()
}

fn inline_html(events: &[Event<'_>]) -> String {
    let mut out = String::new();
    html::push_html(&mut out, events.iter().cloned());
    out
}

fn plain_text(events: &[Event<'_>]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }
    out
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{BasePolicy, BilingualPolicy};
    use pretty_assertions::assert_eq;

    fn stock(source: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, Parser::new_ext(source, parser_options()));
        out
    }

    #[test]
    fn base_policy_reproduces_stock_output() {
        let source = r#"Intro with *emphasis* and `code`.

- one
- two
  - nested

| a | b |
|---|---|
| 1 | 2 |

> quoted

```ts
let x: number = 1;
```

1. first
2. second
"#;

        assert_eq!(render_html(source, &BasePolicy), stock(source));
    }

    #[test]
    fn base_policy_reproduces_stock_loose_lists() {
        for source in [
            "- a\n\n  ```\n  code\n  ```\n- b\n",
            "1. one\n\n   > quoted\n\n2. two\n",
            "- - nested first\n- # heading item\n",
            "- $a$$甲\n\n- plain\n",
        ] {
            assert_eq!(render_html(source, &BasePolicy), stock(source), "{source:?}");
        }
    }

    #[test]
    fn plain_paragraphs_are_untouched_by_bilingual_policy() {
        let source = "Just text.\n\nPrice is $5 today.\n\n* item\n* $4 item\n";

        assert_eq!(render_html(source, &BilingualPolicy::new()), stock(source));
    }

    #[test]
    fn renders_bilingual_paragraph() {
        let source = "$Hello **world**$$你好 **世界**\n";
        let html = render_html(source, &BilingualPolicy::new().toggle_label("[o]"));

        assert_eq!(
            html,
            "<div role=\"item\"><p>你好 <strong>世界</strong>\
             <span class=\"check-ori\" role=\"check-ori\">[o]</span></p>\
             <p role=\"ori\" class=\"ori\" hidden>Hello <strong>world</strong></p></div>\n"
        );
    }

    #[test]
    fn renders_bilingual_tight_list_items() {
        let source = "- $one$$一\n- two\n";
        let html = render_html(source, &BilingualPolicy::new());

        assert!(html.starts_with("<ul>\n<div role=\"item\"><p>一"));
        assert!(html.contains("<li>two</li>\n"));
        assert!(html.ends_with("</ul>\n"));
    }

    #[test]
    fn renders_bilingual_paragraph_inside_loose_list() {
        let source = "- $one$$一\n\n- two\n";
        let html = render_html(source, &BilingualPolicy::new());

        assert!(html.contains("<li>\n<div role=\"item\"><p>一"));
        assert!(html.contains("<li>\n<p>two</p>\n</li>"));
    }

    #[test]
    fn escapes_before_splitting() {
        let source = "$a < b$$a 小于 b\n";
        let html = render_html(source, &BilingualPolicy::new());

        assert!(html.contains("<p role=\"ori\" class=\"ori\" hidden>a &lt; b</p>"));
    }

    #[test]
    fn sentinel_without_marker_falls_back() {
        let source = "$ not bilingual\n";

        assert_eq!(render_html(source, &BilingualPolicy::new()), "<p>$ not bilingual</p>\n");
    }

    #[test]
    fn headings_get_exact_text_anchors() {
        let source = "# Basic Types\n\n## Type assertions: `as`\n";
        let html = render_html(source, &BilingualPolicy::new());

        assert!(html.contains(
            "<h1 class=\"section-title\"><a name=\"Basic Types\" class=\"anchor\" href=\"#Basic Types\">"
        ));
        assert!(html.contains("name=\"Type assertions: as\""));
        assert!(html.contains("</a>Type assertions: <code>as</code></h2>"));
    }

    #[test]
    fn rule_separator_stays_a_rule() {
        let html = render_html("one\n\n---\n\ntwo\n", &BilingualPolicy::new());

        assert_eq!(html, "<p>one</p>\n<hr />\n<p>two</p>\n");
    }

    #[test]
    fn collects_outline() {
        let source = "# Basics\n\n## Numbers\n\ntext\n\n## Strings\n\n# Advanced\n";

        assert_eq!(
            outline(source),
            vec![
                HeadingEntry { title: "Basics".into(), level: 1 },
                HeadingEntry { title: "Numbers".into(), level: 2 },
                HeadingEntry { title: "Strings".into(), level: 2 },
                HeadingEntry { title: "Advanced".into(), level: 1 },
            ]
        );
    }
}
