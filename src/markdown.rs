//! Inline Markdown
//!
//! Renders the short markdown fields of the content (about paragraphs,
//! descriptions) with pulldown-cmark, plus two extensions:
//! - Accent colour syntax: %p%open source%p%
//! - Absolute links open in a new tab

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Accent codes and their hex values
const COLORS: &[(&str, &str)] = &[
    ("c", "#22d3ee"), // cyan
    ("p", "#c084fc"), // purple
    ("k", "#f472b6"), // pink
    ("g", "#34d399"), // green
];

/// Parse markdown with all extensions enabled
fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // One entry per open link: whether we replaced its opening tag
    let mut open_links: Vec<bool> = Vec::new();
    // The parser splits text at entities and escapes
    let mut pending = String::new();

    for event in parser {
        if let Event::Text(text) = &event {
            pending.push_str(text);
            continue;
        }
        flush_text(&mut events, &mut pending);

        match event {
            Event::Start(Tag::Link { dest_url, title, .. }) if is_external(&dest_url) => {
                let title_attr = if title.is_empty() {
                    String::new()
                } else {
                    format!(r#" title="{}""#, escape_html(&title))
                };
                events.push(Event::Html(CowStr::from(format!(
                    r#"<a href="{}"{} target="_blank" rel="noopener noreferrer">"#,
                    escape_html(&dest_url),
                    title_attr
                ))));
                open_links.push(true);
            }
            Event::Start(link @ Tag::Link { .. }) => {
                events.push(Event::Start(link));
                open_links.push(false);
            }
            Event::End(TagEnd::Link) => {
                if open_links.pop().unwrap_or(false) {
                    events.push(Event::Html(CowStr::from("</a>")));
                } else {
                    events.push(Event::End(TagEnd::Link));
                }
            }
            other => events.push(other),
        }
    }
    flush_text(&mut events, &mut pending);

    events
}

/// Emit buffered text as one run, splitting out colour spans
fn flush_text<'a>(events: &mut Vec<Event<'a>>, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    let text = std::mem::take(pending);
    if contains_color_syntax(&text) {
        events.extend(process_color_events(&text));
    } else {
        events.push(Event::Text(CowStr::from(text)));
    }
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn contains_color_syntax(text: &str) -> bool {
    COLORS.iter().any(|(code, _)| text.contains(&format!("%{}%", code)))
}

/// Split text on %x%...%x% markers into text and coloured spans.
/// An unmatched marker is kept as literal text.
fn process_color_events(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text.to_string();

    while !remaining.is_empty() {
        let earliest = COLORS
            .iter()
            .filter_map(|(code, color)| {
                let pattern = format!("%{}%", code);
                remaining.find(&pattern).map(|pos| (pos, pattern, *color))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, color)) = earliest else {
            events.push(Event::Text(CowStr::from(remaining)));
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        remaining = remaining[pos + pattern.len()..].to_string();

        match remaining.find(&pattern) {
            Some(end_pos) => {
                events.push(Event::Html(CowStr::from(format!("<span style=\"color: {}\">", color))));
                if end_pos > 0 {
                    events.push(Event::Text(CowStr::from(remaining[..end_pos].to_string())));
                }
                events.push(Event::Html(CowStr::from("</span>")));
                remaining = remaining[end_pos + pattern.len()..].to_string();
            }
            None => events.push(Event::Text(CowStr::from(pattern))),
        }
    }
    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("a **bold** move"), "a <strong>bold</strong> move");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(parse_markdown_inline("1 < 2"), "1 &lt; 2");
    }

    #[test]
    fn test_color_span() {
        assert_eq!(
            parse_markdown_inline("love %p%open source%p% work"),
            "love <span style=\"color: #c084fc\">open source</span> work"
        );
    }

    #[test]
    fn test_unmatched_color_marker_is_literal() {
        assert_eq!(parse_markdown_inline("50%c% off"), "50%c% off");
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = parse_markdown_inline("see [site](https://example.com)");
        assert_eq!(
            html,
            r#"see <a href="https://example.com" target="_blank" rel="noopener noreferrer">site</a>"#
        );
    }

    #[test]
    fn test_anchor_link_is_untouched() {
        let html = parse_markdown_inline("[contact](#contact)");
        assert_eq!(html, r##"<a href="#contact">contact</a>"##);
    }

    #[test]
    fn test_color_span_across_entity() {
        assert_eq!(
            parse_markdown_inline("%p%C++ &amp; Rust%p%"),
            "<span style=\"color: #c084fc\">C++ &amp; Rust</span>"
        );
    }

    #[test]
    fn test_color_span_across_escape() {
        assert_eq!(
            parse_markdown_inline(r"%g%a \* b%g% done"),
            "<span style=\"color: #34d399\">a * b</span> done"
        );
    }

    #[test]
    fn test_color_span_inside_link_text() {
        let html = parse_markdown_inline("[%c%docs%c%](#about)");
        assert_eq!(html, r##"<a href="#about"><span style="color: #22d3ee">docs</span></a>"##);
    }
}
