use maud::{html, Markup, PreEscaped};
use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render model-written markdown. Raw HTML in the source is shown as text
/// and script-scheme links are neutralised.
pub fn markdown(source: &str) -> Markup {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            Event::Start(Tag::Link(kind, dest, title)) => {
                Event::Start(Tag::Link(kind, safe_href(dest), title))
            }
            Event::Start(Tag::Image(kind, dest, title)) => {
                Event::Start(Tag::Image(kind, safe_href(dest), title))
            }
            other => other,
        });

    let mut out = String::new();
    push_html(&mut out, parser);

    html! {
        div class="markdown" { (PreEscaped(out)) }
    }
}

fn safe_href(dest: CowStr<'_>) -> CowStr<'_> {
    let lowered = dest.trim().to_ascii_lowercase();
    if lowered.starts_with("javascript:") || lowered.starts_with("data:") || lowered.starts_with("vbscript:") {
        CowStr::Borrowed("#")
    } else {
        dest
    }
}
