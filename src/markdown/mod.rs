//! Markdown engine wrapper.
//!
//! Drives pulldown-cmark with GitHub-flavored extensions, assigns anchor ids
//! to headings, and renders the document body to HTML:
//!
//! - [`slugify`]: GitHub-style slug generation and collision handling
//! - [`parse_document`]: source text → id-annotated event stream
//! - [`render_body`]: id-annotated events → HTML body fragment
//!
//! Anchor assignment lives here, not in the outline core: by the time events
//! reach extraction, every heading already carries its id. An explicit
//! `{#id}` attribute wins over the generated slug; either way the id passes
//! through [`AnchorSet`] so anchors stay unique within the document.

mod slugify;

pub use slugify::{AnchorSet, slugify};

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

fn parse_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// Parse a document into an event stream with every heading carrying an
/// anchor id.
pub fn parse_document(markdown: &str) -> Vec<Event<'_>> {
    let events: Vec<Event> = Parser::new_ext(markdown, parse_options()).collect();
    assign_anchors(events)
}

/// Render the id-annotated events to an HTML body fragment.
pub fn render_body(events: Vec<Event<'_>>) -> String {
    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    out
}

/// Attach an anchor id to every heading start tag.
///
/// Slugs come from the heading's full text content (code spans included),
/// matching the auto-id behavior users know from GitHub.
fn assign_anchors(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    // Pass 1: decide an id per heading, in document order.
    let mut anchors = AnchorSet::new();
    let mut ids = Vec::new();
    let mut open: Option<(Option<String>, String)> = None;

    for event in &events {
        match event {
            Event::Start(Tag::Heading { id, .. }) => {
                open = Some((id.as_ref().map(|id| id.to_string()), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((explicit, text)) = open.take() {
                    let id = match explicit {
                        Some(id) => anchors.assign(&id),
                        None => anchors.assign(&slugify(&text)),
                    };
                    ids.push(id);
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, text)) = open.as_mut() {
                    text.push_str(t);
                }
            }
            _ => {}
        }
    }

    // Pass 2: inject the ids into the heading start tags.
    let mut ids = ids.into_iter();
    events
        .into_iter()
        .map(|event| match event {
            Event::Start(Tag::Heading {
                level,
                classes,
                attrs,
                ..
            }) => {
                let id = ids.next().map(|id| CowStr::Boxed(id.into_boxed_str()));
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                })
            }
            other => other,
        })
        .collect()
}
