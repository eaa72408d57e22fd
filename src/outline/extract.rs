//! Heading event extraction from the parsed Markdown event stream.

use pulldown_cmark::{Event, Tag, TagEnd};

use super::HeadingEvent;
use crate::error::{Error, Result};

/// A heading whose end tag has not been seen yet.
struct OpenHeading {
    level: u32,
    anchor: Option<String>,
    text: String,
    /// Depth of inline tags opened inside the heading. Only text at depth 0
    /// (direct runs) contributes to the display text.
    nested: usize,
}

/// Collect heading events from a parsed document, in document order.
///
/// Display text is the concatenation of each heading's direct text runs;
/// text nested inside inline formatting (emphasis, links, ...) is ignored,
/// as are code spans. Every heading must already carry an anchor id,
/// assigned by the engine's auto-anchor pass: the first heading without one
/// aborts extraction with [`Error::MissingAnchor`] and no partial sequence
/// escapes.
pub fn extract_headings(events: &[Event<'_>]) -> Result<Vec<HeadingEvent>> {
    let mut headings = Vec::new();
    let mut open: Option<OpenHeading> = None;

    for event in events {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                open = Some(OpenHeading {
                    level: *level as u32,
                    anchor: id.as_ref().map(|id| id.to_string()),
                    text: String::new(),
                    nested: 0,
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(done) = open.take() {
                    let Some(anchor) = done.anchor else {
                        return Err(Error::MissingAnchor(done.text));
                    };
                    headings.push(HeadingEvent {
                        level: done.level,
                        text: done.text,
                        anchor,
                    });
                }
            }
            Event::Start(_) => {
                if let Some(heading) = open.as_mut() {
                    heading.nested += 1;
                }
            }
            Event::End(_) => {
                if let Some(heading) = open.as_mut()
                    && heading.nested > 0
                {
                    heading.nested -= 1;
                }
            }
            Event::Text(text) => {
                if let Some(heading) = open.as_mut()
                    && heading.nested == 0
                {
                    heading.text.push_str(text);
                }
            }
            _ => {}
        }
    }

    Ok(headings)
}
