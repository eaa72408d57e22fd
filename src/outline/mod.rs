//! Heading outline synthesis and sidebar rendering.
//!
//! A parsed document yields a flat, ordered sequence of heading events
//! (nesting level, display text, anchor id). This module rebuilds the
//! hierarchy those levels imply and renders it as collapsible navigation
//! markup:
//!
//! - [`extract`]: heading events from the Markdown engine's event stream
//! - [`tree`]: flat events → nested forest (ancestor-stack synthesis)
//! - [`sidebar`]: forest → nested `<details>` navigation markup
//!
//! Synthesis and rendering are total, pure functions; only extraction can
//! fail (a heading without an anchor id). Level values are treated purely as
//! relative ordering keys: skipped, repeated, and out-of-order levels all
//! produce a well-formed forest with every event represented exactly once.

mod extract;
mod sidebar;
mod tree;

pub use extract::extract_headings;
pub use sidebar::render_sidebar;
pub use tree::build_outline;

/// One detected heading occurrence, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEvent {
    /// Declared nesting depth (1 for a top-level heading, 2 for a
    /// subheading, ...). Unbounded; never validated against a range.
    pub level: u32,
    /// Flattened display text.
    pub text: String,
    /// Same-page navigation target, unique within the document.
    pub anchor: String,
}

/// A heading and its nested subheadings.
///
/// Every child's level is strictly greater than its parent's, and siblings
/// keep their document order. Built once per compilation, never mutated
/// after synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct HeadingNode {
    pub level: u32,
    pub text: String,
    pub anchor: String,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<HeadingNode>,
}
