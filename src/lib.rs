//! # foldout
//!
//! Folds a directory of Markdown documents into a single static HTML page
//! with an auto-generated, collapsible table of contents.
//!
//! The interesting part is the outline pipeline: the Markdown engine emits
//! a flat sequence of heading events (level, text, anchor id), the
//! synthesizer rebuilds the nesting they imply as a forest, and the sidebar
//! renderer serializes the forest into nested `<details>` navigation
//! markup. Malformed level sequences (skipped, repeated, out-of-order) are
//! all accepted and produce a well-formed tree.
//!
//! ## Quick Start
//!
//! ```
//! use foldout::compile::{PageConfig, compile_page};
//! use foldout::page::{DEFAULT_CSS, DEFAULT_TEMPLATE};
//!
//! let config = PageConfig {
//!     title: "Docs".into(),
//!     logo_link: "/".into(),
//! };
//! let page = compile_page(
//!     "# Hello\n\n## World\n",
//!     DEFAULT_TEMPLATE,
//!     DEFAULT_CSS,
//!     "<svg/>",
//!     &config,
//! )
//! .unwrap();
//!
//! assert!(page.contains("<h1 id=\"hello\">Hello</h1>"));
//! assert!(page.contains("<summary><a href=\"#hello\">Hello</a></summary>"));
//! ```
//!
//! ## Working with Outlines
//!
//! The core types are usable on their own:
//!
//! ```
//! use foldout::{HeadingEvent, build_outline, render_sidebar};
//!
//! let events = vec![
//!     HeadingEvent { level: 1, text: "A".into(), anchor: "a".into() },
//!     HeadingEvent { level: 2, text: "B".into(), anchor: "b".into() },
//! ];
//! let forest = build_outline(events);
//! assert_eq!(forest[0].children[0].text, "B");
//!
//! let sidebar = render_sidebar(&forest);
//! assert!(sidebar.contains("<details open>"));
//! ```

pub mod compile;
pub mod error;
pub mod markdown;
pub mod outline;
pub mod page;

pub use compile::{PageConfig, compile_page};
pub use error::{Error, Result};
pub use outline::{HeadingEvent, HeadingNode, build_outline, extract_headings, render_sidebar};
