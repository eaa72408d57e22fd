//! Final page assembly.
//!
//! A page template is plain text with named slots: `{{title}}`, `{{css}}`,
//! `{{logo}}`, `{{logo_link}}`, `{{sidebar}}`, `{{content}}`. Assembly
//! substitutes each slot and leaves anything else verbatim, unknown slots
//! included. Slot values are trusted markup fragments; escaping happens
//! upstream where the fragments are produced.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Built-in page template, used when no `--template` override is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/base.html");

/// Built-in stylesheet, used when no `--css` override is given.
pub const DEFAULT_CSS: &str = include_str!("../../assets/base.css");

const DEFAULT_LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="140" height="28" viewBox="0 0 140 28">
  <path d="M2 24 L7 4 L12 24 L17 4 L22 24 L27 4" fill="none" stroke="#4A90E2" stroke-width="2" stroke-linejoin="round"/>
  <text x="36" y="20" font-family="Arial, sans-serif" font-size="16" fill="#333">Foldout</text>
</svg>"##;

/// Slot values for one page.
#[derive(Debug)]
pub struct PageSlots<'a> {
    pub title: &'a str,
    pub css: &'a str,
    pub logo: &'a str,
    pub logo_link: &'a str,
    pub sidebar: &'a str,
    pub content: &'a str,
}

/// Fill the template's named slots.
///
/// A single left-to-right scan of the template: literal text and slot
/// values are copied into a fresh buffer, and inserted values are never
/// re-scanned, so slot syntax occurring inside a value (say, a heading
/// literally titled `{{content}}`) stays inert text.
pub fn assemble(template: &str, slots: &PageSlots<'_>) -> String {
    let values = [
        ("title", slots.title),
        ("css", slots.css),
        ("logo", slots.logo),
        ("logo_link", slots.logo_link),
        ("sidebar", slots.sidebar),
        ("content", slots.content),
    ];

    let mut page = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = &after[..end];
        match values.iter().find(|(slot, _)| *slot == name) {
            Some((_, value)) => {
                page.push_str(&rest[..start]);
                page.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                // Unknown slot stays verbatim.
                page.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
        }
    }
    page.push_str(rest);
    page
}

/// How the page logo is chosen.
#[derive(Debug)]
pub enum LogoSource<'a> {
    /// Explicit path from the user. Unreadable is fatal: an override the
    /// user asked for must not be silently ignored.
    Explicit(&'a Path),
    /// Probe `logo.svg` under the input directory, else use the built-in
    /// logo.
    Auto(&'a Path),
}

/// Resolve the logo markup for a page.
pub fn resolve_logo(source: LogoSource<'_>) -> Result<String> {
    match source {
        LogoSource::Explicit(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        }),
        LogoSource::Auto(dir) => {
            let probe = dir.join("logo.svg");
            match fs::read_to_string(&probe) {
                Ok(svg) => Ok(svg),
                Err(_) => Ok(DEFAULT_LOGO.to_string()),
            }
        }
    }
}
