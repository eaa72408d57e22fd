//! Slug generation for heading anchors.
//!
//! GitHub-style slugs plus per-document collision handling. Anchor
//! uniqueness is this layer's job; the outline core assumes it.

use std::collections::HashMap;

/// Generate a GitHub-style slug from heading text.
///
/// Lowercases ASCII alphanumerics, turns whitespace runs into single
/// hyphens, and drops everything else, including leading and trailing
/// hyphens.
///
/// # Examples
///
/// ```
/// use foldout::markdown::slugify;
///
/// assert_eq!(slugify("Chapter One"), "chapter-one");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                // Skip other characters
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Tracks the anchors handed out within one document.
///
/// Duplicate candidates get `-1`, `-2`, ... suffixes; an empty candidate
/// (heading text with no sluggable characters) falls back to `section`.
#[derive(Debug, Default)]
pub struct AnchorSet {
    seen: HashMap<String, usize>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a unique anchor for `candidate`.
    pub fn assign(&mut self, candidate: &str) -> String {
        let base = if candidate.is_empty() {
            "section"
        } else {
            candidate
        };

        let count = self.seen.get(base).copied().unwrap_or(0);
        if count == 0 {
            self.seen.insert(base.to_string(), 1);
            return base.to_string();
        }

        // A literal "intro-1" may already be taken, so probe upward.
        let mut n = count;
        let mut anchor = format!("{base}-{n}");
        while self.seen.contains_key(&anchor) {
            n += 1;
            anchor = format!("{base}-{n}");
        }
        self.seen.insert(base.to_string(), n + 1);
        self.seen.insert(anchor.clone(), 1);
        anchor
    }
}
