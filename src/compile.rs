//! The compilation pipeline: Markdown in, finished page out.
//!
//! One compilation is a straight line with no retained state: parse, assign
//! anchors, extract heading events, synthesize the outline, render the
//! sidebar and body, fill the template. Extraction is the only step that
//! can fail; nothing is written when it does.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::markdown;
use crate::outline::{self, HeadingNode};
use crate::page::{self, PageSlots};

/// Per-page settings threaded through compilation.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub title: String,
    pub logo_link: String,
}

/// Compile one Markdown document into a finished page.
pub fn compile_page(
    markdown_text: &str,
    template: &str,
    css: &str,
    logo: &str,
    config: &PageConfig,
) -> Result<String> {
    let events = markdown::parse_document(markdown_text);
    let headings = outline::extract_headings(&events)?;
    let forest = outline::build_outline(headings);
    let sidebar = outline::render_sidebar(&forest);
    let content = markdown::render_body(events);

    Ok(page::assemble(
        template,
        &PageSlots {
            title: &config.title,
            css,
            logo,
            logo_link: &config.logo_link,
            sidebar: &sidebar,
            content: &content,
        },
    ))
}

/// Synthesize just the heading forest of a document.
pub fn compile_outline(markdown_text: &str) -> Result<Vec<HeadingNode>> {
    let events = markdown::parse_document(markdown_text);
    let headings = outline::extract_headings(&events)?;
    Ok(outline::build_outline(headings))
}

/// Concatenate every `*.md` file under `dir`, recursively.
///
/// Files are visited in sorted path order so the combined document, and
/// with it the whole page, is deterministic. Each file is followed by a
/// blank line so documents cannot run together. Symlinks are not
/// followed: a link back into the tree would duplicate its documents.
pub fn collect_markdown(dir: &Path) -> Result<String> {
    let mut combined = String::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf());
            Error::Read {
                path,
                source: err.into(),
            }
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md") {
            let text = fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            combined.push_str(&text);
            combined.push_str("\n\n");
        }
    }

    Ok(combined)
}
