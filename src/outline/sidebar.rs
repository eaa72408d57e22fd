//! Sidebar rendering from the heading forest.

use super::HeadingNode;

/// Render the heading forest as nested collapsible navigation markup.
///
/// A single depth-first pre-order walk in document order. Each node becomes
/// a `<li>` tagged with an `indent-{depth}` class (presentational only;
/// depth 0 at the forest root). Leaves render as bare links; headings with
/// subheadings render as an open-by-default `<details>` whose `<summary>`
/// carries the link, followed by a nested `<ul>` of children.
pub fn render_sidebar(forest: &[HeadingNode]) -> String {
    let mut out = String::from("<ul class=\"toc\">\n");
    for node in forest {
        render_item(&mut out, node, 0);
    }
    out.push_str("</ul>\n");
    out
}

fn render_item(out: &mut String, node: &HeadingNode, depth: usize) {
    out.push_str(&format!("<li class=\"toc-item indent-{depth}\">"));

    if node.children.is_empty() {
        push_link(out, node);
    } else {
        out.push_str("<details open>\n<summary>");
        push_link(out, node);
        out.push_str("</summary>\n<ul>\n");
        for child in &node.children {
            render_item(out, child, depth + 1);
        }
        out.push_str("</ul>\n</details>\n");
    }

    out.push_str("</li>\n");
}

fn push_link(out: &mut String, node: &HeadingNode) {
    out.push_str(&format!(
        "<a href=\"#{}\">{}</a>",
        escape_html(&node.anchor),
        escape_html(&node.text)
    ));
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
