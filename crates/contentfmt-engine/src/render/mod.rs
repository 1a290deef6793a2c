//! HTML rendering of a [`Document`].
//!
//! Output is an HTML fragment, one block per line, in document order. The
//! page layer injects it without further escaping, so every text and
//! attribute value is escaped here.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::{Block, Document, Heading, Image, Inline, ListItem};

/// Renders a document. An empty document renders to the empty string.
pub fn render(doc: &Document) -> String {
    doc.children
        .iter()
        .filter_map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one block; `None` for node kinds with no HTML form.
pub fn render_block(block: &Block) -> Option<String> {
    match block {
        Block::Heading(h) => Some(render_heading(h)),
        Block::Paragraph(p) => Some(format!("<p>{}</p>", render_inline(&p.inline))),
        Block::BulletList(list) => {
            let mut html = String::from("<ul>");
            for item in &list.items {
                html.push_str("<li>");
                html.push_str(&render_list_item(item));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
            Some(html)
        }
        Block::Image(img) => Some(render_image(img)),
        Block::Unknown(_) => None,
    }
}

fn render_heading(h: &Heading) -> String {
    let level = h.level();
    format!("<h{level}>{}</h{level}>", render_inline(&h.inline))
}

/// A leading paragraph renders bare inside the `<li>`; later children
/// (more paragraphs, nested lists) render as blocks after it.
fn render_list_item(item: &ListItem) -> String {
    let mut children = item.content.iter();
    let mut html = match item.content.first() {
        Some(Block::Paragraph(p)) => {
            children.next();
            render_inline(&p.inline)
        }
        _ => String::new(),
    };
    for child in children.filter_map(render_block) {
        html.push_str(&child);
    }
    html
}

fn render_image(img: &Image) -> String {
    let mut html = format!(
        "<img src=\"{}\" alt=\"{}\"",
        encode_double_quoted_attribute(img.src()),
        encode_double_quoted_attribute(img.alt().unwrap_or_default()),
    );
    if let Some(title) = img.title().filter(|t| !t.is_empty()) {
        html.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(title)));
    }
    html.push_str(" />");
    html
}

/// Text runs are escaped and concatenated; marks and unknown inline nodes
/// are not rendered.
fn render_inline(inline: &[Inline]) -> String {
    let mut html = String::new();
    for node in inline {
        match node {
            Inline::Text { value, .. } => html.push_str(&encode_text(value)),
            Inline::Image(img) => html.push_str(&render_image(img)),
            Inline::Unknown(_) => {}
        }
    }
    html
}
