//! The conversion entry point: authored text or a stored document in,
//! `{ document, html }` out.

use serde::Serialize;
use serde_json::Value;

use crate::error::ConvertError;
use crate::model::{Document, is_document};
use crate::parsing::{ConvertOptions, Dialect, parse_document};
use crate::render::render;

/// What callers can hand to [`convert`].
#[derive(Debug, Clone)]
pub enum ConvertInput<'a> {
    /// Raw authored text in the given dialect.
    Text(&'a str),
    /// An already structured document; only its HTML is regenerated.
    Document(Document),
    /// A stored JSON column value: a string is text, a `"doc"` object is a document.
    Json(Value),
}

impl<'a> From<&'a str> for ConvertInput<'a> {
    fn from(text: &'a str) -> Self {
        ConvertInput::Text(text)
    }
}

impl From<Document> for ConvertInput<'_> {
    fn from(doc: Document) -> Self {
        ConvertInput::Document(doc)
    }
}

impl From<Value> for ConvertInput<'_> {
    fn from(value: Value) -> Self {
        ConvertInput::Json(value)
    }
}

/// Output of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Converted {
    pub document: Document,
    pub html: String,
}

pub fn convert<'a>(
    input: impl Into<ConvertInput<'a>>,
    dialect: Dialect,
) -> Result<Converted, ConvertError> {
    convert_with(input, dialect, &ConvertOptions::default())
}

/// Converts with explicit options.
///
/// A document input is returned unchanged with freshly rendered HTML, so
/// converting the output of a previous conversion never re-parses it.
pub fn convert_with<'a>(
    input: impl Into<ConvertInput<'a>>,
    dialect: Dialect,
    options: &ConvertOptions,
) -> Result<Converted, ConvertError> {
    let document = match input.into() {
        ConvertInput::Text(text) => {
            let doc = parse_document(text, dialect, options);
            log::debug!(
                "converted {} bytes of {dialect} text into {} blocks",
                text.len(),
                doc.children.len()
            );
            doc
        }
        ConvertInput::Document(doc) => {
            log::debug!("re-rendering structured document ({} blocks)", doc.children.len());
            doc
        }
        ConvertInput::Json(Value::String(text)) => parse_document(&text, dialect, options),
        ConvertInput::Json(value) if is_document(&value) => Document::from_json(&value)?,
        ConvertInput::Json(other) => {
            return Err(ConvertError::InvalidInputKind {
                found: json_kind(&other),
            });
        }
    };

    let html = render(&document);
    Ok(Converted { document, html })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without a \"doc\" type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BulletList, Heading, Paragraph};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_input_yields_empty_document_and_html() {
        let out = convert("", Dialect::Plain).unwrap();
        assert_eq!(out.document.to_json(), json!({ "type": "doc", "content": [] }));
        assert_eq!(out.html, "");
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        let out = convert("  \n\t\n   ", Dialect::Markdown).unwrap();
        assert!(out.document.is_empty());
        assert_eq!(out.html, "");
    }

    #[test]
    fn markdown_heading() {
        let out = convert("## Title", Dialect::Markdown).unwrap();
        assert_eq!(out.document.children, vec![Block::Heading(Heading::new(2, "Title"))]);
        assert_eq!(out.html, "<h2>Title</h2>");
    }

    #[test]
    fn six_hashes_clamp_to_level_four() {
        let out = convert("###### Deep", Dialect::Markdown).unwrap();
        assert_eq!(out.document.children, vec![Block::Heading(Heading::new(4, "Deep"))]);
        assert_eq!(out.html, "<h4>Deep</h4>");
    }

    #[test]
    fn three_bullets_make_one_list() {
        let out = convert("- a\n- b\n- c", Dialect::Markdown).unwrap();
        assert_eq!(
            out.document.children,
            vec![Block::BulletList(BulletList::from_texts(["a", "b", "c"]))]
        );
    }

    #[test]
    fn two_text_lines_make_one_paragraph() {
        let out = convert("first line\nsecond line", Dialect::Markdown).unwrap();
        assert_eq!(
            out.document.children,
            vec![Block::Paragraph(Paragraph::from_text("first line second line"))]
        );
    }

    #[test]
    fn script_tags_are_escaped() {
        let out = convert("hello <script>alert(1)</script>", Dialect::Markdown).unwrap();
        assert!(!out.html.contains("<script>"));
        assert!(out.html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_input_is_returned_unchanged() {
        let first = convert("## A\n\ntext\n- x", Dialect::Markdown).unwrap();
        let second = convert(first.document.clone(), Dialect::Plain).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn json_document_input_is_not_reparsed() {
        let stored = json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{ "type": "text", "text": "## not a heading" }],
            }],
        });
        let out = convert(stored, Dialect::Markdown).unwrap();
        assert_eq!(out.html, "<p>## not a heading</p>");
    }

    #[test]
    fn json_string_input_is_parsed_as_text() {
        let out = convert(json!("## Title"), Dialect::Markdown).unwrap();
        assert_eq!(out.html, "<h2>Title</h2>");
    }

    #[test]
    fn other_json_is_an_invalid_input_kind() {
        for value in [json!(42), json!(null), json!([1, 2]), json!({ "type": "paragraph" })] {
            assert!(matches!(
                convert(value, Dialect::Plain),
                Err(ConvertError::InvalidInputKind { .. })
            ));
        }
    }

    #[test]
    fn converted_serializes_editor_shape() {
        let out = convert("## T", Dialect::Markdown).unwrap();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["document"]["type"], "doc");
        assert_eq!(value["document"]["content"][0]["attrs"]["level"], 2);
        assert_eq!(value["html"], "<h2>T</h2>");
    }
}
