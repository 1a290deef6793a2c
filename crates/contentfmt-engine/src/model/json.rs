//! Mapping between [`Document`] and the rich-text editor's node-tree JSON.
//!
//! The editor expects exactly these tags: `doc`, `heading`, `paragraph`,
//! `bulletList`, `listItem`, `image`, `text`. Heading depth lives under
//! `attrs.level`; list items wrap their text in a `paragraph`.
//! Empty text nodes are never emitted because the editor rejects them.
//!
//! Reading is lossless: attributes and marks are carried through, and any
//! node that does not fit the modelled shape is kept verbatim.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value, json};

use super::document::{
    Attrs, Block, BulletList, Document, Heading, Image, Inline, ListItem, Paragraph,
};
use crate::error::ConvertError;

pub mod tag {
    pub const DOC: &str = "doc";
    pub const HEADING: &str = "heading";
    pub const PARAGRAPH: &str = "paragraph";
    pub const BULLET_LIST: &str = "bulletList";
    pub const LIST_ITEM: &str = "listItem";
    pub const IMAGE: &str = "image";
    pub const TEXT: &str = "text";
}

/// Returns true if `value` carries the `"type": "doc"` discriminator.
pub fn is_document(value: &Value) -> bool {
    node_type(value) == Some(tag::DOC)
}

fn node_type(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

impl Document {
    pub fn to_json(&self) -> Value {
        let content: Vec<Value> = self.children.iter().map(Block::to_json).collect();
        json!({ "type": tag::DOC, "content": content })
    }

    /// Reads a document from editor JSON.
    ///
    /// Nodes whose type or shape this crate does not model are kept as
    /// [`Block::Unknown`], so `from_json(v)?.to_json()` gives back `v`. A
    /// missing `content` key is an empty document.
    pub fn from_json(value: &Value) -> Result<Self, ConvertError> {
        if !is_document(value) {
            return Err(ConvertError::MalformedDocument(
                "root node is not of type \"doc\"".into(),
            ));
        }
        let children = content_of(value)?
            .iter()
            .map(Block::from_json)
            .collect::<Result<_, _>>()?;
        Ok(Document { children })
    }
}

impl Block {
    pub fn to_json(&self) -> Value {
        match self {
            Block::Heading(h) => {
                let mut attrs = h.attrs.clone();
                attrs.insert("level".into(), h.level().into());
                node(tag::HEADING, &attrs, inline_json(&h.inline))
            }
            Block::Paragraph(p) => node(tag::PARAGRAPH, &p.attrs, inline_json(&p.inline)),
            Block::BulletList(list) => {
                let items = list.items.iter().map(ListItem::to_json).collect();
                node(tag::BULLET_LIST, &list.attrs, items)
            }
            Block::Image(img) => node(tag::IMAGE, &img.attrs, vec![]),
            Block::Unknown(raw) => raw.clone(),
        }
    }

    fn from_json(value: &Value) -> Result<Self, ConvertError> {
        let Some(kind) = node_type(value) else {
            return Err(ConvertError::MalformedDocument(format!(
                "block node without a type: {value}"
            )));
        };
        let unknown = || -> Result<Self, ConvertError> { Ok(Block::Unknown(value.clone())) };
        let Some(mut attrs) = plain_node_attrs(value) else {
            return unknown();
        };

        let block = match kind {
            tag::HEADING => {
                let Some(level) = attrs.remove("level").as_ref().and_then(Value::as_u64) else {
                    return unknown();
                };
                let mut heading = Heading::with_inline(level as usize, inlines_of(value)?);
                heading.attrs = attrs;
                Block::Heading(heading)
            }
            tag::PARAGRAPH => Block::Paragraph(Paragraph {
                inline: inlines_of(value)?,
                attrs,
            }),
            tag::BULLET_LIST => {
                let mut items = Vec::new();
                for item in content_of(value)? {
                    match ListItem::from_json(item)? {
                        Some(item) => items.push(item),
                        None => return unknown(),
                    }
                }
                Block::BulletList(BulletList { items, attrs })
            }
            tag::IMAGE if value.get("content").is_none() => Block::Image(Image { attrs }),
            _ => return unknown(),
        };
        Ok(block)
    }
}

impl ListItem {
    pub fn to_json(&self) -> Value {
        let content = self.content.iter().map(Block::to_json).collect();
        node(tag::LIST_ITEM, &self.attrs, content)
    }

    /// `None` when `value` is not a list item this crate can model.
    fn from_json(value: &Value) -> Result<Option<Self>, ConvertError> {
        if node_type(value) != Some(tag::LIST_ITEM) {
            return Ok(None);
        }
        let Some(attrs) = plain_node_attrs(value) else {
            return Ok(None);
        };
        let content = content_of(value)?
            .iter()
            .map(Block::from_json)
            .collect::<Result<_, _>>()?;
        Ok(Some(ListItem { content, attrs }))
    }
}

impl Inline {
    pub fn to_json(&self) -> Value {
        match self {
            Inline::Text { value, marks } => text_node(value, marks),
            Inline::Image(img) => node(tag::IMAGE, &img.attrs, vec![]),
            Inline::Unknown(raw) => raw.clone(),
        }
    }

    fn from_json(value: &Value) -> Self {
        let unknown = || Inline::Unknown(value.clone());
        match node_type(value) {
            Some(tag::TEXT) if has_only_keys(value, &["type", "text", "marks"]) => {
                let Some(text) = value.get("text").and_then(Value::as_str) else {
                    return unknown();
                };
                let marks = match value.get("marks") {
                    None => vec![],
                    Some(Value::Array(marks)) => marks.clone(),
                    Some(_) => return unknown(),
                };
                if text.is_empty() {
                    return unknown();
                }
                Inline::Text {
                    value: text.to_string(),
                    marks,
                }
            }
            Some(tag::IMAGE) if value.get("content").is_none() => match plain_node_attrs(value) {
                Some(attrs) => Inline::Image(Image { attrs }),
                None => unknown(),
            },
            _ => unknown(),
        }
    }
}

/// Builds an element node, omitting empty `attrs` and `content` the way the
/// editor does.
fn node(kind: &str, attrs: &Attrs, content: Vec<Value>) -> Value {
    let mut node = Map::new();
    node.insert("type".into(), kind.into());
    if !attrs.is_empty() {
        node.insert("attrs".into(), Value::Object(attrs.clone()));
    }
    if !content.is_empty() {
        node.insert("content".into(), Value::Array(content));
    }
    Value::Object(node)
}

fn text_node(text: &str, marks: &[Value]) -> Value {
    let mut node = Map::new();
    node.insert("type".into(), tag::TEXT.into());
    node.insert("text".into(), text.into());
    if !marks.is_empty() {
        node.insert("marks".into(), Value::Array(marks.to_vec()));
    }
    Value::Object(node)
}

fn inline_json(inline: &[Inline]) -> Vec<Value> {
    inline
        .iter()
        .filter(|i| !matches!(i, Inline::Text { value, .. } if value.is_empty()))
        .map(Inline::to_json)
        .collect()
}

fn has_only_keys(value: &Value, allowed: &[&str]) -> bool {
    value
        .as_object()
        .is_some_and(|obj| obj.keys().all(|k| allowed.contains(&k.as_str())))
}

/// The attrs of an element node, or `None` if the node carries keys besides
/// `type`, `attrs` and `content`, or has an `attrs` or `content` value that
/// would not be written back the same way.
fn plain_node_attrs(value: &Value) -> Option<Attrs> {
    if !has_only_keys(value, &["type", "attrs", "content"]) {
        return None;
    }
    match value.get("content") {
        None => {}
        Some(Value::Array(nodes)) if !nodes.is_empty() => {}
        Some(_) => return None,
    }
    match value.get("attrs") {
        None => Some(Attrs::new()),
        Some(Value::Object(attrs)) if !attrs.is_empty() => Some(attrs.clone()),
        Some(_) => None,
    }
}

fn content_of(value: &Value) -> Result<&[Value], ConvertError> {
    match value.get("content") {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(nodes)) => Ok(nodes),
        Some(other) => Err(ConvertError::MalformedDocument(format!(
            "\"content\" must be an array, found {other}"
        ))),
    }
}

fn inlines_of(value: &Value) -> Result<Vec<Inline>, ConvertError> {
    Ok(content_of(value)?.iter().map(Inline::from_json).collect())
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Document::from_json(&value).map_err(de::Error::custom)
    }
}
