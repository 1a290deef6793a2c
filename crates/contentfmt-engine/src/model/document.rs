use serde_json::{Map, Value};

/// Shallowest heading level the editor accepts.
pub const MIN_HEADING_LEVEL: u8 = 1;
/// Deepest heading level the editor accepts; deeper source markup clamps here.
pub const MAX_HEADING_LEVEL: u8 = 4;

/// Root of a converted content piece.
///
/// A `Document` is a value owned by whichever content record references it.
/// Zero children is valid and means empty content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    /// The editor's discriminator for the root node.
    pub const TYPE: &'static str = "doc";

    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A block-level node.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    BulletList(BulletList),
    Image(Image),
    /// A node read from stored editor JSON whose type this crate does not model.
    /// Kept verbatim so re-serialization does not lose it.
    Unknown(Value),
}

/// Editor node attributes this crate does not interpret, kept verbatim.
pub type Attrs = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    level: u8,
    pub inline: Vec<Inline>,
    /// Attributes other than `level`.
    pub attrs: Attrs,
}

impl Heading {
    /// Creates a heading, clamping `level` into the editor's supported range.
    pub fn new(level: usize, text: impl Into<String>) -> Self {
        Self::with_inline(level, Paragraph::from_text(text).inline)
    }

    pub fn with_inline(level: usize, inline: Vec<Inline>) -> Self {
        Self {
            level: clamp_level(level),
            inline,
            attrs: Attrs::new(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn text(&self) -> String {
        inline_text(&self.inline)
    }
}

/// Clamps an arbitrary source heading depth into `1..=4`.
pub fn clamp_level(level: usize) -> u8 {
    level.clamp(MIN_HEADING_LEVEL as usize, MAX_HEADING_LEVEL as usize) as u8
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub inline: Vec<Inline>,
    pub attrs: Attrs,
}

impl Paragraph {
    /// A paragraph holding a single text run. Empty text yields an empty paragraph.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let inline = if text.is_empty() {
            vec![]
        } else {
            vec![Inline::text(text)]
        };
        Self {
            inline,
            attrs: Attrs::new(),
        }
    }

    pub fn text(&self) -> String {
        inline_text(&self.inline)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulletList {
    pub items: Vec<ListItem>,
    pub attrs: Attrs,
}

impl BulletList {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: texts.into_iter().map(ListItem::from_text).collect(),
            attrs: Attrs::new(),
        }
    }
}

/// A list entry. Converted text produces a single paragraph; items written
/// by the editor may also hold further paragraphs and nested lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListItem {
    pub content: Vec<Block>,
    pub attrs: Attrs,
}

impl ListItem {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Block::Paragraph(Paragraph::from_text(text))],
            attrs: Attrs::new(),
        }
    }

    /// Text of the item's leading paragraph.
    pub fn text(&self) -> String {
        match self.content.first() {
            Some(Block::Paragraph(p)) => p.text(),
            _ => String::new(),
        }
    }
}

/// An image node. All attributes live in one map so editor extras such as
/// `width` and `alignment` survive a round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub attrs: Attrs,
}

impl Image {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        let mut attrs = Attrs::new();
        attrs.insert("src".into(), Value::String(src.into()));
        attrs.insert("alt".into(), Value::String(alt.into()));
        attrs.insert("title".into(), Value::Null);
        Self { attrs }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.attrs.insert("title".into(), Value::String(title.into()));
        self
    }

    pub fn src(&self) -> &str {
        self.attr("src").unwrap_or_default()
    }

    pub fn alt(&self) -> Option<&str> {
        self.attr("alt")
    }

    pub fn title(&self) -> Option<&str> {
        self.attr("title")
    }

    fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }
}

/// Inline content inside headings, paragraphs and list items.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// A text run. `marks` carries editor formatting marks verbatim; they are
    /// preserved across re-renders but not rendered.
    Text { value: String, marks: Vec<Value> },
    /// An image placed inside a paragraph.
    Image(Image),
    /// An inline node this crate does not model, kept verbatim.
    Unknown(Value),
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text {
            value: value.into(),
            marks: vec![],
        }
    }

    /// The plain text of this node; empty for images and unknown nodes.
    pub fn as_text(&self) -> &str {
        match self {
            Inline::Text { value, .. } => value,
            Inline::Image(_) | Inline::Unknown(_) => "",
        }
    }
}

/// Concatenates the text of a run of inline nodes.
pub fn inline_text(inline: &[Inline]) -> String {
    inline.iter().map(Inline::as_text).collect()
}
