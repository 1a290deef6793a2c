//! Conversion of legacy about-page sections into a [`Document`].
//!
//! Before the rich-text editor, the about page was stored as a headline, an
//! intro line and a list of sections, each with an optional title and image
//! and a list of body paragraphs.

use serde::{Deserialize, Serialize};

use crate::model::{Block, Document, Heading, Image, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_position: Option<ImagePosition>,
    #[serde(default)]
    pub body: Vec<String>,
}

/// A legacy about page as stored before the editor existed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub sections: Vec<AboutSection>,
}

impl AboutPage {
    pub fn to_document(&self) -> Document {
        sections_to_document(
            self.headline.as_deref(),
            self.intro.as_deref(),
            &self.sections,
        )
    }
}

/// Builds the document for a legacy about page.
///
/// Headline becomes an H1, intro a paragraph. Each section contributes an H2
/// title, its image, and one paragraph per non-blank body entry. An empty
/// paragraph separates consecutive sections.
pub fn sections_to_document(
    headline: Option<&str>,
    intro: Option<&str>,
    sections: &[AboutSection],
) -> Document {
    let mut out = Vec::new();

    if let Some(headline) = headline.filter(|h| !h.is_empty()) {
        out.push(Block::Heading(Heading::new(1, headline)));
    }
    if let Some(intro) = intro.filter(|i| !i.is_empty()) {
        out.push(Block::Paragraph(Paragraph::from_text(intro)));
    }

    for (index, section) in sections.iter().enumerate() {
        let title = section.title.as_deref().filter(|t| !t.is_empty());

        if let Some(title) = title {
            out.push(Block::Heading(Heading::new(2, title)));
        }
        if let Some(src) = section.image.as_deref().filter(|s| !s.is_empty()) {
            let image = Image::new(src, title.unwrap_or_default());
            out.push(Block::Image(match title {
                Some(title) => image.with_title(title),
                None => image,
            }));
        }
        out.extend(
            section
                .body
                .iter()
                .filter(|p| !p.trim().is_empty())
                .map(|p| Block::Paragraph(Paragraph::from_text(p.as_str()))),
        );

        if index + 1 < sections.len() {
            out.push(Block::Paragraph(Paragraph::default()));
        }
    }

    Document::new(out)
}
