use super::classify::ClassifiedLine;
use crate::model::{Block, BulletList, Document, Heading, Paragraph};

/// Accumulates classified lines into a [`Document`].
///
/// Holds two pending buffers: paragraph fragments and list item texts.
/// Consecutive text lines join into one paragraph; consecutive bullets merge
/// into one list. Each buffer is flushed when a line of another kind arrives.
pub struct DocumentBuilder {
    paragraph: Vec<String>,
    list: Vec<String>,
    out: Vec<Block>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            paragraph: vec![],
            list: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        match line {
            ClassifiedLine::Blank => {
                self.flush_paragraph();
                self.flush_list();
            }
            ClassifiedLine::Heading { level, text } => {
                self.flush_paragraph();
                self.flush_list();
                self.out
                    .push(Block::Heading(Heading::new(level as usize, text)));
            }
            ClassifiedLine::Bullet { text } => {
                self.flush_paragraph();
                self.list.push(text);
            }
            ClassifiedLine::Text { text } => {
                self.flush_list();
                self.paragraph.push(text);
            }
        }
    }

    pub fn finish(mut self) -> Document {
        // EOF flush
        self.flush_paragraph();
        self.flush_list();
        Document::new(self.out)
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let joined = self.paragraph.join(" ");
        self.paragraph.clear();
        let text = joined.trim();
        if !text.is_empty() {
            self.out.push(Block::Paragraph(Paragraph::from_text(text)));
        }
    }

    fn flush_list(&mut self) {
        if self.list.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.list);
        self.out.push(Block::BulletList(BulletList::from_texts(items)));
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a document from an already classified line sequence.
pub fn build<I>(lines: I) -> Document
where
    I: IntoIterator<Item = ClassifiedLine>,
{
    let mut builder = DocumentBuilder::new();
    for line in lines {
        builder.push(line);
    }
    builder.finish()
}
