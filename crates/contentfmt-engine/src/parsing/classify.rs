use super::kinds::{AtxHeading, Bullet, Emphasis, PlainHeading};
use super::{ConvertOptions, Dialect};
use crate::model::clamp_level;

/// Classification of a single line containing only local facts.
///
/// Phase 1 of parsing: each line is classified independently. Text fields are
/// trimmed with their markers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Blank,
    Heading { level: u8, text: String },
    Bullet { text: String },
    Text { text: String },
}

/// Classifies individual lines for the document building phase.
pub struct LineClassifier<'a> {
    dialect: Dialect,
    options: &'a ConvertOptions,
}

impl<'a> LineClassifier<'a> {
    pub fn new(dialect: Dialect, options: &'a ConvertOptions) -> Self {
        Self { dialect, options }
    }

    /// Classifies a line. First matching rule wins; every line matches some rule.
    pub fn classify(&self, line: &str) -> ClassifiedLine {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ClassifiedLine::Blank;
        }

        if self.dialect == Dialect::Markdown
            && let Some((count, rest)) = AtxHeading::split(trimmed)
        {
            return ClassifiedLine::Heading {
                level: clamp_level(count),
                text: self.marker_text(rest),
            };
        }

        let legacy = self.dialect == Dialect::Plain && self.options.legacy_bullets;
        if let Some(rest) = Bullet::strip(trimmed, legacy) {
            return ClassifiedLine::Bullet {
                text: self.marker_text(rest),
            };
        }

        if self.dialect == Dialect::Plain
            && self.options.plain_heading_detection
            && PlainHeading::matches(trimmed, self.options.plain_heading_max_chars)
        {
            return ClassifiedLine::Heading {
                level: clamp_level(self.options.plain_heading_level as usize),
                text: trimmed.to_string(),
            };
        }

        ClassifiedLine::Text {
            text: trimmed.to_string(),
        }
    }

    /// Text following a heading or bullet marker.
    fn marker_text(&self, rest: &str) -> String {
        let text = if self.dialect == Dialect::Markdown && self.options.strip_bold_markers {
            Emphasis::strip_bold(rest)
        } else {
            rest.into()
        };
        text.trim().to_string()
    }
}
