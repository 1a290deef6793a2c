//! # Text Parsing
//!
//! Two-phase conversion of authored text into a [`Document`].
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    into a [`ClassifiedLine`] (blank, heading, bullet, text). Which rules apply
//!    depends on the [`Dialect`] and the [`ConvertOptions`].
//!
//! 2. **Document Construction** (`builder`): a [`DocumentBuilder`] consumes the
//!    classified lines left to right, merging consecutive bullets into one list
//!    and consecutive text lines into one paragraph.
//!
//! ## Modules
//!
//! - **`kinds`**: per-syntax marker knowledge (`#` headings, bullet glyphs,
//!   the plain-text heading heuristic, bold markers)
//! - **`classify`**: `LineClassifier` produces a `ClassifiedLine` per line
//! - **`builder`**: `DocumentBuilder` state machine for block construction

pub mod builder;
pub mod classify;
pub mod kinds;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use builder::{DocumentBuilder, build};
pub use classify::{ClassifiedLine, LineClassifier};

use crate::model::Document;

/// Which source syntax rules apply while classifying lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Freeform text: bullet glyphs (including legacy ones) and the
    /// short-capitalized-line heading heuristic.
    #[default]
    Plain,
    /// Explicit `#` headings and `-` bullets.
    Markdown,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Plain => "plain",
            Dialect::Markdown => "markdown",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dialect {0:?}: expected \"plain\" or \"markdown\"")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(Dialect::Plain),
            "markdown" | "md" => Ok(Dialect::Markdown),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Switches for the behaviour variants the site's content has accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Plain dialect: treat short lines starting with a capital letter as headings.
    pub plain_heading_detection: bool,
    /// Heading level given to heuristically detected plain-text headings.
    pub plain_heading_level: u8,
    /// A plain line must be shorter than this (in characters) to be a heading.
    pub plain_heading_max_chars: usize,
    /// Plain dialect: accept legacy bullet glyphs (`→`, mis-decoded `•`, keycap digits).
    pub legacy_bullets: bool,
    /// Markdown dialect: remove `**` from heading and bullet text.
    pub strip_bold_markers: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            plain_heading_detection: true,
            plain_heading_level: 3,
            plain_heading_max_chars: 100,
            legacy_bullets: true,
            strip_bold_markers: true,
        }
    }
}

/// Classifies every line of `raw` with the default options.
pub fn parse_lines(raw: &str, dialect: Dialect) -> Vec<ClassifiedLine> {
    parse_lines_with(raw, dialect, &ConvertOptions::default())
}

pub fn parse_lines_with(raw: &str, dialect: Dialect, options: &ConvertOptions) -> Vec<ClassifiedLine> {
    let classifier = LineClassifier::new(dialect, options);
    raw.split('\n').map(|line| classifier.classify(line)).collect()
}

/// Parses and builds in one pass without materializing the line list.
pub fn parse_document(raw: &str, dialect: Dialect, options: &ConvertOptions) -> Document {
    let classifier = LineClassifier::new(dialect, options);
    let mut builder = DocumentBuilder::new();

    for line in raw.split('\n') {
        builder.push(classifier.classify(line));
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_parses_aliases() {
        assert_eq!("md".parse::<Dialect>().unwrap(), Dialect::Markdown);
        assert_eq!("Plain".parse::<Dialect>().unwrap(), Dialect::Plain);
        assert!("html".parse::<Dialect>().is_err());
    }

    #[test]
    fn dialect_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Dialect::Markdown).unwrap(),
            "\"markdown\""
        );
    }

    #[test]
    fn parse_lines_yields_one_entry_per_line() {
        let lines = parse_lines("a\n\nb", Dialect::Markdown);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], ClassifiedLine::Blank);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ConvertOptions = serde_json::from_str(r#"{"legacy_bullets": false}"#).unwrap();
        assert!(!options.legacy_bullets);
        assert!(options.plain_heading_detection);
        assert_eq!(options.plain_heading_level, 3);
    }
}
