//! Populating the derived content columns of stored records.
//!
//! A content record has raw `content` plus two derived, nullable columns:
//! `contentJson` (the editor document) and `contentHtml`. Migration fills in
//! whichever are missing and leaves complete records alone.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::convert::{ConvertInput, convert_with};
use crate::error::ConvertError;
use crate::model::is_document;
use crate::parsing::{ConvertOptions, Dialect};

/// A stored content record (blog post, about-page entry).
///
/// Columns this crate does not touch are carried in `extra` so a record can be
/// written back without losing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_json: Option<Value>,
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            content_json: None,
            content_html: None,
            extra: Map::new(),
        }
    }

    fn has_json(&self) -> bool {
        self.content_json.is_some()
    }

    fn has_html(&self) -> bool {
        self.content_html.as_deref().is_some_and(|h| !h.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Text, from `content` or stored in `contentJson`, was converted into
    /// both derived columns.
    Converted,
    /// A stored document was kept and only its HTML regenerated.
    Rendered,
    /// Both derived columns were already present.
    Skipped,
}

#[derive(Debug)]
pub struct MigrationFailure {
    pub id: String,
    pub error: ConvertError,
}

#[derive(Debug, Default)]
pub struct MigrationReport {
    pub converted: usize,
    pub rendered: usize,
    pub skipped: usize,
    pub failed: Vec<MigrationFailure>,
}

impl MigrationReport {
    pub fn total(&self) -> usize {
        self.converted + self.rendered + self.skipped + self.failed.len()
    }

    pub fn updated(&self) -> usize {
        self.converted + self.rendered
    }

    fn record(&mut self, id: &str, result: Result<MigrationOutcome, ConvertError>) {
        match result {
            Ok(MigrationOutcome::Converted) => self.converted += 1,
            Ok(MigrationOutcome::Rendered) => self.rendered += 1,
            Ok(MigrationOutcome::Skipped) => self.skipped += 1,
            Err(error) => self.failed.push(MigrationFailure {
                id: id.to_string(),
                error,
            }),
        }
    }
}

/// Fills in a record's missing derived columns.
pub fn migrate_record(
    record: &mut ContentRecord,
    dialect: Dialect,
    options: &ConvertOptions,
) -> Result<MigrationOutcome, ConvertError> {
    if record.has_json() && record.has_html() {
        log::debug!("skipping {}: already has editor content", record.id);
        return Ok(MigrationOutcome::Skipped);
    }

    if let Some(stored) = record.content_json.clone() {
        let was_document = is_document(&stored);
        let out = convert_with(ConvertInput::Json(stored), dialect, options)?;
        record.content_html = Some(out.html);
        if was_document {
            log::info!("re-rendered HTML for {}", record.id);
            return Ok(MigrationOutcome::Rendered);
        }
        // Text stored in the JSON column is replaced by its document
        record.content_json = Some(out.document.to_json());
        log::info!("converted stored text for {}", record.id);
        return Ok(MigrationOutcome::Converted);
    }

    let out = convert_with(record.content.as_str(), dialect, options)?;
    record.content_json = Some(out.document.to_json());
    record.content_html = Some(out.html);
    log::info!("converted {} ({} blocks)", record.id, out.document.children.len());
    Ok(MigrationOutcome::Converted)
}

/// Migrates every record. A failing record is reported and does not stop the batch.
pub fn migrate_records(
    records: &mut [ContentRecord],
    dialect: Dialect,
    options: &ConvertOptions,
) -> MigrationReport {
    let results = run_all(records, dialect, options);

    let mut report = MigrationReport::default();
    for (record, result) in records.iter().zip(results) {
        if let Err(e) = &result {
            log::warn!("failed to migrate {}: {e}", record.id);
        }
        report.record(&record.id, result);
    }

    log::info!(
        "migration finished: {} converted, {} rendered, {} skipped, {} failed",
        report.converted,
        report.rendered,
        report.skipped,
        report.failed.len()
    );
    report
}

#[cfg(not(feature = "parallel"))]
fn run_all(
    records: &mut [ContentRecord],
    dialect: Dialect,
    options: &ConvertOptions,
) -> Vec<Result<MigrationOutcome, ConvertError>> {
    records
        .iter_mut()
        .map(|r| migrate_record(r, dialect, options))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_all(
    records: &mut [ContentRecord],
    dialect: Dialect,
    options: &ConvertOptions,
) -> Vec<Result<MigrationOutcome, ConvertError>> {
    use rayon::prelude::*;

    records
        .par_iter_mut()
        .map(|r| migrate_record(r, dialect, options))
        .collect()
}
