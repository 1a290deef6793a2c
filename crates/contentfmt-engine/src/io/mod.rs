//! Source files on disk: finding them under a content root, reading the
//! convertible body, and writing `.json` / `.html` output beside or apart
//! from them.

pub mod frontmatter;

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

pub use frontmatter::{Frontmatter, split_frontmatter};

use crate::convert::Converted;
use crate::parsing::Dialect;

/// Convertible file extensions and the dialect each one is written in.
pub const SOURCE_EXTENSIONS: [(&str, Dialect); 3] = [
    ("md", Dialect::Markdown),
    ("markdown", Dialect::Markdown),
    ("txt", Dialect::Plain),
];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content root: {0}")]
    InvalidRoot(String),
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The dialect a file is written in, judged by its extension.
pub fn source_dialect(path: &Path) -> Option<Dialect> {
    let ext = path.extension()?.to_str()?;
    SOURCE_EXTENSIONS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, dialect)| *dialect)
}

/// Reads the part of a file that gets converted. Markdown files may open
/// with YAML frontmatter, which is dropped.
pub fn read_body(path: &Path, dialect: Dialect) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path)?;
    Ok(match dialect {
        Dialect::Markdown => split_frontmatter(&source).body().to_string(),
        Dialect::Plain => source,
    })
}

/// A convertible file found under a content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: RelativePathBuf,
    pub dialect: Dialect,
}

impl SourceFile {
    pub fn read_body(&self, root: &Path) -> Result<String, IoError> {
        read_body(&self.path.to_path(root), self.dialect)
    }

    /// Writes `<name>.json` and `<name>.html` under `out_root`, mirroring the
    /// source's relative location.
    pub fn write_converted(&self, out_root: &Path, converted: &Converted) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(&converted.document)?;
        write_output(&self.path.with_extension("json"), out_root, &json)?;
        write_output(&self.path.with_extension("html"), out_root, &converted.html)
    }
}

fn write_output(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&absolute_path, content)?;
    Ok(())
}

/// Finds every convertible file under `root`, sorted by relative path.
pub fn scan_source_files(root: &Path) -> Result<Vec<SourceFile>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidRoot(format!(
            "content directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    collect_sources(root, root, &mut files)?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn collect_sources(root: &Path, dir: &Path, files: &mut Vec<SourceFile>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_sources(root, &path, files)?;
            continue;
        }
        let Some(dialect) = source_dialect(&path) else {
            continue;
        };
        let Some(relative) = path
            .strip_prefix(root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
        else {
            log::warn!("skipping {}: not representable as a relative path", path.display());
            continue;
        };
        files.push(SourceFile {
            path: relative,
            dialect,
        });
    }
    Ok(())
}
