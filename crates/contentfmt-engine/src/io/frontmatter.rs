//! YAML frontmatter at the start of a source file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Sole trader or Ltd?
//! category: tax
//! ---
//!
//! ## Giới thiệu
//! ```
//!
//! Post metadata lives in the frontmatter; only the body is converted.

use serde_yaml::Value;

const DELIMITER: &str = "---";

#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    value: Option<Value>,
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn body(&self) -> &'a str {
        self.body
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }
}

/// Splits frontmatter from the body.
///
/// Without an opening and closing delimiter the whole input is the body.
/// Invalid YAML is logged and dropped; the body after it is still returned.
pub fn split_frontmatter(content: &str) -> Frontmatter<'_> {
    let whole = Frontmatter {
        value: None,
        body: content,
    };

    let Some(after_open) = content
        .strip_prefix(DELIMITER)
        .and_then(|rest| rest.find('\n').map(|pos| &rest[pos + 1..]))
    else {
        return whole;
    };

    let (yaml, after_close) = if let Some(rest) = after_open.strip_prefix(DELIMITER) {
        ("", rest)
    } else if let Some(pos) = after_open.find("\n---") {
        (&after_open[..pos], &after_open[pos + 4..])
    } else {
        log::warn!("frontmatter opening delimiter found but no closing delimiter");
        return whole;
    };

    let body = after_close
        .strip_prefix("\r\n")
        .or_else(|| after_close.strip_prefix('\n'))
        .unwrap_or(after_close);

    let value = match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("failed to parse frontmatter YAML: {e}");
            None
        }
    };

    Frontmatter { value, body }
}
