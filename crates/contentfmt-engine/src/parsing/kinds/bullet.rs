use std::sync::LazyLock;

use regex::Regex;

/// Keycap digit emoji (`1️⃣`…`9️⃣`) used as list markers in imported social posts.
static KEYCAP_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\x{FE0F}?\x{20E3}").expect("static regex"));

/// Bullet list item with owned marker knowledge.
pub struct Bullet;

impl Bullet {
    /// Markers recognized in every dialect.
    pub const MARKERS: [char; 2] = ['-', '•'];

    /// Extra markers seen only in historic plain-text content: an arrow, and
    /// `•`/`→` as they appear after being decoded with the wrong charset.
    pub const LEGACY_MARKERS: [&'static str; 3] = ["→", "â€¢", "â†’"];

    /// Returns the item text if the trimmed line starts with a bullet marker.
    ///
    /// Whitespace after the marker is optional and stripped.
    pub fn strip(line: &str, legacy: bool) -> Option<&str> {
        if let Some(rest) = line.strip_prefix(Self::MARKERS) {
            return Some(rest.trim_start());
        }
        if !legacy {
            return None;
        }
        if let Some(rest) = Self::LEGACY_MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
        {
            return Some(rest.trim_start());
        }
        KEYCAP_DIGIT
            .find(line)
            .map(|m| line[m.end()..].trim_start())
    }
}
