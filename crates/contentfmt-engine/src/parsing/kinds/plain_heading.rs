use std::sync::LazyLock;

use regex::Regex;

/// Regex class body of the uppercase letters that may open a plain-text heading:
/// ASCII plus the precomposed Vietnamese capitals.
pub const HEADING_INITIAL_CLASS: &str = "A-ZĐÀÁẢÃẠÂẦẤẨẪẬĂẰẮẲẴẶÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢÙÚỦŨỤƯỪỨỬỮỰỲÝỶỸỴ";

/// Decorative hearts and whitespace may precede the capital letter.
static HEADING_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:💕|\s)*[{HEADING_INITIAL_CLASS}]")).expect("static regex")
});

/// Heuristic heading for freeform text: a short line starting with a capital.
///
/// This is locale-specific and will also match ordinary short sentences; it
/// reproduces how historic posts were styled.
pub struct PlainHeading;

impl PlainHeading {
    pub fn matches(line: &str, max_chars: usize) -> bool {
        line.chars().count() < max_chars && HEADING_START.is_match(line)
    }
}
