/// Markdown `#` heading with owned marker knowledge.
pub struct AtxHeading;

impl AtxHeading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Splits a trimmed line into `(marker_count, remainder)` if it opens a heading.
    ///
    /// The run of `#` must be followed by whitespace or end the line, so a
    /// lone `#` is an (empty) heading while `#tag` is not a heading at all.
    /// The remainder has leading whitespace stripped.
    pub fn split(line: &str) -> Option<(usize, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let count = line.len() - rest.len();
        if count == 0 {
            return None;
        }
        match rest.chars().next() {
            None => Some((count, "")),
            Some(c) if c.is_whitespace() => Some((count, rest.trim_start())),
            Some(_) => None,
        }
    }
}
