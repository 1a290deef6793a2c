use std::borrow::Cow;

/// Inline emphasis markers. Structured bold marks are not produced; the markers
/// are dropped so they do not leak into headings and list items as literal text.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";

    pub fn strip_bold(text: &str) -> Cow<'_, str> {
        if text.contains(Self::BOLD) {
            Cow::Owned(text.replace(Self::BOLD, ""))
        } else {
            Cow::Borrowed(text)
        }
    }
}
