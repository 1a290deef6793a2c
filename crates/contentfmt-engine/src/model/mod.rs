pub mod document;
pub mod json;

pub use document::*;
pub use json::is_document;
