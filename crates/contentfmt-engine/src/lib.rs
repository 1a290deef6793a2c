pub mod about;
pub mod cache;
pub mod convert;
pub mod error;
pub mod io;
pub mod migrate;
pub mod model;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use convert::{ConvertInput, Converted, convert, convert_with};
pub use error::ConvertError;
pub use model::{Attrs, Block, BulletList, Document, Heading, Image, Inline, ListItem, Paragraph};
pub use parsing::{ClassifiedLine, ConvertOptions, Dialect, build, parse_lines, parse_lines_with};
pub use render::render;
