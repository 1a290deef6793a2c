/// Errors from the conversion pipeline.
///
/// Malformed source text is never an error: classification is total.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The caller passed something that is neither text nor a document.
    #[error("Invalid input kind: expected text or a \"doc\" node, found {found}")]
    InvalidInputKind { found: &'static str },
    /// A value claiming to be a document whose nodes cannot be read.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}
