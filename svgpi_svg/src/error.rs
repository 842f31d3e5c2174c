/// Errors of document processing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input is not a well-formed XML document.
    #[error("failed to parse SVG: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The config could not be read or the result could not be written.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid options or a broken event stream.
    #[error(transparent)]
    Interp(#[from] pathinterp::Error),
}
