use thiserror::Error;

/// Errors that the portfolio core can surface.
///
/// All of these are unexpected-path failures: the record is a fixed
/// literal, so in normal operation none of them occur. They exist so the
/// web layer can fail fast at startup (`Init`) or answer with a 500
/// instead of masking a broken render as an empty success.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Malformed literal data detected at startup. Fatal: the process
    /// must not accept requests after seeing this.
    #[error("invalid portfolio data: {0}")]
    Init(String),

    /// The HTML template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// The record could not be serialized to JSON.
    #[error("portfolio serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
