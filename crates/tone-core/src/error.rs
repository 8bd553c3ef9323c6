/// Failures surfaced by the library crates. The CLI wraps these in `anyhow`.
#[derive(Debug, thiserror::Error)]
pub enum ToneError {
    /// A file that exists could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact failed validation.
    #[error("invalid model: {0}")]
    Model(String),

    #[error("dataset error: {0}")]
    Dataset(String),

    #[error("config error: {0}")]
    Config(String),

    /// Unrecognized sentiment label.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ToneError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
