//! Error types for configuration loading and HTML rendering.

use std::path::PathBuf;

/// Failures outside the dashboard's own state transitions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// A host tried to interact with an element the current screen does not bind.
    #[error("no handler bound to element `{0}`")]
    UnboundElement(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
