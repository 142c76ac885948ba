//! Errors from reading, writing, and interpreting `config.ron`.

use geode_mesh::MeshError;

/// Failure while loading, saving, or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("cannot read config.ron: {0}")]
    ReadError(#[source] std::io::Error),

    /// The config directory or file could not be written.
    #[error("cannot write config.ron: {0}")]
    WriteError(#[source] std::io::Error),

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("malformed config.ron: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// The settings could not be rendered as RON.
    #[error("cannot serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The mesh settings do not describe a buildable mesh.
    #[error("invalid mesh settings: {0}")]
    Mesh(#[from] MeshError),
}
