use crate::file_store::FileStoreError;
use crate::launcher::LaunchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Errors surfaced by the shell's collaborators. The window manager itself
/// never fails.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Files(#[from] FileStoreError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
    #[error("no user is signed in")]
    NotSignedIn,
}
