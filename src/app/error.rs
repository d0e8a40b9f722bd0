use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("config file not found: no `*{ext}` file in {dir}")]
    ConfigNotFound { dir: PathBuf, ext: &'static str },

    #[error("could not read config file {0}: {1}")]
    ConfigRead(PathBuf, #[source] std::io::Error),

    #[error(
        "invalid config file {path}, it should be valid TOML with the keys \
         entry (list of strings), exclude (list of strings), output (string), \
         description (string): {message}"
    )]
    MalformedConfig { path: PathBuf, message: String },

    #[error("failed to create bundle file {0}: {1}")]
    CreateOutput(PathBuf, #[source] std::io::Error),

    #[error("could not read file {0}: {1}")]
    ReadFile(PathBuf, #[source] std::io::Error),

    #[error("failed to write to bundle file {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("{0} already exists, pass --force to overwrite it")]
    ScaffoldExists(PathBuf),

    #[error("could not write {0}: {1}")]
    Scaffold(PathBuf, #[source] std::io::Error),
}

impl BundleError {
    /// Config problems are the user's to fix, so usage help follows them.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::ConfigRead(..) | Self::MalformedConfig { .. }
        )
    }
}
