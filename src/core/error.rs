use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launch pipeline.
/// Every module returns `Result<T, LauncherError>`.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Descriptor ──────────────────────────────────────
    #[error("Version descriptor not found: {0:?}")]
    DescriptorNotFound(PathBuf),

    #[error("Malformed version descriptor {path:?}: {source}")]
    MalformedDescriptor {
        path: PathBuf,
        source: serde_json::Error,
    },

    // ── Maven ───────────────────────────────────────────
    #[error("Invalid Maven coordinate: {0}")]
    InvalidMavenCoordinate(String),

    // ── Process ─────────────────────────────────────────
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    // ── Config ──────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Coarse classification of a [`LauncherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Malformed,
    SpawnFailure,
    Io,
    Config,
}

impl LauncherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LauncherError::DescriptorNotFound(_) => ErrorKind::NotFound,
            LauncherError::MalformedDescriptor { .. }
            | LauncherError::InvalidMavenCoordinate(_) => ErrorKind::Malformed,
            LauncherError::Spawn { .. } => ErrorKind::SpawnFailure,
            LauncherError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            LauncherError::Io { .. } => ErrorKind::Io,
            LauncherError::Config(_) => ErrorKind::Config,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::Malformed
    }
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl From<std::io::Error> for LauncherError {
    fn from(source: std::io::Error) -> Self {
        LauncherError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
