use std::path::PathBuf;

use thiserror::Error;

/// The main error type for plugmat operations
#[derive(Debug, Error)]
pub enum PlugmatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Found multiple potential plugin package dirs: {}", format_paths(.0))]
    AmbiguousPackageDir(Vec<PathBuf>),

    #[error("Found no plugin package dirs and no single-file plugin")]
    NoPackageDir(PathBuf),

    #[error("Failed to read {}: {reason}", .path.display())]
    SetupCfg { path: PathBuf, reason: String },

    #[error("Could not get changed files")]
    ChangedFiles,

    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("Failed to write output file {}", .0.display())]
    Output(PathBuf),
}

/// Result type alias for plugmat operations
pub type PlugmatResult<T> = Result<T, PlugmatError>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
