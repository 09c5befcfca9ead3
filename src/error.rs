use thiserror::Error;

/// Failures surfaced by a task runner.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("No 'build' script found in package.json")]
    BuildScriptNotFound,

    #[error("The 'build' script in package.json is empty")]
    InvalidBuildScript,

    /// Carries the captured output verbatim, which may be empty.
    #[error("{output}")]
    SystemCallFailure { output: String },

    #[error("WebAssembly binary not found at build/index.wasm")]
    WebAssemblyBinaryNotFound,

    #[error("Dependency installation failed: {0}")]
    DependencyInstall(String),

    #[error("Metadata file build/metadata.json not found. Did the build run?")]
    MetadataNotFound,

    #[error("Invalid metadata: {0}")]
    MetadataValidation(String),

    #[error("Failed to parse package.json: {0}")]
    InvalidManifest(#[source] serde_json::Error),

    #[error("Failed to parse build/metadata.json: {0}")]
    InvalidMetadata(#[source] serde_json::Error),

    #[error("API library '{0}' is not installed")]
    ApiLibraryNotFound(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
