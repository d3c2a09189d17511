use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read
    #[error("failed to read config {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid RON for `GeneratorConfig`
    #[error("failed to parse RON in {path}")]
    ParseRon {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Errors raised by the batch pipeline. Classification itself never fails;
/// every variant here is an I/O or wire-format problem at the boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read input {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode ability corpus in {path}")]
    DecodeInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode ability metadata")]
    EncodeOutput(#[source] serde_json::Error),
    #[error("failed to write output {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error")]
    Config(#[from] ConfigError),
}

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;
