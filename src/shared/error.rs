use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI binaries.
///
/// Both binaries share these codes so wrappers can tell a usage mistake
/// from a broken environment or a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 1,
    /// Missing API key or unusable config file
    ConfigurationError = 2,
    /// Unreadable SBOM, output write failure, or any other runtime error
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by a use case.
    ///
    /// Walks the error chain looking for a [`ReporterError`]; anything
    /// else is an application error.
    pub fn for_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<ReporterError>())
            .map(ReporterError::exit_code)
            .unwrap_or(ExitCode::ApplicationError)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (1)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures that end a report run.
///
/// Per-chunk API failures are not represented here: they are logged and
/// the run continues without that chunk's results.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("{variable} environment variable is required.\n\n💡 Hint: Export a Tidelift API key, e.g. `export {variable}=...`")]
    MissingApiKey { variable: &'static str },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    InvalidConfig { path: PathBuf, details: String },

    #[error("SBOM file not found: {path}\n\n💡 Hint: Pass the path to a CycloneDX JSON file")]
    BomNotFound { path: PathBuf },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Only CycloneDX JSON documents are supported")]
    BomParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ReporterError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReporterError::MissingApiKey { .. } | ReporterError::InvalidConfig { .. } => {
                ExitCode::ConfigurationError
            }
            ReporterError::BomNotFound { .. }
            | ReporterError::BomParseError { .. }
            | ReporterError::FileWriteError { .. } => ExitCode::ApplicationError,
        }
    }
}
