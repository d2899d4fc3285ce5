use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Error type covering the failures that abort a report or inventory run.
///
/// Every variant is fatal: the caller propagates it up to `main`, which
/// prints the message and exits without writing partial output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Wrapper for IO failures such as reading the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the configuration file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the configuration file given on the command line is absent.
    #[error("configuration file not found: {0}")]
    MissingConfig(PathBuf),

    /// Raised when a credential is set neither on the command line, in the
    /// configuration file, nor in the environment.
    #[error("{key} is not set (use --{key} or the {env} environment variable)")]
    MissingCredential {
        key: &'static str,
        env: &'static str,
    },

    /// Raised when a credential cannot be carried as gRPC metadata.
    #[error("invalid {key}: {reason}")]
    InvalidCredential { key: &'static str, reason: String },

    /// Raised when the configured time zone is not in the tz database.
    #[error("could not load time zone '{0}'")]
    UnknownTimeZone(String),

    /// Raised when an endpoint address cannot be turned into a channel.
    #[error("invalid endpoint '{endpoint}': {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    /// Raised when a remote call fails.
    #[error("failed to {operation}: {:?}: {}", .source.code(), .source.message())]
    Rpc {
        operation: String,
        #[source]
        source: Box<tonic::Status>,
    },

    /// Raised when a response arrives without the record it wraps.
    #[error("{operation} returned no {field}")]
    MissingField {
        operation: String,
        field: &'static str,
    },

    /// Raised when a timestamp on the wire is outside the representable range.
    #[error("invalid timestamp in {field}: {seconds}s {nanos}ns")]
    InvalidTimestamp {
        field: &'static str,
        seconds: i64,
        nanos: i32,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ReportError {
    /// Wraps a failed remote call together with a description of what was
    /// being fetched.
    pub fn rpc(operation: impl Into<String>, status: tonic::Status) -> Self {
        ReportError::Rpc {
            operation: operation.into(),
            source: Box::new(status),
        }
    }
}
