use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for tinyfetch
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Field '{label}' not found in {}", path.display())]
    FieldNotFound { label: String, path: PathBuf },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("System call failed: {0}")]
    SysCall(String),

    #[error("Not available: {0}")]
    Unavailable(String),

    #[error("{0}")]
    MissingArgument(String),

    #[error("Unknown command line argument: {0}")]
    UnknownArgument(String),

    #[error("{0} is not installed! cannot print using colors.")]
    ColorizerMissing(String),
}

/// Result type alias for tinyfetch
pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Create a source unavailable error for a file that could not be opened
    pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        FetchError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a field not found error
    pub fn field_not_found<S: Into<String>, P: Into<PathBuf>>(label: S, path: P) -> Self {
        FetchError::FieldNotFound {
            label: label.into(),
            path: path.into(),
        }
    }

    pub fn parse<S: Into<String>>(msg: S) -> Self {
        FetchError::Parse(msg.into())
    }

    pub fn sys_call<S: Into<String>>(msg: S) -> Self {
        FetchError::SysCall(msg.into())
    }

    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        FetchError::Unavailable(msg.into())
    }

    pub fn missing_argument<S: Into<String>>(msg: S) -> Self {
        FetchError::MissingArgument(msg.into())
    }

    pub fn unknown_argument<S: Into<String>>(arg: S) -> Self {
        FetchError::UnknownArgument(arg.into())
    }

    pub fn colorizer_missing<S: Into<String>>(program: S) -> Self {
        FetchError::ColorizerMissing(program.into())
    }

    /// True for errors that only mean "this feature is unavailable on this host".
    ///
    /// Such errors degrade the report (a line is skipped or replaced by a
    /// generic label) and never abort the program.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FetchError::Io(_)
                | FetchError::SourceUnavailable { .. }
                | FetchError::FieldNotFound { .. }
                | FetchError::Parse(_)
                | FetchError::SysCall(_)
                | FetchError::Unavailable(_)
        )
    }
}
