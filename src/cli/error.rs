//! CLI-level errors

use thiserror::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Config { .. } => crate::exitcode::CONFIG,
            CliError::Io { .. } => crate::exitcode::IOERR,
        }
    }
}

/// Parse failures become usage errors carrying clap's rendered message.
impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::Usage(e.render().to_string())
    }
}

/// Extension trait for attaching context to `io::Result` values.
pub trait IoResultExt<T> {
    /// Wrap an I/O error with a description of what was being written.
    fn with_context(self, action: &str) -> CliResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_context(self, action: &str) -> CliResult<T> {
        self.map_err(|e| CliError::io(action, e))
    }
}
