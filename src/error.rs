use std::path::PathBuf;
use thiserror::Error;

/// All error types for lines
#[derive(Error, Debug)]
pub enum Error {
    #[error("option '{option}' requires an argument")]
    MissingArgument { option: String },

    #[error("invalid number '{value}' for option '{option}'")]
    InvalidNumber { option: String, value: String },

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("unexpected argument '{0}': only one input file is accepted")]
    ExtraInput(String),

    #[error("invalid range: {message}")]
    InvalidRange { message: String },

    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn missing_argument(option: impl Into<String>) -> Self {
        Self::MissingArgument {
            option: option.into(),
        }
    }

    pub fn invalid_number(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            option: option.into(),
            value: value.into(),
        }
    }

    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }

    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the command line rather than the input
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. }
                | Self::InvalidNumber { .. }
                | Self::UnknownOption(_)
                | Self::ExtraInput(_)
                | Self::InvalidRange { .. }
        )
    }
}

/// Result type alias for lines operations
pub type Result<T> = std::result::Result<T, Error>;
