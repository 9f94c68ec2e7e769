use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum SemverBumpError {
    #[error("Invalid semantic version '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("You specified more than one bump type! Use only one of --major, --minor or --patch")]
    ConflictingFlags,

    #[error("[{0}] is not a valid metadata format! Check https://semver.org/#spec-item-10")]
    InvalidMetadata(String),

    #[error("Cannot bump {component} version past {value}")]
    VersionOverflow { component: &'static str, value: u64 },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, SemverBumpError>;

impl SemverBumpError {
    /// Create an invalid format error for the given input
    pub fn invalid_format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        SemverBumpError::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverBumpError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        SemverBumpError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        SemverBumpError::Remote(msg.into())
    }
}
