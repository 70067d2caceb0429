//! Error types for the console.

use thiserror::Error;

/// Errors raised by console commands.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// No item with this id exists.
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// An item with this id already exists.
    #[error("{resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },

    /// The id is syntactically unusable.
    #[error("invalid id '{0}': ids must be non-empty and contain no whitespace")]
    InvalidId(String),

    /// The JSON payload doesn't describe a valid item.
    #[error("invalid {resource} data: {source}")]
    InvalidData {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An update tried to change a field that can't change.
    #[error("field '{0}' cannot be changed")]
    ImmutableField(String),

    /// The session user doesn't exist.
    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// A pilot-role user has no pilot profile to scope lists with.
    #[error("user '{0}' has the pilot role but no pilot profile")]
    MissingPilotProfile(String),

    /// A list argument is out of bounds or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The query string couldn't be parsed.
    #[error(transparent)]
    Query(#[from] flightdesk_query::QueryError),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// JSON output failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for console operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
