//! Core error types for Bhasha Mitra

use thiserror::Error;

/// Result type alias for Bhasha Mitra operations
pub type BhashaResult<T> = Result<T, BhashaError>;

/// Classification of a model-call failure.
///
/// The retry loop only ever looks at the kind, never at message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 401/403: the credential is wrong or lacks permission
    Auth,
    /// Any other 4xx except 429: the request itself is malformed
    Client,
    /// 429 or 5xx: rate limited or the service is struggling
    ServerBusy,
    /// The request never completed
    Network,
    /// The payload parsed but carried none of the expected keys
    InvalidStructure,
    /// No JSON object could be recovered from the model text
    Parse,
    /// Everything that is not a model-call failure
    Other,
}

/// Main error type for Bhasha Mitra
#[derive(Error, Debug, Clone)]
pub enum BhashaError {
    /// Credential rejected by the model service
    #[error("Authentication error (status {status}): {message}")]
    Auth { message: String, status: u16 },

    /// Request rejected as malformed
    #[error("Client error (status {status}): {message}")]
    Client { message: String, status: u16 },

    /// Rate limit or server-side failure
    #[error("Server busy (status {status}): {message}")]
    ServerBusy { message: String, status: u16 },

    /// Transport failure before a response was received
    #[error("Network error: {message}")]
    Network { message: String },

    /// Parsed payload without any recognizable top-level key
    #[error("Invalid response structure: {message}")]
    InvalidStructure { message: String },

    /// Model text did not contain a parseable JSON object
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Document host errors
    #[error("Document error: {message}")]
    Document {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Generic error
    #[error("Error: {message}")]
    Other { message: String },
}

impl BhashaError {
    /// The failure class used by retry decisions and user messaging
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Client { .. } => ErrorKind::Client,
            Self::ServerBusy { .. } => ErrorKind::ServerBusy,
            Self::Network { .. } => ErrorKind::Network,
            Self::InvalidStructure { .. } => ErrorKind::InvalidStructure,
            Self::Parse { .. } => ErrorKind::Parse,
            _ => ErrorKind::Other,
        }
    }

    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Auth { .. } => "BHASHA_AUTH",
            Self::Client { .. } => "BHASHA_CLIENT",
            Self::ServerBusy { .. } => "BHASHA_SERVER_BUSY",
            Self::Network { .. } => "BHASHA_NETWORK",
            Self::InvalidStructure { .. } => "BHASHA_INVALID_STRUCTURE",
            Self::Parse { .. } => "BHASHA_PARSE",
            Self::Config { .. } => "BHASHA_CONFIG",
            Self::Document { .. } => "BHASHA_DOCUMENT",
            Self::InvalidInput { .. } => "BHASHA_INVALID_INPUT",
            Self::Io { .. } => "BHASHA_IO",
            Self::Json { .. } => "BHASHA_JSON",
            Self::Other { .. } => "BHASHA_OTHER",
        }
    }

    /// Whether the model client may retry after this error.
    ///
    /// `Parse` is deliberately absent; whether it is retried is a client
    /// policy, not a property of the error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::ServerBusy | ErrorKind::Network | ErrorKind::InvalidStructure
        )
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. }
            | Self::Client { status, .. }
            | Self::ServerBusy { status, .. } => Some(*status),
            _ => None,
        }
    }
}
