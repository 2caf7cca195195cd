use std::fmt;

/// Custom error type for GitHub export operations
#[derive(Debug)]
pub enum GhError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// Token missing, invalid or rejected by GitHub
    Authentication(String),
    /// No organization with the requested login is visible to the token
    OrganizationNotFound(String),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Output destination could not be opened or written
    Io(std::io::Error),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for GhError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GhError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GhError::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            GhError::OrganizationNotFound(org) => write!(
                f,
                "Organization '{}' not found among the organizations visible to this token",
                org
            ),
            GhError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GhError::Io(e) => write!(f, "I/O error: {}", e),
            GhError::Json(msg) => write!(f, "JSON error: {}", msg),
            GhError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GhError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GhError::Http(e) => Some(e),
            GhError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GhError {
    fn from(err: reqwest::Error) -> Self {
        GhError::Http(err)
    }
}

impl From<serde_json::Error> for GhError {
    fn from(err: serde_json::Error) -> Self {
        // Write failures while serializing output are I/O errors, not bad JSON
        if err.is_io() {
            return GhError::Io(err.into());
        }
        GhError::Json(err.to_string())
    }
}

impl From<std::io::Error> for GhError {
    fn from(err: std::io::Error) -> Self {
        GhError::Io(err)
    }
}

/// Result type alias for GitHub export operations
pub type Result<T> = std::result::Result<T, GhError>;
