use std::fmt;

/// Result type for favhub-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the search API.
///
/// These are value-level results, never panics: every kind renders as a
/// human-readable message the presentation layer can show directly.
#[derive(Debug)]
pub enum Error {
    /// The request URL could not be constructed
    InvalidUrl(String),

    /// The request could not be sent (connect, TLS, timeout, ...)
    Request(String),

    /// The response carried no body
    EmptyBody,

    /// The response body could not be read
    InvalidResponse(String),

    /// The body was not a valid search result document
    Decode(String),

    /// The server answered with a status outside [200, 400)
    Server(u16),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUrl(url) => write!(f, "Invalid request URL: {}", url),
            Error::Request(detail) => write!(f, "Request failed: {}", detail),
            Error::EmptyBody => write!(f, "Response carried no data"),
            Error::InvalidResponse(detail) => write!(f, "Invalid response: {}", detail),
            Error::Decode(detail) => write!(f, "Failed to decode response: {}", detail),
            Error::Server(status) => write!(f, "Server error: status {}", status),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_display_ready() {
        assert_eq!(
            Error::Server(503).to_string(),
            "Server error: status 503"
        );
        assert_eq!(
            Error::Decode("missing field `items`".to_string()).to_string(),
            "Failed to decode response: missing field `items`"
        );
        assert_eq!(Error::EmptyBody.to_string(), "Response carried no data");
    }
}
