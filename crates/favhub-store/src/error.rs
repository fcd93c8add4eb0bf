use std::fmt;

/// Result type for favhub-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the persistence layer.
///
/// Mirrors the store contract: read, write and delete failures are
/// distinct, recoverable, and carry a display-ready detail string.
#[derive(Debug)]
pub enum Error {
    /// The favorites table is missing or could not be prepared
    EntityNotFound(String),

    /// Writing a favorite failed
    Save(String),

    /// Reading the favorite set failed
    Read(String),

    /// Removing a favorite failed
    Delete(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EntityNotFound(name) => write!(f, "Store entity not found: {}", name),
            Error::Save(detail) => write!(f, "Failed to save favorite: {}", detail),
            Error::Read(detail) => write!(f, "Failed to read favorites: {}", detail),
            Error::Delete(detail) => write!(f, "Failed to delete favorite: {}", detail),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_operation() {
        assert!(Error::Save("disk full".into()).to_string().contains("save"));
        assert!(Error::Read("locked".into()).to_string().contains("read"));
        assert!(Error::Delete("locked".into()).to_string().contains("delete"));
        assert!(
            Error::EntityNotFound("favorites".into())
                .to_string()
                .contains("favorites")
        );
    }
}
