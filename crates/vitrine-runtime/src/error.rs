use std::fmt;

/// Result type for vitrine-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the session layer
#[derive(Debug)]
pub enum Error {
    /// Remote catalog access failed
    Catalog(vitrine_client::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(err) => write!(f, "Catalog error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Catalog(err) => Some(err),
        }
    }
}

impl From<vitrine_client::Error> for Error {
    fn from(err: vitrine_client::Error) -> Self {
        Error::Catalog(err)
    }
}
