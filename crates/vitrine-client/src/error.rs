use std::fmt;

/// Result type for vitrine-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the remote catalog
#[derive(Debug)]
pub enum Error {
    /// Network-level failure (unreachable host, connection drop, timeout)
    Transport(reqwest::Error),

    /// Non-success HTTP status, carrying the code
    Status(u16),

    /// Response body did not decode into the expected shape
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Status(code) => write!(f, "Catalog service returned status {}", code),
            Error::Decode(msg) => write!(f, "Malformed catalog response: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Status(_) | Error::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else {
            Error::Transport(err)
        }
    }
}
