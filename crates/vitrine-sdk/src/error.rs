use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Connection settings were rejected before any request was made
    InvalidConfig(String),
    /// The remote catalog could not be fetched or decoded
    Catalog(vitrine_client::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Catalog(err) => write!(f, "Catalog error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Catalog(err) => Some(err),
            Error::InvalidConfig(_) => None,
        }
    }
}

impl From<vitrine_client::Error> for Error {
    fn from(err: vitrine_client::Error) -> Self {
        Error::Catalog(err)
    }
}

impl From<vitrine_runtime::Error> for Error {
    fn from(err: vitrine_runtime::Error) -> Self {
        match err {
            vitrine_runtime::Error::Catalog(err) => Error::Catalog(err),
        }
    }
}
