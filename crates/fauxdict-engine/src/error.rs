use std::fmt;

/// Result type for fauxdict-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
///
/// None of these reach the user: load errors become the fallback list and
/// persistence errors are logged.
#[derive(Debug)]
pub enum Error {
    /// Payload could not be retrieved
    Fetch(String),

    /// Payload was retrieved but does not have the expected shape
    Malformed(String),

    /// Payload parsed but its list holds no entries
    EmptyPayload,

    /// Preference could not be written
    Persist(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fetch(msg) => write!(f, "Fetch failed: {}", msg),
            Error::Malformed(msg) => write!(f, "Malformed payload: {}", msg),
            Error::EmptyPayload => write!(f, "Payload has no entries"),
            Error::Persist(msg) => write!(f, "Could not save preference: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}
