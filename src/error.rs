//! Error type shared by the fallible helpers.
//!
//! The geo functions never fail; everything that parses input or touches the
//! filesystem or network reports through [`HelperError`].

/// Errors that can occur in the fallible helpers.
#[derive(Debug)]
pub enum HelperError {
    /// A decimal operand could not be parsed.
    InvalidNumber(String),
    /// Decimal division by zero.
    DivisionByZero,
    /// A decimal scale shift exceeds the supported exponent range.
    Overflow,
    /// A date or time string could not be parsed.
    InvalidDateTime(String),
    /// A filesystem operation failed.
    Io(std::io::Error),
    /// JSON (de)serialization failed.
    Json(serde_json::Error),
    /// The server answered with a status other than 200.
    HttpStatus(u16),
    /// The request could not be sent or the body could not be read.
    Http(String),
}

impl std::fmt::Display for HelperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HelperError::InvalidNumber(value) => write!(f, "Invalid number: {:?}", value),
            HelperError::DivisionByZero => write!(f, "Division by zero"),
            HelperError::Overflow => write!(f, "Decimal overflow"),
            HelperError::InvalidDateTime(value) => write!(f, "Invalid date/time: {:?}", value),
            HelperError::Io(e) => write!(f, "I/O error: {}", e),
            HelperError::Json(e) => write!(f, "JSON error: {}", e),
            HelperError::HttpStatus(code) => write!(f, "Unexpected HTTP status: {}", code),
            HelperError::Http(msg) => write!(f, "HTTP request failed: {}", msg),
        }
    }
}

impl std::error::Error for HelperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HelperError::Io(e) => Some(e),
            HelperError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HelperError {
    fn from(e: std::io::Error) -> Self {
        HelperError::Io(e)
    }
}

impl From<serde_json::Error> for HelperError {
    fn from(e: serde_json::Error) -> Self {
        HelperError::Json(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelperError>;
