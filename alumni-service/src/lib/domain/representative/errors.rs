use thiserror::Error;

/// Error for RepresentativeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepresentativeIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for representative operations
#[derive(Debug, Clone, Error)]
pub enum RepresentativeError {
    #[error("Invalid representative ID: {0}")]
    InvalidRepresentativeId(#[from] RepresentativeIdError),

    #[error("Representative not found: {0}")]
    NotFound(String),

    #[error("Phone number already exists")]
    PhoneAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
