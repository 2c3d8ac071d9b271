use thiserror::Error;

use crate::user::errors::EnumParseError;

/// Error for ParticipantId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParticipantIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for Silver Jubilee operations
#[derive(Debug, Clone, Error)]
pub enum JubileeError {
    #[error("Invalid participant ID: {0}")]
    InvalidParticipantId(#[from] ParticipantIdError),

    #[error("Invalid stored field: {0}")]
    InvalidField(#[from] EnumParseError),

    #[error("Participant not found: {0}")]
    NotFound(String),

    #[error("Participant with this email or phone number already registered")]
    Duplicate,

    #[error("Main participant with ID {0} not found")]
    MainParticipantNotFound(String),

    #[error("{0} is required for this participant category")]
    MissingField(&'static str),

    #[error("No participants found for batch {batch} and group {group}")]
    NoParticipantsInBatchGroup { batch: i32, group: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
