use thiserror::Error;

use crate::user::errors::EnumParseError;

/// Error for EventId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for event operations
#[derive(Debug, Clone, Error)]
pub enum EventError {
    #[error("Invalid event ID: {0}")]
    InvalidEventId(#[from] EventIdError),

    #[error("Invalid stored field: {0}")]
    InvalidField(#[from] EnumParseError),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Pricing ranges are required for paid events")]
    PricingRequired,

    #[error("User is already registered for this event")]
    AlreadyRegistered,

    #[error("User is not registered for this event")]
    NotRegistered,

    #[error("Event is fully booked")]
    FullyBooked,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
