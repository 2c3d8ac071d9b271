use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::representative::errors::RepresentativeIdError;

/// Batch representative collection entry.
///
/// One submission per phone number.
#[derive(Debug, Clone)]
pub struct Representative {
    pub id: RepresentativeId,
    pub name: String,
    pub phone: String,
    pub facebook_url: String,
    pub comments: Option<String>,
    pub hsc_year: i32,
    pub hsc_group: String,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Representative unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepresentativeId(pub Uuid);

impl RepresentativeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, RepresentativeIdError> {
        Uuid::parse_str(s)
            .map(RepresentativeId)
            .map_err(|e| RepresentativeIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for RepresentativeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RepresentativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct CreateRepresentativeCommand {
    pub name: String,
    pub phone: String,
    pub facebook_url: String,
    pub comments: Option<String>,
    pub hsc_year: i32,
    pub hsc_group: String,
    pub gender: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRepresentativeCommand {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub facebook_url: Option<String>,
    pub comments: Option<String>,
    pub hsc_year: Option<i32>,
    pub hsc_group: Option<String>,
    pub gender: Option<String>,
}
