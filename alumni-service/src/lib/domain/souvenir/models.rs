use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::souvenir::errors::SouvenirIdError;

/// Category value that switches a souvenir into gallery mode.
pub const PHOTO_GALLERY: &str = "photo-gallery";

/// Maximum photos in a gallery submission.
pub const MAX_GALLERY_PHOTOS: usize = 10;

/// Alumni souvenir submission (write-up, gallery, tribute, ...).
///
/// Gallery submissions carry 1-10 `photo_urls` and optional content; every
/// other category carries a single `photo_url` plus mandatory content.
#[derive(Debug, Clone)]
pub struct Souvenir {
    pub id: SouvenirId,
    pub category: String,
    pub name: String,
    pub batch: String,
    pub group: String,
    pub phone_number: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub photo_urls: Vec<String>,
    pub content: Option<String>,
    pub professional_details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Souvenir unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SouvenirId(pub Uuid);

impl SouvenirId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, SouvenirIdError> {
        Uuid::parse_str(s)
            .map(SouvenirId)
            .map_err(|e| SouvenirIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for SouvenirId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SouvenirId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct CreateSouvenirCommand {
    pub category: String,
    pub name: String,
    pub batch: String,
    pub group: String,
    pub phone_number: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub photo_urls: Vec<String>,
    pub content: Option<String>,
    pub professional_details: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSouvenirCommand {
    pub name: Option<String>,
    pub batch: Option<String>,
    pub group: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub photo_urls: Option<Vec<String>>,
    pub content: Option<String>,
    pub professional_details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SouvenirSortBy {
    CreatedAt,
    Name,
    Batch,
}

/// Listing filter. No pagination: the gallery pages are rendered whole.
#[derive(Debug, Clone, Default)]
pub struct SouvenirQuery {
    pub category: Option<String>,
    pub batch: Option<String>,
    pub group: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<SouvenirSortBy>,
    pub descending: bool,
}
