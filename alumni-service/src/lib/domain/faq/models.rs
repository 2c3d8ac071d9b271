use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::faq::errors::FaqIdError;

/// FAQ grouping with a unique name.
#[derive(Debug, Clone)]
pub struct FaqCategory {
    pub id: FaqCategoryId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaqCategoryId(pub Uuid);

impl FaqCategoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, FaqIdError> {
        Uuid::parse_str(s)
            .map(FaqCategoryId)
            .map_err(|e| FaqIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for FaqCategoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FaqCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A question/answer entry.
///
/// `display_order` is unique within its category; at most
/// [`crate::faq::service::HOME_PAGE_LIMIT`] faqs may be flagged for the
/// home page.
#[derive(Debug, Clone)]
pub struct Faq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub category_id: FaqCategoryId,
    pub display_order: i32,
    pub show_home_page: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaqId(pub Uuid);

impl FaqId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, FaqIdError> {
        Uuid::parse_str(s)
            .map(FaqId)
            .map_err(|e| FaqIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for FaqId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
pub struct CreateFaqCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFaqCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateFaqCommand {
    pub question: String,
    pub answer: String,
    pub category_id: FaqCategoryId,
    pub display_order: Option<i32>,
    pub show_home_page: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateFaqCommand {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category_id: Option<FaqCategoryId>,
    pub display_order: Option<i32>,
    pub show_home_page: Option<bool>,
}
