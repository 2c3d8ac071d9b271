use thiserror::Error;

/// Error for FAQ/category ID parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FaqIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for FAQ and category operations
#[derive(Debug, Clone, Error)]
pub enum FaqError {
    #[error("Invalid ID: {0}")]
    InvalidId(#[from] FaqIdError),

    #[error("FAQ not found: {0}")]
    NotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category with name \"{0}\" already exists")]
    DuplicateCategoryName(String),

    #[error("An FAQ with order {0} already exists in this category")]
    OrderTaken(i32),

    #[error("Maximum {0} FAQs can be shown on the homepage")]
    HomePageLimitReached(usize),

    #[error("Category still has FAQs assigned to it")]
    CategoryInUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
