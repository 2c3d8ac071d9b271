use thiserror::Error;

/// Error for SouvenirId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SouvenirIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for souvenir operations
#[derive(Debug, Clone, Error)]
pub enum SouvenirError {
    #[error("Invalid souvenir ID: {0}")]
    InvalidSouvenirId(#[from] SouvenirIdError),

    #[error("Souvenir not found: {0}")]
    NotFound(String),

    #[error("At least 1 photo is required for the photo-gallery category")]
    MissingGalleryPhotos,

    #[error("Maximum {0} photos allowed for the photo-gallery category")]
    TooManyGalleryPhotos(usize),

    #[error("photo_url must not be set for the photo-gallery category")]
    SinglePhotoOnGallery,

    #[error("Photo is required for non-photo-gallery categories")]
    MissingPhoto,

    #[error("Content is required for non-photo-gallery categories")]
    MissingContent,

    #[error("photo_urls must not be set for non-photo-gallery categories")]
    GalleryPhotosOnSingle,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
