use async_trait::async_trait;

use crate::souvenir::errors::SouvenirError;
use crate::souvenir::models::CreateSouvenirCommand;
use crate::souvenir::models::Souvenir;
use crate::souvenir::models::SouvenirId;
use crate::souvenir::models::SouvenirQuery;
use crate::souvenir::models::UpdateSouvenirCommand;

/// Port for souvenir operations.
#[async_trait]
pub trait SouvenirServicePort: Send + Sync + 'static {
    /// Create a submission after category-dependent media validation.
    ///
    /// # Errors
    /// * `MissingGalleryPhotos` / `TooManyGalleryPhotos` /
    ///   `SinglePhotoOnGallery` - gallery rules violated
    /// * `MissingPhoto` / `MissingContent` / `GalleryPhotosOnSingle` -
    ///   single-photo rules violated
    async fn create_souvenir(
        &self,
        command: CreateSouvenirCommand,
    ) -> Result<Souvenir, SouvenirError>;

    /// Filtered listing with the total match count.
    async fn list_souvenirs(
        &self,
        query: SouvenirQuery,
    ) -> Result<(Vec<Souvenir>, i64), SouvenirError>;

    async fn get_souvenir(&self, id: &SouvenirId) -> Result<Souvenir, SouvenirError>;

    /// Update a submission; media rules are re-checked on the result.
    async fn update_souvenir(
        &self,
        id: &SouvenirId,
        command: UpdateSouvenirCommand,
    ) -> Result<Souvenir, SouvenirError>;

    async fn delete_souvenir(&self, id: &SouvenirId) -> Result<(), SouvenirError>;
}

/// Persistence operations for souvenirs.
#[async_trait]
pub trait SouvenirRepository: Send + Sync + 'static {
    async fn create(&self, souvenir: Souvenir) -> Result<Souvenir, SouvenirError>;

    async fn find_by_id(&self, id: &SouvenirId) -> Result<Option<Souvenir>, SouvenirError>;

    /// Returns the matching souvenirs and the total match count.
    async fn list(&self, query: &SouvenirQuery) -> Result<(Vec<Souvenir>, i64), SouvenirError>;

    async fn update(&self, souvenir: Souvenir) -> Result<Souvenir, SouvenirError>;

    async fn delete(&self, id: &SouvenirId) -> Result<(), SouvenirError>;
}
