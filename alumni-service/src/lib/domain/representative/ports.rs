use async_trait::async_trait;

use crate::representative::errors::RepresentativeError;
use crate::representative::models::CreateRepresentativeCommand;
use crate::representative::models::Representative;
use crate::representative::models::RepresentativeId;
use crate::representative::models::UpdateRepresentativeCommand;

/// Port for representative operations.
#[async_trait]
pub trait RepresentativeServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `PhoneAlreadyExists` - a submission with this phone exists
    async fn create_representative(
        &self,
        command: CreateRepresentativeCommand,
    ) -> Result<Representative, RepresentativeError>;

    /// All submissions, oldest first.
    async fn list_representatives(&self) -> Result<Vec<Representative>, RepresentativeError>;

    async fn get_representative(
        &self,
        id: &RepresentativeId,
    ) -> Result<Representative, RepresentativeError>;

    async fn update_representative(
        &self,
        id: &RepresentativeId,
        command: UpdateRepresentativeCommand,
    ) -> Result<Representative, RepresentativeError>;

    async fn delete_representative(&self, id: &RepresentativeId)
        -> Result<(), RepresentativeError>;
}

/// Persistence operations for representatives.
#[async_trait]
pub trait RepresentativeRepository: Send + Sync + 'static {
    async fn create(
        &self,
        representative: Representative,
    ) -> Result<Representative, RepresentativeError>;

    async fn find_by_id(
        &self,
        id: &RepresentativeId,
    ) -> Result<Option<Representative>, RepresentativeError>;

    async fn find_by_phone(&self, phone: &str)
        -> Result<Option<Representative>, RepresentativeError>;

    /// All submissions, oldest first.
    async fn list_all(&self) -> Result<Vec<Representative>, RepresentativeError>;

    async fn update(
        &self,
        representative: Representative,
    ) -> Result<Representative, RepresentativeError>;

    async fn delete(&self, id: &RepresentativeId) -> Result<(), RepresentativeError>;
}
