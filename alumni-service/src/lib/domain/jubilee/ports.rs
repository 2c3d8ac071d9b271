use async_trait::async_trait;

use crate::jubilee::errors::JubileeError;
use crate::jubilee::models::BatchGroupListing;
use crate::jubilee::models::CsvImportReport;
use crate::jubilee::models::JubileeGroup;
use crate::jubilee::models::JubileeParticipant;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::models::RegisterParticipantCommand;
use crate::jubilee::models::UpdateParticipantCommand;

/// Port for Silver Jubilee participant operations.
#[async_trait]
pub trait JubileeServicePort: Send + Sync + 'static {
    /// Register one participant.
    ///
    /// Enforces category-dependent required fields, the duplicate
    /// email/phone check for non-companion categories, resolves the main
    /// participant for guests and babies, and assigns a unique secret code.
    ///
    /// # Errors
    /// * `MissingField` - a field required by the category is absent
    /// * `Duplicate` - email or phone already registered
    /// * `MainParticipantNotFound` - linked participant does not exist
    async fn register(
        &self,
        command: RegisterParticipantCommand,
    ) -> Result<JubileeParticipant, JubileeError>;

    /// All participants, newest first.
    async fn list(&self) -> Result<Vec<JubileeParticipant>, JubileeError>;

    /// Participants of one batch/group, ordered by name.
    ///
    /// # Errors
    /// * `NoParticipantsInBatchGroup` - the combination has no entries
    async fn list_by_batch_group(
        &self,
        batch: i32,
        group: JubileeGroup,
    ) -> Result<BatchGroupListing, JubileeError>;

    async fn get(&self, id: &ParticipantId) -> Result<JubileeParticipant, JubileeError>;

    /// Update a participant; re-checks the duplicate rule when email or
    /// phone change.
    async fn update(
        &self,
        id: &ParticipantId,
        command: UpdateParticipantCommand,
    ) -> Result<JubileeParticipant, JubileeError>;

    async fn delete(&self, id: &ParticipantId) -> Result<(), JubileeError>;

    /// Bulk import from a CSV document; one participant per record.
    ///
    /// Rows that fail validation or registration are collected in the report
    /// without aborting the batch.
    async fn import_csv(&self, data: &[u8]) -> Result<CsvImportReport, JubileeError>;
}

/// Persistence operations for participants.
#[async_trait]
pub trait JubileeRepository: Send + Sync + 'static {
    async fn create(
        &self,
        participant: JubileeParticipant,
    ) -> Result<JubileeParticipant, JubileeError>;

    async fn find_by_id(
        &self,
        id: &ParticipantId,
    ) -> Result<Option<JubileeParticipant>, JubileeError>;

    async fn find_by_secret_code(
        &self,
        secret_code: &str,
    ) -> Result<Option<JubileeParticipant>, JubileeError>;

    /// Any participant matching the email or phone, ignoring `exclude`.
    async fn find_duplicate(
        &self,
        email: Option<String>,
        phone: Option<String>,
        exclude: Option<ParticipantId>,
    ) -> Result<Option<JubileeParticipant>, JubileeError>;

    /// All participants, newest first.
    async fn list_all(&self) -> Result<Vec<JubileeParticipant>, JubileeError>;

    /// Participants of one batch/group, ordered by name.
    async fn list_by_batch_group(
        &self,
        batch: i32,
        group: JubileeGroup,
    ) -> Result<Vec<JubileeParticipant>, JubileeError>;

    async fn update(
        &self,
        participant: JubileeParticipant,
    ) -> Result<JubileeParticipant, JubileeError>;

    async fn delete(&self, id: &ParticipantId) -> Result<(), JubileeError>;
}
