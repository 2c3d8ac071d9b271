use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::UserError;
use crate::user::models::UpdateUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for user profile operations exposed to the HTTP layer.
///
/// Credential mutations (tokens, password resets) are deliberately absent
/// here; only the session service is allowed to perform those, through
/// [`UserRepository`] directly.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Retrieve all users, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update existing user with optional fields.
    ///
    /// A supplied password is re-hashed before storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `PhoneAlreadyExists` / `EmailAlreadyExists` - unique field taken by
    ///   another account
    /// * `DatabaseError` - Database operation failed
    async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
        -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// Persistence operations for the user aggregate (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `PhoneAlreadyExists` - phone number is already registered
    /// * `EmailAlreadyExists` - email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, UserError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve the user holding this password-reset token hash, if any.
    ///
    /// Expiry is NOT checked here; the session service compares the stored
    /// expiry against the current time so that an expired record fails even
    /// when the hash matches.
    async fn find_by_reset_token_hash(&self, token_hash: &str)
        -> Result<Option<User>, UserError>;

    /// Retrieve all users, newest first.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `PhoneAlreadyExists` / `EmailAlreadyExists` - unique field taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Overwrite the stored refresh token. `None` clears it, ending the
    /// ability to silently refresh.
    async fn update_refresh_token(
        &self,
        id: &UserId,
        refresh_token: Option<String>,
    ) -> Result<(), UserError>;

    /// Store a new password hash.
    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;

    /// Store a password-reset token hash together with its expiry.
    async fn set_reset_token(
        &self,
        id: &UserId,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserError>;

    /// Clear the password-reset token and expiry.
    async fn clear_reset_token(&self, id: &UserId) -> Result<(), UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
