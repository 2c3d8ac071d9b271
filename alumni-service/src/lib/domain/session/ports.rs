use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::session::errors::SessionError;
use crate::session::models::AuthTokens;
use crate::user::models::Password;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;

/// Port for the session/auth service.
///
/// The only component allowed to mint tokens or mutate credential fields.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Create an account and start its first session.
    ///
    /// # Errors
    /// * `DuplicateAccount` - phone (or supplied email) already registered
    async fn register(&self, command: RegisterUserCommand)
        -> Result<(User, AuthTokens), SessionError>;

    /// Verify credentials and start a session.
    ///
    /// The identifier is resolved against email first, then phone.
    ///
    /// # Errors
    /// * `InvalidCredentials` - no matching account or wrong password
    async fn login(&self, identifier: &str, password: &str)
        -> Result<(User, AuthTokens), SessionError>;

    /// Rotate the refresh token and issue a fresh access token.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - bad signature/expiry, unknown or inactive
    ///   subject, or the presented value does not equal the stored one
    ///   (replay of a superseded token)
    async fn refresh(&self, presented_refresh_token: &str) -> Result<AuthTokens, SessionError>;

    /// Revoke the presented access token and clear the stored refresh token.
    async fn logout(&self, user_id: &UserId, access_token: &str) -> Result<(), SessionError>;

    /// Replace the password after verifying the old one.
    ///
    /// # Errors
    /// * `InvalidCredentials` - old password does not verify
    async fn change_password(
        &self,
        user_id: &UserId,
        old_password: &str,
        new_password: Password,
    ) -> Result<(), SessionError>;

    /// Create a password-reset token for the account behind `identifier`.
    ///
    /// Stores only the token hash plus a bounded expiry; the returned
    /// plaintext is for out-of-band delivery and must never be persisted
    /// or logged.
    ///
    /// # Errors
    /// * `AccountNotFound` / `NoEmailOnAccount` - swallowed by the caller,
    ///   never surfaced over HTTP
    async fn forgot_password(&self, identifier: &str) -> Result<(User, String), SessionError>;

    /// Redeem a password-reset token.
    ///
    /// Clears the reset fields and the stored refresh token, forcing a fresh
    /// login everywhere.
    ///
    /// # Errors
    /// * `InvalidOrExpiredResetToken` - hash mismatch or expiry passed
    async fn reset_password_with_token(
        &self,
        token: &str,
        new_password: Password,
    ) -> Result<(), SessionError>;
}

/// Early revocation of access tokens.
///
/// Entries carry the token's own expiry so implementations can drop them as
/// soon as the token would have died naturally.
#[async_trait]
pub trait RevocationStore: Send + Sync + 'static {
    async fn revoke(&self, token: &str, expires_at: DateTime<Utc>);

    async fn is_revoked(&self, token: &str) -> bool;
}
