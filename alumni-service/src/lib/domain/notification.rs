use async_trait::async_trait;
use thiserror::Error;

use crate::user::models::EmailAddress;

/// Error for outbound email delivery.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("Failed to build message: {0}")]
    MessageBuild(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Port for transactional email delivery.
///
/// The session service only produces reset tokens; building the link and
/// delegating delivery happens at the HTTP boundary, and delivery failures
/// are logged and swallowed there so the forgot-password endpoint stays
/// indistinguishable from the not-found case.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send the password-reset link to the account's email address.
    async fn send_password_reset(
        &self,
        to: &EmailAddress,
        recipient_name: &str,
        reset_link: &str,
    ) -> Result<(), MailerError>;
}
