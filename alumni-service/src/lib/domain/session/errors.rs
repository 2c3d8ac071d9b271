use thiserror::Error;

use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserError;

/// Failures of the session/auth service.
///
/// `AccountNotFound` and `NoEmailOnAccount` exist only inside the process:
/// the forgot-password handler swallows both so the HTTP surface never
/// reveals whether an account exists.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("User already exists")]
    DuplicateAccount,

    #[error("Invalid email/phone or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Password reset token is invalid or has expired")]
    InvalidOrExpiredResetToken,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Account has no email address")]
    NoEmailOnAccount,

    #[error("Invalid password: {0}")]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(#[from] auth::PasswordError),

    #[error(transparent)]
    User(#[from] UserError),
}
