use serde::Deserialize;
use serde::Serialize;

use crate::user::models::UserRole;
use crate::user::models::UserStatus;
use crate::user::models::UserType;

/// Claims carried by an access token.
///
/// Everything the request guard needs to authorize a request without a
/// database read. Validity is determined entirely by signature and `exp`;
/// early revocation goes through the revocation store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject: user id
    pub sub: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub user_type: UserType,
    pub first_name: String,
    pub last_name: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Claims carried by a refresh token.
///
/// Deliberately claim-minimal: the subject plus a unique token id. Role and
/// status are re-read from the credential store on every refresh, so a
/// demotion or deactivation takes effect at the next rotation. The `jti`
/// makes every issued token distinct; without it, two rotations within the
/// same second would mint byte-identical tokens and the superseded one
/// would still match the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshClaims {
    pub sub: String,
    /// Unique token id (rotation discriminator).
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly issued access/refresh token pair.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}
