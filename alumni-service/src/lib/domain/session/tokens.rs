use auth::JwtError;
use auth::JwtHandler;
use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use crate::session::models::AccessClaims;
use crate::session::models::RefreshClaims;
use crate::user::models::User;

/// Issues and verifies the two token kinds.
///
/// Access and refresh tokens are signed with separate secrets so a leaked
/// access secret cannot forge refresh tokens and vice versa. Issuing has no
/// side effects; persisting the refresh token is the caller's job.
pub struct TokenIssuer {
    access: JwtHandler,
    refresh: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(
        access_secret: &[u8],
        refresh_secret: &[u8],
        access_ttl_minutes: i64,
        refresh_ttl_days: i64,
    ) -> Self {
        Self {
            access: JwtHandler::new(access_secret),
            refresh: JwtHandler::new(refresh_secret),
            access_ttl: Duration::minutes(access_ttl_minutes),
            refresh_ttl: Duration::days(refresh_ttl_days),
        }
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Sign a short-lived access token for this user.
    pub fn issue_access_token(&self, user: &User) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user.id.to_string(),
            email: user.email.as_ref().map(|e| e.as_str().to_string()),
            role: user.role,
            status: user.status,
            user_type: user.user_type,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        };

        self.access.encode(&claims)
    }

    /// Sign a longer-lived, subject-only refresh token for this user.
    pub fn issue_refresh_token(&self, user: &User) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = RefreshClaims {
            sub: user.id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + self.refresh_ttl).timestamp(),
        };

        self.refresh.encode(&claims)
    }

    /// Verify signature and expiry of an access token.
    pub fn verify_access_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        self.access.decode(token)
    }

    /// Verify signature and expiry of a refresh token.
    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshClaims, JwtError> {
        self.refresh.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::user::models::EmailAddress;
    use crate::user::models::MembershipCategory;
    use crate::user::models::Phone;
    use crate::user::models::UserId;
    use crate::user::models::UserRole;
    use crate::user::models::UserStatus;
    use crate::user::models::UserType;

    const ACCESS_SECRET: &[u8] = b"access_secret_at_least_32_bytes_long!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_at_least_32_bytes_long";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(ACCESS_SECRET, REFRESH_SECRET, 15, 7)
    }

    fn user() -> User {
        User {
            id: UserId::new(),
            first_name: "Rahim".to_string(),
            last_name: "Uddin".to_string(),
            phone: Phone::new("01712345678".to_string()).unwrap(),
            email: Some(EmailAddress::new("rahim@example.com".to_string()).unwrap()),
            password_hash: "$argon2id$test_hash".to_string(),
            role: UserRole::Admin,
            user_type: UserType::User,
            membership_category: MembershipCategory::Free,
            status: UserStatus::Active,
            refresh_token: None,
            password_reset_token: None,
            password_reset_expires: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let issuer = issuer();
        let user = user();

        let token = issuer.issue_access_token(&user).unwrap();
        let claims = issuer.verify_access_token(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.status, UserStatus::Active);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_refresh_token_carries_subject_and_token_id() {
        let issuer = issuer();
        let user = user();

        let token = issuer.issue_refresh_token(&user).unwrap();
        let claims = issuer.verify_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert!(!claims.jti.is_empty());
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_consecutive_refresh_tokens_differ() {
        let issuer = issuer();
        let user = user();

        let first = issuer.issue_refresh_token(&user).unwrap();
        let second = issuer.issue_refresh_token(&user).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let issuer = issuer();
        let user = user();

        let access = issuer.issue_access_token(&user).unwrap();
        let refresh = issuer.issue_refresh_token(&user).unwrap();

        assert!(issuer.verify_refresh_token(&access).is_err());
        assert!(issuer.verify_access_token(&refresh).is_err());
    }
}
