use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Digest;
use sha2::Sha256;

use crate::session::errors::SessionError;
use crate::session::models::AuthTokens;
use crate::session::ports::RevocationStore;
use crate::session::ports::SessionServicePort;
use crate::session::tokens::TokenIssuer;
use crate::user::errors::UserError;
use crate::user::models::MembershipCategory;
use crate::user::models::Password;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::UserRole;
use crate::user::models::UserStatus;
use crate::user::models::UserType;
use crate::user::ports::UserRepository;

/// Session/auth service.
///
/// Orchestrates the whole token lifecycle: registration, login, rotation,
/// revocation, and password changes/resets. Nothing else in the crate mints
/// tokens or touches credential fields.
pub struct SessionService<UR, RS>
where
    UR: UserRepository,
    RS: RevocationStore,
{
    users: Arc<UR>,
    revocations: Arc<RS>,
    tokens: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
    reset_token_ttl: Duration,
}

impl<UR, RS> SessionService<UR, RS>
where
    UR: UserRepository,
    RS: RevocationStore,
{
    pub fn new(
        users: Arc<UR>,
        revocations: Arc<RS>,
        tokens: Arc<TokenIssuer>,
        password_hasher: PasswordHasher,
        reset_token_ttl_minutes: i64,
    ) -> Self {
        Self {
            users,
            revocations,
            tokens,
            password_hasher,
            reset_token_ttl: Duration::minutes(reset_token_ttl_minutes),
        }
    }

    /// Issue both tokens and persist the refresh token, superseding any
    /// previously stored value (single active session per user).
    async fn start_session(&self, user: &User) -> Result<AuthTokens, SessionError> {
        let access_token = self
            .tokens
            .issue_access_token(user)
            .map_err(|e| SessionError::TokenSigning(e.to_string()))?;
        let refresh_token = self
            .tokens
            .issue_refresh_token(user)
            .map_err(|e| SessionError::TokenSigning(e.to_string()))?;

        self.users
            .update_refresh_token(&user.id, Some(refresh_token.clone()))
            .await?;

        Ok(AuthTokens {
            access_token,
            refresh_token,
        })
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, UserError> {
        if let Some(user) = self.users.find_by_email(identifier).await? {
            return Ok(Some(user));
        }
        self.users.find_by_phone(identifier).await
    }
}

#[async_trait]
impl<UR, RS> SessionServicePort for SessionService<UR, RS>
where
    UR: UserRepository,
    RS: RevocationStore,
{
    async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<(User, AuthTokens), SessionError> {
        if self
            .users
            .find_by_phone(command.phone.as_str())
            .await?
            .is_some()
        {
            return Err(SessionError::DuplicateAccount);
        }
        if let Some(email) = &command.email {
            if self.users.find_by_email(email.as_str()).await?.is_some() {
                return Err(SessionError::DuplicateAccount);
            }
        }

        let password_hash = self.password_hasher.hash(command.password.as_str())?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            phone: command.phone,
            email: command.email,
            password_hash,
            role: command.role.unwrap_or(UserRole::User),
            user_type: UserType::User,
            membership_category: command
                .membership_category
                .unwrap_or(MembershipCategory::Free),
            status: UserStatus::Active,
            refresh_token: None,
            password_reset_token: None,
            password_reset_expires: None,
            created_at: now,
            updated_at: now,
        };

        // The pre-checks race with concurrent registrations; the unique
        // indexes are the source of truth.
        let mut user = self.users.create(user).await.map_err(|e| match e {
            UserError::PhoneAlreadyExists(_) | UserError::EmailAlreadyExists(_) => {
                SessionError::DuplicateAccount
            }
            other => SessionError::User(other),
        })?;

        let tokens = self.start_session(&user).await?;
        user.refresh_token = Some(tokens.refresh_token.clone());

        Ok((user, tokens))
    }

    async fn login(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<(User, AuthTokens), SessionError> {
        let mut user = self
            .find_by_identifier(identifier)
            .await?
            .ok_or(SessionError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)?;
        if !password_matches {
            return Err(SessionError::InvalidCredentials);
        }

        let tokens = self.start_session(&user).await?;
        user.refresh_token = Some(tokens.refresh_token.clone());

        Ok((user, tokens))
    }

    async fn refresh(&self, presented_refresh_token: &str) -> Result<AuthTokens, SessionError> {
        let claims = self
            .tokens
            .verify_refresh_token(presented_refresh_token)
            .map_err(|_| SessionError::InvalidRefreshToken)?;

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| SessionError::InvalidRefreshToken)?;

        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or(SessionError::InvalidRefreshToken)?;

        if user.status != UserStatus::Active {
            return Err(SessionError::InvalidRefreshToken);
        }

        // Rotation makes the stored value the single live token; a presented
        // token that no longer matches is a replay of a superseded one.
        if user.refresh_token.as_deref() != Some(presented_refresh_token) {
            return Err(SessionError::InvalidRefreshToken);
        }

        self.start_session(&user).await
    }

    async fn logout(&self, user_id: &UserId, access_token: &str) -> Result<(), SessionError> {
        // Revoke only if the token still verifies; an already-expired token
        // needs no blacklist entry.
        if let Ok(claims) = self.tokens.verify_access_token(access_token) {
            let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
                .unwrap_or_else(Utc::now);
            self.revocations.revoke(access_token, expires_at).await;
        }

        self.users.update_refresh_token(user_id, None).await?;

        Ok(())
    }

    async fn change_password(
        &self,
        user_id: &UserId,
        old_password: &str,
        new_password: Password,
    ) -> Result<(), SessionError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(SessionError::InvalidCredentials)?;

        let old_matches = self
            .password_hasher
            .verify(old_password, &user.password_hash)?;
        if !old_matches {
            return Err(SessionError::InvalidCredentials);
        }

        let password_hash = self.password_hasher.hash(new_password.as_str())?;
        self.users.update_password(user_id, &password_hash).await?;

        Ok(())
    }

    async fn forgot_password(&self, identifier: &str) -> Result<(User, String), SessionError> {
        let user = self
            .find_by_identifier(identifier)
            .await?
            .ok_or(SessionError::AccountNotFound)?;

        if user.email.is_none() {
            return Err(SessionError::NoEmailOnAccount);
        }

        let reset_token = generate_reset_token();
        let token_hash = hash_reset_token(&reset_token);
        let expires_at = Utc::now() + self.reset_token_ttl;

        self.users
            .set_reset_token(&user.id, &token_hash, expires_at)
            .await?;

        Ok((user, reset_token))
    }

    async fn reset_password_with_token(
        &self,
        token: &str,
        new_password: Password,
    ) -> Result<(), SessionError> {
        let token_hash = hash_reset_token(token);

        let user = self
            .users
            .find_by_reset_token_hash(&token_hash)
            .await?
            .ok_or(SessionError::InvalidOrExpiredResetToken)?;

        match user.password_reset_expires {
            Some(expires_at) if expires_at > Utc::now() => {}
            _ => return Err(SessionError::InvalidOrExpiredResetToken),
        }

        let password_hash = self.password_hasher.hash(new_password.as_str())?;
        self.users.update_password(&user.id, &password_hash).await?;
        self.users.clear_reset_token(&user.id).await?;

        // Single use, and any live session dies with it.
        self.users.update_refresh_token(&user.id, None).await?;

        Ok(())
    }
}

/// Generate a high-entropy password-reset token.
///
/// 32 bytes from the OS CSPRNG, URL-safe base64 without padding. Only the
/// hash of this value is ever persisted.
fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// SHA-256 of a reset token, hex encoded, as stored on the user row.
fn hash_reset_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::user::models::EmailAddress;
    use crate::user::models::Phone;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_reset_token_hash(&self, token_hash: &str) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn update_refresh_token(&self, id: &UserId, refresh_token: Option<String>) -> Result<(), UserError>;
            async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;
            async fn set_reset_token(&self, id: &UserId, token_hash: &str, expires_at: DateTime<Utc>) -> Result<(), UserError>;
            async fn clear_reset_token(&self, id: &UserId) -> Result<(), UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    mock! {
        pub TestRevocationStore {}

        #[async_trait]
        impl RevocationStore for TestRevocationStore {
            async fn revoke(&self, token: &str, expires_at: DateTime<Utc>);
            async fn is_revoked(&self, token: &str) -> bool;
        }
    }

    const ACCESS_SECRET: &[u8] = b"access_secret_at_least_32_bytes_long!";
    const REFRESH_SECRET: &[u8] = b"refresh_secret_at_least_32_bytes_long";
    const PASSWORD: &str = "Abcd123!@";

    fn issuer() -> Arc<TokenIssuer> {
        Arc::new(TokenIssuer::new(ACCESS_SECRET, REFRESH_SECRET, 15, 7))
    }

    fn service(
        repository: MockTestUserRepository,
        revocations: MockTestRevocationStore,
    ) -> SessionService<MockTestUserRepository, MockTestRevocationStore> {
        SessionService::new(
            Arc::new(repository),
            Arc::new(revocations),
            issuer(),
            PasswordHasher::new(),
            60,
        )
    }

    fn test_user(id: UserId) -> User {
        User {
            id,
            first_name: "Rahim".to_string(),
            last_name: "Uddin".to_string(),
            phone: Phone::new("01712345678".to_string()).unwrap(),
            email: Some(EmailAddress::new("rahim@example.com".to_string()).unwrap()),
            password_hash: PasswordHasher::new().hash(PASSWORD).unwrap(),
            role: UserRole::User,
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

    fn register_command() -> RegisterUserCommand {
        RegisterUserCommand {
            first_name: "Rahim".to_string(),
            last_name: "Uddin".to_string(),
            phone: Phone::new("01712345678".to_string()).unwrap(),
            email: Some(EmailAddress::new("rahim@example.com".to_string()).unwrap()),
            password: Password::new(PASSWORD.to_string()).unwrap(),
            role: None,
            membership_category: None,
        }
    }

    #[tokio::test]
    async fn test_register_success_issues_both_tokens() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_phone()
            .with(eq("01712345678"))
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .with(eq("rahim@example.com"))
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.password_hash.starts_with("$argon2")
                    && user.status == UserStatus::Active
                    && user.role == UserRole::User
            })
            .times(1)
            .returning(|user| Ok(user));
        repository
            .expect_update_refresh_token()
            .withf(|_, token| token.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, MockTestRevocationStore::new());

        let (user, tokens) = service.register(register_command()).await.unwrap();

        // Access token subject equals the new user's id.
        let claims = issuer().verify_access_token(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(user.refresh_token.as_deref(), Some(tokens.refresh_token.as_str()));
    }

    #[tokio::test]
    async fn test_register_duplicate_phone() {
        let mut repository = MockTestUserRepository::new();
        let existing = test_user(UserId::new());
        repository
            .expect_find_by_phone()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.register(register_command()).await;
        assert!(matches!(result.unwrap_err(), SessionError::DuplicateAccount));
    }

    #[tokio::test]
    async fn test_register_maps_constraint_conflict() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_phone()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::PhoneAlreadyExists(user.phone.as_str().to_string())));

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.register(register_command()).await;
        assert!(matches!(result.unwrap_err(), SessionError::DuplicateAccount));
    }

    #[tokio::test]
    async fn test_login_success_stores_new_refresh_token() {
        let mut repository = MockTestUserRepository::new();
        let user = test_user(UserId::new());

        let returned = user.clone();
        repository
            .expect_find_by_email()
            .with(eq("rahim@example.com"))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update_refresh_token()
            .withf(|_, token| token.is_some())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, MockTestRevocationStore::new());

        let (logged_in, tokens) = service.login("rahim@example.com", PASSWORD).await.unwrap();
        assert_eq!(logged_in.id, user.id);

        let claims = issuer().verify_access_token(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
    }

    #[tokio::test]
    async fn test_login_falls_back_to_phone_lookup() {
        let mut repository = MockTestUserRepository::new();
        let user = test_user(UserId::new());

        repository
            .expect_find_by_email()
            .with(eq("01712345678"))
            .times(1)
            .returning(|_| Ok(None));
        let returned = user.clone();
        repository
            .expect_find_by_phone()
            .with(eq("01712345678"))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update_refresh_token()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.login("01712345678", PASSWORD).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestUserRepository::new();
        let user = test_user(UserId::new());

        let returned = user.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update_refresh_token().times(0);

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.login("rahim@example.com", "Wrong123!@").await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_unknown_identifier() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_phone()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.login("nobody@example.com", PASSWORD).await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_refresh_rotates_stored_token() {
        let issuer = issuer();
        let user_id = UserId::new();
        let mut user = test_user(user_id);
        let presented = issuer.issue_refresh_token(&user).unwrap();
        user.refresh_token = Some(presented.clone());

        let mut repository = MockTestUserRepository::new();
        let returned = user.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        let presented_clone = presented.clone();
        repository
            .expect_update_refresh_token()
            .withf(move |_, token| token.is_some() && token.as_deref() != Some(presented_clone.as_str()))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SessionService::new(
            Arc::new(repository),
            Arc::new(MockTestRevocationStore::new()),
            Arc::clone(&issuer),
            PasswordHasher::new(),
            60,
        );

        let tokens = service.refresh(&presented).await.unwrap();
        assert_ne!(tokens.refresh_token, presented);

        let claims = issuer.verify_access_token(&tokens.access_token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[tokio::test]
    async fn test_refresh_rejects_superseded_token() {
        let issuer = issuer();
        let user_id = UserId::new();
        let mut user = test_user(user_id);
        let stale = issuer.issue_refresh_token(&user).unwrap();
        // The store has moved on to a different value.
        user.refresh_token = Some("a.newer.token".to_string());

        let mut repository = MockTestUserRepository::new();
        let returned = user.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update_refresh_token().times(0);

        let service = SessionService::new(
            Arc::new(repository),
            Arc::new(MockTestRevocationStore::new()),
            issuer,
            PasswordHasher::new(),
            60,
        );

        let result = service.refresh(&stale).await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidRefreshToken));
    }

    #[tokio::test]
    async fn test_refresh_rejects_inactive_user() {
        let issuer = issuer();
        let user_id = UserId::new();
        let mut user = test_user(user_id);
        let presented = issuer.issue_refresh_token(&user).unwrap();
        user.refresh_token = Some(presented.clone());
        user.status = UserStatus::Inactive;

        let mut repository = MockTestUserRepository::new();
        let returned = user.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update_refresh_token().times(0);

        let service = SessionService::new(
            Arc::new(repository),
            Arc::new(MockTestRevocationStore::new()),
            issuer,
            PasswordHasher::new(),
            60,
        );

        let result = service.refresh(&presented).await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidRefreshToken));
    }

    #[tokio::test]
    async fn test_refresh_rejects_missing_user() {
        let issuer = issuer();
        let user = test_user(UserId::new());
        let presented = issuer.issue_refresh_token(&user).unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = SessionService::new(
            Arc::new(repository),
            Arc::new(MockTestRevocationStore::new()),
            issuer,
            PasswordHasher::new(),
            60,
        );

        let result = service.refresh(&presented).await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidRefreshToken));
    }

    #[tokio::test]
    async fn test_refresh_rejects_garbage_token() {
        let repository = MockTestUserRepository::new();
        let service = service(repository, MockTestRevocationStore::new());

        let result = service.refresh("not.a.token").await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidRefreshToken));
    }

    #[tokio::test]
    async fn test_logout_revokes_and_clears_refresh_token() {
        let issuer = issuer();
        let user_id = UserId::new();
        let user = test_user(user_id);
        let access = issuer.issue_access_token(&user).unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_update_refresh_token()
            .withf(move |id, token| *id == user_id && token.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let mut revocations = MockTestRevocationStore::new();
        let access_clone = access.clone();
        revocations
            .expect_revoke()
            .withf(move |token, expires_at| {
                token == access_clone && *expires_at > Utc::now()
            })
            .times(1)
            .returning(|_, _| ());

        let service = SessionService::new(
            Arc::new(repository),
            Arc::new(revocations),
            issuer,
            PasswordHasher::new(),
            60,
        );

        service.logout(&user_id, &access).await.unwrap();
    }

    #[tokio::test]
    async fn test_change_password_wrong_old_password() {
        let mut repository = MockTestUserRepository::new();
        let user = test_user(UserId::new());

        let returned = user.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update_password().times(0);

        let service = service(repository, MockTestRevocationStore::new());

        let result = service
            .change_password(
                &user.id,
                "Wrong123!@",
                Password::new("Efgh456!@".to_string()).unwrap(),
            )
            .await;
        assert!(matches!(result.unwrap_err(), SessionError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let mut repository = MockTestUserRepository::new();
        let user = test_user(UserId::new());

        let returned = user.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update_password()
            .withf(|_, hash| hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, MockTestRevocationStore::new());

        let result = service
            .change_password(
                &user.id,
                PASSWORD,
                Password::new("Efgh456!@".to_string()).unwrap(),
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_forgot_password_stores_hash_of_returned_token() {
        let mut repository = MockTestUserRepository::new();
        let user = test_user(UserId::new());

        let returned = user.clone();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let stored_hash: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&stored_hash);
        repository
            .expect_set_reset_token()
            .withf(|_, _, expires_at| *expires_at > Utc::now())
            .times(1)
            .returning(move |_, hash, _| {
                *captured.lock().unwrap() = Some(hash.to_string());
                Ok(())
            });

        let service = service(repository, MockTestRevocationStore::new());

        let (_, plaintext) = service.forgot_password("rahim@example.com").await.unwrap();

        let stored = stored_hash.lock().unwrap().clone().unwrap();
        assert_eq!(stored, hash_reset_token(&plaintext));
        // Only the hash crosses the repository boundary.
        assert_ne!(stored, plaintext);
    }

    #[tokio::test]
    async fn test_forgot_password_unknown_account() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_phone()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_set_reset_token().times(0);

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.forgot_password("nobody@example.com").await;
        assert!(matches!(result.unwrap_err(), SessionError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_forgot_password_account_without_email() {
        let mut repository = MockTestUserRepository::new();
        let mut user = test_user(UserId::new());
        user.email = None;

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        let returned = user.clone();
        repository
            .expect_find_by_phone()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_set_reset_token().times(0);

        let service = service(repository, MockTestRevocationStore::new());

        let result = service.forgot_password("01712345678").await;
        assert!(matches!(result.unwrap_err(), SessionError::NoEmailOnAccount));
    }

    #[tokio::test]
    async fn test_reset_password_with_token_success_forces_logout() {
        let token = "the-plaintext-token";
        let user_id = UserId::new();
        let mut user = test_user(user_id);
        user.password_reset_token = Some(hash_reset_token(token));
        user.password_reset_expires = Some(Utc::now() + Duration::minutes(30));

        let mut repository = MockTestUserRepository::new();
        let expected_hash = hash_reset_token(token);
        let returned = user.clone();
        repository
            .expect_find_by_reset_token_hash()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_update_password()
            .withf(|_, hash| hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(()));
        repository
            .expect_clear_reset_token()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));
        repository
            .expect_update_refresh_token()
            .withf(move |id, value| *id == user_id && value.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(repository, MockTestRevocationStore::new());

        let result = service
            .reset_password_with_token(token, Password::new("Efgh456!@".to_string()).unwrap())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_reset_password_with_expired_token() {
        let token = "the-plaintext-token";
        let mut user = test_user(UserId::new());
        user.password_reset_token = Some(hash_reset_token(token));
        user.password_reset_expires = Some(Utc::now() - Duration::minutes(1));

        let mut repository = MockTestUserRepository::new();
        let returned = user.clone();
        repository
            .expect_find_by_reset_token_hash()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update_password().times(0);

        let service = service(repository, MockTestRevocationStore::new());

        let result = service
            .reset_password_with_token(token, Password::new("Efgh456!@".to_string()).unwrap())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            SessionError::InvalidOrExpiredResetToken
        ));
    }

    #[tokio::test]
    async fn test_reset_password_with_unknown_token() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_reset_token_hash()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository, MockTestRevocationStore::new());

        let result = service
            .reset_password_with_token("bogus", Password::new("Efgh456!@".to_string()).unwrap())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            SessionError::InvalidOrExpiredResetToken
        ));
    }

    #[test]
    fn test_generated_reset_tokens_are_unique_and_urlsafe() {
        let first = generate_reset_token();
        let second = generate_reset_token();

        assert_ne!(first, second);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
