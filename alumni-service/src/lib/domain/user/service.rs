use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;

use crate::user::errors::UserError;
use crate::user::models::UpdateUserCommand;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for user profile operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(first_name) = command.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = command.last_name {
            user.last_name = last_name;
        }
        if let Some(phone) = command.phone {
            user.phone = phone;
        }
        if let Some(email) = command.email {
            user.email = Some(email);
        }
        if let Some(password) = command.password {
            user.password_hash = self.password_hasher.hash(password.as_str())?;
        }
        if let Some(role) = command.role {
            user.role = role;
        }
        if let Some(user_type) = command.user_type {
            user.user_type = user_type;
        }
        if let Some(membership_category) = command.membership_category {
            user.membership_category = membership_category;
        }
        if let Some(status) = command.status {
            user.status = status;
        }
        user.updated_at = Utc::now();

        self.repository.update(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::user::models::EmailAddress;
    use crate::user::models::MembershipCategory;
    use crate::user::models::Password;
    use crate::user::models::Phone;
    use crate::user::models::UserRole;
    use crate::user::models::UserStatus;
    use crate::user::models::UserType;

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
            async fn set_reset_token(&self, id: &UserId, token_hash: &str, expires_at: chrono::DateTime<Utc>) -> Result<(), UserError>;
            async fn clear_reset_token(&self, id: &UserId) -> Result<(), UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    pub fn test_user(id: UserId) -> User {
        User {
            id,
            first_name: "Rahim".to_string(),
            last_name: "Uddin".to_string(),
            phone: Phone::new("01712345678".to_string()).unwrap(),
            email: Some(EmailAddress::new("rahim@example.com".to_string()).unwrap()),
            password_hash: "$argon2id$test_hash".to_string(),
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

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();
        let expected = test_user(user_id);

        let returned = expected.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository), PasswordHasher::new());

        let user = service.get_user(&user_id).await.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.phone.as_str(), "01712345678");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), PasswordHasher::new());

        let result = service.get_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_user_rehashes_password() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();
        let existing = test_user(user_id);

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .withf(|user| {
                user.first_name == "Karim" && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "$argon2id$test_hash"
            })
            .times(1)
            .returning(|user| Ok(user));

        let service = UserService::new(Arc::new(repository), PasswordHasher::new());

        let command = UpdateUserCommand {
            first_name: Some("Karim".to_string()),
            password: Some(Password::new("Abcd123!@".to_string()).unwrap()),
            ..Default::default()
        };

        let updated = service.update_user(&user_id, command).await.unwrap();
        assert_eq!(updated.first_name, "Karim");
    }

    #[tokio::test]
    async fn test_update_user_duplicate_phone() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();
        let existing = test_user(user_id);

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        repository
            .expect_update()
            .times(1)
            .returning(|user| Err(UserError::PhoneAlreadyExists(user.phone.as_str().to_string())));

        let service = UserService::new(Arc::new(repository), PasswordHasher::new());

        let command = UpdateUserCommand {
            phone: Some(Phone::new("01912345678".to_string()).unwrap()),
            ..Default::default()
        };

        let result = service.update_user(&user_id, command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::PhoneAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        let user_id = UserId::new();

        repository
            .expect_delete()
            .times(1)
            .returning(move |_| Err(UserError::NotFound(user_id.to_string())));

        let service = UserService::new(Arc::new(repository), PasswordHasher::new());

        let result = service.delete_user(&user_id).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
