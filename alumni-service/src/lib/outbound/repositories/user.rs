use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::Phone;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    phone: String,
    email: Option<String>,
    password_hash: String,
    role: String,
    user_type: String,
    membership_category: String,
    status: String,
    refresh_token: Option<String>,
    password_reset_token: Option<String>,
    password_reset_expires: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            phone: Phone::new(row.phone)?,
            email: row.email.map(EmailAddress::new).transpose()?,
            password_hash: row.password_hash,
            role: row.role.parse()?,
            user_type: row.user_type.parse()?,
            membership_category: row.membership_category.parse()?,
            status: row.status.parse()?,
            refresh_token: row.refresh_token,
            password_reset_token: row.password_reset_token,
            password_reset_expires: row.password_reset_expires,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_USER: &str = "\
    SELECT id, first_name, last_name, phone, email, password_hash, role, \
    user_type, membership_category, status, refresh_token, \
    password_reset_token, password_reset_expires, created_at, updated_at \
    FROM users";

/// Map unique-index violations onto the domain conflict errors.
fn map_unique_violation(e: sqlx::Error, user: &User) -> UserError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            if db_err.constraint() == Some("users_phone_key") {
                return UserError::PhoneAlreadyExists(user.phone.as_str().to_string());
            }
            if db_err.constraint() == Some("users_email_key") {
                let email = user.email.as_ref().map(|e| e.as_str()).unwrap_or_default();
                return UserError::EmailAlreadyExists(email.to_string());
            }
        }
    }
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, first_name, last_name, phone, email, password_hash,
                role, user_type, membership_category, status,
                refresh_token, password_reset_token, password_reset_expires,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(user.id.0)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.phone.as_str())
        .bind(user.email.as_ref().map(|e| e.as_str()))
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.user_type.as_str())
        .bind(user.membership_category.as_str())
        .bind(user.status.as_str())
        .bind(user.refresh_token.as_deref())
        .bind(user.password_reset_token.as_deref())
        .bind(user.password_reset_expires)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE phone = $1"))
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} WHERE password_reset_token = $1"
        ))
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(User::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{SELECT_USER} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, phone = $4, email = $5,
                password_hash = $6, role = $7, user_type = $8,
                membership_category = $9, status = $10, updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.phone.as_str())
        .bind(user.email.as_ref().map(|e| e.as_str()))
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.user_type.as_str())
        .bind(user.membership_category.as_str())
        .bind(user.status.as_str())
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &user))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }

    async fn update_refresh_token(
        &self,
        id: &UserId,
        refresh_token: Option<String>,
    ) -> Result<(), UserError> {
        sqlx::query("UPDATE users SET refresh_token = $2, updated_at = $3 WHERE id = $1")
            .bind(id.0)
            .bind(refresh_token.as_deref())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError> {
        let result =
            sqlx::query("UPDATE users SET password_hash = $2, updated_at = $3 WHERE id = $1")
                .bind(id.0)
                .bind(password_hash)
                .bind(Utc::now())
                .execute(&self.pool)
                .await
                .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn set_reset_token(
        &self,
        id: &UserId,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserError> {
        sqlx::query(
            r#"
            UPDATE users
            SET password_reset_token = $2, password_reset_expires = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(token_hash)
        .bind(expires_at)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn clear_reset_token(&self, id: &UserId) -> Result<(), UserError> {
        sqlx::query(
            r#"
            UPDATE users
            SET password_reset_token = NULL, password_reset_expires = NULL, updated_at = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
