use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::representative::errors::RepresentativeError;
use crate::representative::models::Representative;
use crate::representative::models::RepresentativeId;
use crate::representative::ports::RepresentativeRepository;

pub struct PostgresRepresentativeRepository {
    pool: PgPool,
}

impl PostgresRepresentativeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RepresentativeRow {
    id: Uuid,
    name: String,
    phone: String,
    facebook_url: String,
    comments: Option<String>,
    hsc_year: i32,
    hsc_group: String,
    gender: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RepresentativeRow> for Representative {
    fn from(row: RepresentativeRow) -> Self {
        Representative {
            id: RepresentativeId(row.id),
            name: row.name,
            phone: row.phone,
            facebook_url: row.facebook_url,
            comments: row.comments,
            hsc_year: row.hsc_year,
            hsc_group: row.hsc_group,
            gender: row.gender,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_REPRESENTATIVE: &str = "\
    SELECT id, name, phone, facebook_url, comments, hsc_year, hsc_group, \
    gender, created_at, updated_at FROM representatives";

fn map_phone_conflict(e: sqlx::Error) -> RepresentativeError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation()
            && db_err.constraint() == Some("representatives_phone_key")
        {
            return RepresentativeError::PhoneAlreadyExists;
        }
    }
    RepresentativeError::DatabaseError(e.to_string())
}

#[async_trait]
impl RepresentativeRepository for PostgresRepresentativeRepository {
    async fn create(
        &self,
        representative: Representative,
    ) -> Result<Representative, RepresentativeError> {
        sqlx::query(
            r#"
            INSERT INTO representatives (id, name, phone, facebook_url,
                                         comments, hsc_year, hsc_group,
                                         gender, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(representative.id.0)
        .bind(&representative.name)
        .bind(&representative.phone)
        .bind(&representative.facebook_url)
        .bind(representative.comments.as_deref())
        .bind(representative.hsc_year)
        .bind(&representative.hsc_group)
        .bind(&representative.gender)
        .bind(representative.created_at)
        .bind(representative.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_phone_conflict)?;

        Ok(representative)
    }

    async fn find_by_id(
        &self,
        id: &RepresentativeId,
    ) -> Result<Option<Representative>, RepresentativeError> {
        let row = sqlx::query_as::<_, RepresentativeRow>(&format!(
            "{SELECT_REPRESENTATIVE} WHERE id = $1"
        ))
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepresentativeError::DatabaseError(e.to_string()))?;

        Ok(row.map(Representative::from))
    }

    async fn find_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<Representative>, RepresentativeError> {
        let row = sqlx::query_as::<_, RepresentativeRow>(&format!(
            "{SELECT_REPRESENTATIVE} WHERE phone = $1"
        ))
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepresentativeError::DatabaseError(e.to_string()))?;

        Ok(row.map(Representative::from))
    }

    async fn list_all(&self) -> Result<Vec<Representative>, RepresentativeError> {
        let rows = sqlx::query_as::<_, RepresentativeRow>(&format!(
            "{SELECT_REPRESENTATIVE} ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepresentativeError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Representative::from).collect())
    }

    async fn update(
        &self,
        representative: Representative,
    ) -> Result<Representative, RepresentativeError> {
        let result = sqlx::query(
            r#"
            UPDATE representatives
            SET name = $2, phone = $3, facebook_url = $4, comments = $5,
                hsc_year = $6, hsc_group = $7, gender = $8, updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(representative.id.0)
        .bind(&representative.name)
        .bind(&representative.phone)
        .bind(&representative.facebook_url)
        .bind(representative.comments.as_deref())
        .bind(representative.hsc_year)
        .bind(&representative.hsc_group)
        .bind(&representative.gender)
        .bind(representative.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_phone_conflict)?;

        if result.rows_affected() == 0 {
            return Err(RepresentativeError::NotFound(representative.id.to_string()));
        }

        Ok(representative)
    }

    async fn delete(&self, id: &RepresentativeId) -> Result<(), RepresentativeError> {
        let result = sqlx::query("DELETE FROM representatives WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| RepresentativeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepresentativeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
