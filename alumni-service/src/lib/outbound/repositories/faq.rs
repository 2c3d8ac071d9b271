use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::faq::errors::FaqError;
use crate::faq::models::Faq;
use crate::faq::models::FaqCategory;
use crate::faq::models::FaqCategoryId;
use crate::faq::models::FaqId;
use crate::faq::ports::FaqRepository;

pub struct PostgresFaqRepository {
    pool: PgPool,
}

impl PostgresFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for FaqCategory {
    fn from(row: CategoryRow) -> Self {
        FaqCategory {
            id: FaqCategoryId(row.id),
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FaqRow {
    id: Uuid,
    question: String,
    answer: String,
    category_id: Uuid,
    display_order: i32,
    show_home_page: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FaqRow> for Faq {
    fn from(row: FaqRow) -> Self {
        Faq {
            id: FaqId(row.id),
            question: row.question,
            answer: row.answer,
            category_id: FaqCategoryId(row.category_id),
            display_order: row.display_order,
            show_home_page: row.show_home_page,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_CATEGORY: &str =
    "SELECT id, name, description, created_at, updated_at FROM faq_categories";

const SELECT_FAQ: &str = "\
    SELECT id, question, answer, category_id, display_order, show_home_page, \
    created_at, updated_at FROM faqs";

fn map_category_conflict(e: sqlx::Error, name: &str) -> FaqError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation()
            && db_err.constraint() == Some("faq_categories_name_key")
        {
            return FaqError::DuplicateCategoryName(name.to_string());
        }
    }
    FaqError::DatabaseError(e.to_string())
}

#[async_trait]
impl FaqRepository for PostgresFaqRepository {
    async fn create_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError> {
        sqlx::query(
            r#"
            INSERT INTO faq_categories (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(category.id.0)
        .bind(&category.name)
        .bind(category.description.as_deref())
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_category_conflict(e, &category.name))?;

        Ok(category)
    }

    async fn find_category_by_id(
        &self,
        id: &FaqCategoryId,
    ) -> Result<Option<FaqCategory>, FaqError> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!("{SELECT_CATEGORY} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(row.map(FaqCategory::from))
    }

    async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError> {
        let rows =
            sqlx::query_as::<_, CategoryRow>(&format!("{SELECT_CATEGORY} ORDER BY name ASC"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(FaqCategory::from).collect())
    }

    async fn update_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError> {
        let result = sqlx::query(
            r#"
            UPDATE faq_categories
            SET name = $2, description = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(category.id.0)
        .bind(&category.name)
        .bind(category.description.as_deref())
        .bind(category.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_category_conflict(e, &category.name))?;

        if result.rows_affected() == 0 {
            return Err(FaqError::CategoryNotFound(category.id.to_string()));
        }

        Ok(category)
    }

    async fn delete_category(&self, id: &FaqCategoryId) -> Result<(), FaqError> {
        let result = sqlx::query("DELETE FROM faq_categories WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FaqError::CategoryNotFound(id.to_string()));
        }

        Ok(())
    }

    async fn count_faqs_in_category(&self, id: &FaqCategoryId) -> Result<i64, FaqError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faqs WHERE category_id = $1")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| FaqError::DatabaseError(e.to_string()))
    }

    async fn create_faq(&self, faq: Faq) -> Result<Faq, FaqError> {
        sqlx::query(
            r#"
            INSERT INTO faqs (id, question, answer, category_id, display_order,
                              show_home_page, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(faq.id.0)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(faq.category_id.0)
        .bind(faq.display_order)
        .bind(faq.show_home_page)
        .bind(faq.created_at)
        .bind(faq.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(faq)
    }

    async fn find_faq_by_id(&self, id: &FaqId) -> Result<Option<Faq>, FaqError> {
        let row = sqlx::query_as::<_, FaqRow>(&format!("{SELECT_FAQ} WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(row.map(Faq::from))
    }

    async fn find_faq_by_order(
        &self,
        category_id: &FaqCategoryId,
        display_order: i32,
        exclude: Option<FaqId>,
    ) -> Result<Option<Faq>, FaqError> {
        let row = sqlx::query_as::<_, FaqRow>(&format!(
            "{SELECT_FAQ} WHERE category_id = $1 AND display_order = $2 \
             AND ($3::uuid IS NULL OR id <> $3)"
        ))
        .bind(category_id.0)
        .bind(display_order)
        .bind(exclude.map(|id| id.0))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(row.map(Faq::from))
    }

    async fn count_home_page_faqs(&self, exclude: Option<FaqId>) -> Result<i64, FaqError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM faqs WHERE show_home_page \
             AND ($1::uuid IS NULL OR id <> $1)",
        )
        .bind(exclude.map(|id| id.0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))
    }

    async fn list_faqs(
        &self,
        category_id: Option<FaqCategoryId>,
    ) -> Result<Vec<Faq>, FaqError> {
        let rows = sqlx::query_as::<_, FaqRow>(&format!(
            "{SELECT_FAQ} WHERE ($1::uuid IS NULL OR category_id = $1) \
             ORDER BY display_order ASC, created_at DESC"
        ))
        .bind(category_id.map(|id| id.0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Faq::from).collect())
    }

    async fn list_home_page_faqs(&self, limit: i64) -> Result<Vec<Faq>, FaqError> {
        let rows = sqlx::query_as::<_, FaqRow>(&format!(
            "{SELECT_FAQ} WHERE show_home_page \
             ORDER BY display_order ASC, created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Faq::from).collect())
    }

    async fn update_faq(&self, faq: Faq) -> Result<Faq, FaqError> {
        let result = sqlx::query(
            r#"
            UPDATE faqs
            SET question = $2, answer = $3, category_id = $4,
                display_order = $5, show_home_page = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(faq.id.0)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(faq.category_id.0)
        .bind(faq.display_order)
        .bind(faq.show_home_page)
        .bind(faq.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FaqError::NotFound(faq.id.to_string()));
        }

        Ok(faq)
    }

    async fn delete_faq(&self, id: &FaqId) -> Result<(), FaqError> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| FaqError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(FaqError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
