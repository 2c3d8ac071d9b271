use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::jubilee::errors::JubileeError;
use crate::jubilee::models::JubileeGroup;
use crate::jubilee::models::JubileeParticipant;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::ports::JubileeRepository;

pub struct PostgresJubileeRepository {
    pool: PgPool,
}

impl PostgresJubileeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    id: Uuid,
    participant_category: String,
    secret_code: String,
    full_name: Option<String>,
    phone_number: Option<String>,
    alternative_phone_number: Option<String>,
    email: Option<String>,
    hsc_passing_year: Option<i32>,
    hsc_group: Option<String>,
    gender: Option<String>,
    blood_group: Option<String>,
    payment_type: String,
    amount_type: String,
    amount: f64,
    comments: Option<String>,
    father_name: Option<String>,
    father_phone_number: Option<String>,
    father_occupation: Option<String>,
    mother_name: Option<String>,
    mother_phone_number: Option<String>,
    mother_occupation: Option<String>,
    main_participant_batch: Option<i32>,
    main_participant_group: Option<String>,
    main_participant_id: Option<Uuid>,
    main_participant_name: Option<String>,
    guest_name: Option<String>,
    guest_mobile_number: Option<String>,
    baby_name: Option<String>,
    baby_phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ParticipantRow> for JubileeParticipant {
    type Error = JubileeError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(JubileeParticipant {
            id: ParticipantId(row.id),
            participant_category: row.participant_category.parse()?,
            secret_code: row.secret_code,
            full_name: row.full_name,
            phone_number: row.phone_number,
            alternative_phone_number: row.alternative_phone_number,
            email: row.email,
            hsc_passing_year: row.hsc_passing_year,
            group: row.hsc_group.as_deref().map(str::parse).transpose()?,
            gender: row.gender.as_deref().map(str::parse).transpose()?,
            blood_group: row.blood_group.as_deref().map(str::parse).transpose()?,
            payment_type: row.payment_type.parse()?,
            amount_type: row.amount_type.parse()?,
            amount: row.amount,
            comments: row.comments,
            father_name: row.father_name,
            father_phone_number: row.father_phone_number,
            father_occupation: row.father_occupation,
            mother_name: row.mother_name,
            mother_phone_number: row.mother_phone_number,
            mother_occupation: row.mother_occupation,
            main_participant_batch: row.main_participant_batch,
            main_participant_group: row
                .main_participant_group
                .as_deref()
                .map(str::parse)
                .transpose()?,
            main_participant_id: row.main_participant_id.map(ParticipantId),
            main_participant_name: row.main_participant_name,
            guest_name: row.guest_name,
            guest_mobile_number: row.guest_mobile_number,
            baby_name: row.baby_name,
            baby_phone: row.baby_phone,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_PARTICIPANT: &str = "\
    SELECT id, participant_category, secret_code, full_name, phone_number, \
    alternative_phone_number, email, hsc_passing_year, hsc_group, gender, \
    blood_group, payment_type, amount_type, amount, comments, father_name, \
    father_phone_number, father_occupation, mother_name, mother_phone_number, \
    mother_occupation, main_participant_batch, main_participant_group, \
    main_participant_id, main_participant_name, guest_name, \
    guest_mobile_number, baby_name, baby_phone, created_at, updated_at \
    FROM jubilee_participants";

#[async_trait]
impl JubileeRepository for PostgresJubileeRepository {
    async fn create(
        &self,
        participant: JubileeParticipant,
    ) -> Result<JubileeParticipant, JubileeError> {
        sqlx::query(
            r#"
            INSERT INTO jubilee_participants (
                id, participant_category, secret_code, full_name, phone_number,
                alternative_phone_number, email, hsc_passing_year, hsc_group,
                gender, blood_group, payment_type, amount_type, amount,
                comments, father_name, father_phone_number, father_occupation,
                mother_name, mother_phone_number, mother_occupation,
                main_participant_batch, main_participant_group,
                main_participant_id, main_participant_name, guest_name,
                guest_mobile_number, baby_name, baby_phone, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                    $25, $26, $27, $28, $29, $30, $31)
            "#,
        )
        .bind(participant.id.0)
        .bind(participant.participant_category.as_str())
        .bind(&participant.secret_code)
        .bind(participant.full_name.as_deref())
        .bind(participant.phone_number.as_deref())
        .bind(participant.alternative_phone_number.as_deref())
        .bind(participant.email.as_deref())
        .bind(participant.hsc_passing_year)
        .bind(participant.group.map(|g| g.as_str()))
        .bind(participant.gender.map(|g| g.as_str()))
        .bind(participant.blood_group.map(|b| b.as_str()))
        .bind(participant.payment_type.as_str())
        .bind(participant.amount_type.as_str())
        .bind(participant.amount)
        .bind(participant.comments.as_deref())
        .bind(participant.father_name.as_deref())
        .bind(participant.father_phone_number.as_deref())
        .bind(participant.father_occupation.as_deref())
        .bind(participant.mother_name.as_deref())
        .bind(participant.mother_phone_number.as_deref())
        .bind(participant.mother_occupation.as_deref())
        .bind(participant.main_participant_batch)
        .bind(participant.main_participant_group.map(|g| g.as_str()))
        .bind(participant.main_participant_id.map(|id| id.0))
        .bind(participant.main_participant_name.as_deref())
        .bind(participant.guest_name.as_deref())
        .bind(participant.guest_mobile_number.as_deref())
        .bind(participant.baby_name.as_deref())
        .bind(participant.baby_phone.as_deref())
        .bind(participant.created_at)
        .bind(participant.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        Ok(participant)
    }

    async fn find_by_id(
        &self,
        id: &ParticipantId,
    ) -> Result<Option<JubileeParticipant>, JubileeError> {
        let row =
            sqlx::query_as::<_, ParticipantRow>(&format!("{SELECT_PARTICIPANT} WHERE id = $1"))
                .bind(id.0)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        row.map(JubileeParticipant::try_from).transpose()
    }

    async fn find_by_secret_code(
        &self,
        secret_code: &str,
    ) -> Result<Option<JubileeParticipant>, JubileeError> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "{SELECT_PARTICIPANT} WHERE secret_code = $1"
        ))
        .bind(secret_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        row.map(JubileeParticipant::try_from).transpose()
    }

    async fn find_duplicate(
        &self,
        email: Option<String>,
        phone: Option<String>,
        exclude: Option<ParticipantId>,
    ) -> Result<Option<JubileeParticipant>, JubileeError> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "{SELECT_PARTICIPANT} \
             WHERE (($1::text IS NOT NULL AND email = $1) \
                 OR ($2::text IS NOT NULL AND phone_number = $2)) \
             AND ($3::uuid IS NULL OR id <> $3) \
             LIMIT 1"
        ))
        .bind(email)
        .bind(phone)
        .bind(exclude.map(|id| id.0))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        row.map(JubileeParticipant::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<JubileeParticipant>, JubileeError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(&format!(
            "{SELECT_PARTICIPANT} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(JubileeParticipant::try_from).collect()
    }

    async fn list_by_batch_group(
        &self,
        batch: i32,
        group: JubileeGroup,
    ) -> Result<Vec<JubileeParticipant>, JubileeError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(&format!(
            "{SELECT_PARTICIPANT} WHERE hsc_passing_year = $1 AND hsc_group = $2 \
             ORDER BY full_name ASC"
        ))
        .bind(batch)
        .bind(group.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(JubileeParticipant::try_from).collect()
    }

    async fn update(
        &self,
        participant: JubileeParticipant,
    ) -> Result<JubileeParticipant, JubileeError> {
        let result = sqlx::query(
            r#"
            UPDATE jubilee_participants
            SET full_name = $2, phone_number = $3, alternative_phone_number = $4,
                email = $5, hsc_passing_year = $6, hsc_group = $7, gender = $8,
                blood_group = $9, payment_type = $10, amount_type = $11,
                amount = $12, comments = $13, updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(participant.id.0)
        .bind(participant.full_name.as_deref())
        .bind(participant.phone_number.as_deref())
        .bind(participant.alternative_phone_number.as_deref())
        .bind(participant.email.as_deref())
        .bind(participant.hsc_passing_year)
        .bind(participant.group.map(|g| g.as_str()))
        .bind(participant.gender.map(|g| g.as_str()))
        .bind(participant.blood_group.map(|b| b.as_str()))
        .bind(participant.payment_type.as_str())
        .bind(participant.amount_type.as_str())
        .bind(participant.amount)
        .bind(participant.comments.as_deref())
        .bind(participant.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(JubileeError::NotFound(participant.id.to_string()));
        }

        Ok(participant)
    }

    async fn delete(&self, id: &ParticipantId) -> Result<(), JubileeError> {
        let result = sqlx::query("DELETE FROM jubilee_participants WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| JubileeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(JubileeError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
