use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;

use crate::jubilee::errors::JubileeError;
use crate::jubilee::models::AmountType;
use crate::jubilee::models::BatchGroupListing;
use crate::jubilee::models::BloodGroup;
use crate::jubilee::models::CsvImportReport;
use crate::jubilee::models::CsvRowFailure;
use crate::jubilee::models::Gender;
use crate::jubilee::models::JubileeGroup;
use crate::jubilee::models::JubileeParticipant;
use crate::jubilee::models::ParticipantCategory;
use crate::jubilee::models::ParticipantId;
use crate::jubilee::models::PaymentType;
use crate::jubilee::models::RegisterParticipantCommand;
use crate::jubilee::models::UpdateParticipantCommand;
use crate::jubilee::ports::JubileeRepository;
use crate::jubilee::ports::JubileeServicePort;

/// Domain service for Silver Jubilee participants.
pub struct JubileeService<JR>
where
    JR: JubileeRepository,
{
    repository: Arc<JR>,
}

impl<JR> JubileeService<JR>
where
    JR: JubileeRepository,
{
    pub fn new(repository: Arc<JR>) -> Self {
        Self { repository }
    }

    fn validate_command(&self, command: &RegisterParticipantCommand) -> Result<(), JubileeError> {
        match command.participant_category {
            ParticipantCategory::Guest => {
                if command.main_participant_batch.is_none() {
                    return Err(JubileeError::MissingField("Main participant batch"));
                }
                if command.main_participant_group.is_none() {
                    return Err(JubileeError::MissingField("Main participant group"));
                }
                if command.guest_name.is_none() {
                    return Err(JubileeError::MissingField("Guest name"));
                }
                if command.guest_mobile_number.is_none() {
                    return Err(JubileeError::MissingField("Guest mobile number"));
                }
            }
            ParticipantCategory::Baby => {
                if command.main_participant_batch.is_none() {
                    return Err(JubileeError::MissingField("Main participant batch"));
                }
                if command.main_participant_group.is_none() {
                    return Err(JubileeError::MissingField("Main participant group"));
                }
                if command.main_participant_id.is_none() {
                    return Err(JubileeError::MissingField("Main participant ID"));
                }
                if command.baby_name.is_none() {
                    return Err(JubileeError::MissingField("Baby name"));
                }
                if command.baby_phone.is_none() {
                    return Err(JubileeError::MissingField("Baby phone"));
                }
            }
            _ => {
                let required: [(&'static str, bool); 13] = [
                    ("Full name", command.full_name.is_none()),
                    ("Phone number", command.phone_number.is_none()),
                    ("Email", command.email.is_none()),
                    ("HSC passing year", command.hsc_passing_year.is_none()),
                    ("Group", command.group.is_none()),
                    ("Gender", command.gender.is_none()),
                    ("Blood group", command.blood_group.is_none()),
                    ("Father name", command.father_name.is_none()),
                    ("Father phone number", command.father_phone_number.is_none()),
                    ("Father occupation", command.father_occupation.is_none()),
                    ("Mother name", command.mother_name.is_none()),
                    ("Mother phone number", command.mother_phone_number.is_none()),
                    ("Mother occupation", command.mother_occupation.is_none()),
                ];
                for (field, missing) in required {
                    if missing {
                        return Err(JubileeError::MissingField(field));
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolve and snapshot the main participant's name for companions.
    async fn resolve_main_participant(
        &self,
        command: &RegisterParticipantCommand,
    ) -> Result<Option<String>, JubileeError> {
        let Some(main_id) = &command.main_participant_id else {
            return Ok(None);
        };

        let main = self
            .repository
            .find_by_id(main_id)
            .await?
            .ok_or(JubileeError::MainParticipantNotFound(main_id.to_string()))?;

        Ok(main.full_name)
    }

    async fn generate_unique_secret_code(
        &self,
        command: &RegisterParticipantCommand,
    ) -> Result<String, JubileeError> {
        let (batch_year, group) = if command.participant_category.is_companion() {
            (
                command.main_participant_batch.unwrap_or(0),
                command.main_participant_group,
            )
        } else {
            (command.hsc_passing_year.unwrap_or(0), command.group)
        };

        loop {
            let code = generate_secret_code(batch_year, group);
            if self.repository.find_by_secret_code(&code).await?.is_none() {
                return Ok(code);
            }
        }
    }
}

#[async_trait]
impl<JR> JubileeServicePort for JubileeService<JR>
where
    JR: JubileeRepository,
{
    async fn register(
        &self,
        command: RegisterParticipantCommand,
    ) -> Result<JubileeParticipant, JubileeError> {
        self.validate_command(&command)?;

        if !command.participant_category.is_companion()
            && (command.email.is_some() || command.phone_number.is_some())
        {
            let duplicate = self
                .repository
                .find_duplicate(command.email.clone(), command.phone_number.clone(), None)
                .await?;
            if duplicate.is_some() {
                return Err(JubileeError::Duplicate);
            }
        }

        let main_participant_name = self.resolve_main_participant(&command).await?;
        let secret_code = self.generate_unique_secret_code(&command).await?;

        let now = Utc::now();
        let participant = JubileeParticipant {
            id: ParticipantId::new(),
            participant_category: command.participant_category,
            secret_code,
            full_name: command.full_name,
            phone_number: command.phone_number,
            alternative_phone_number: command.alternative_phone_number,
            email: command.email,
            hsc_passing_year: command.hsc_passing_year,
            group: command.group,
            gender: command.gender,
            blood_group: command.blood_group,
            payment_type: command.payment_type,
            amount_type: command.amount_type,
            amount: command.amount,
            comments: command.comments,
            father_name: command.father_name,
            father_phone_number: command.father_phone_number,
            father_occupation: command.father_occupation,
            mother_name: command.mother_name,
            mother_phone_number: command.mother_phone_number,
            mother_occupation: command.mother_occupation,
            main_participant_batch: command.main_participant_batch,
            main_participant_group: command.main_participant_group,
            main_participant_id: command.main_participant_id,
            main_participant_name,
            guest_name: command.guest_name,
            guest_mobile_number: command.guest_mobile_number,
            baby_name: command.baby_name,
            baby_phone: command.baby_phone,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(participant).await
    }

    async fn list(&self) -> Result<Vec<JubileeParticipant>, JubileeError> {
        self.repository.list_all().await
    }

    async fn list_by_batch_group(
        &self,
        batch: i32,
        group: JubileeGroup,
    ) -> Result<BatchGroupListing, JubileeError> {
        let participants = self.repository.list_by_batch_group(batch, group).await?;

        if participants.is_empty() {
            return Err(JubileeError::NoParticipantsInBatchGroup {
                batch,
                group: group.as_str().to_string(),
            });
        }

        Ok(BatchGroupListing {
            batch,
            group,
            total: participants.len(),
            participants,
        })
    }

    async fn get(&self, id: &ParticipantId) -> Result<JubileeParticipant, JubileeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(JubileeError::NotFound(id.to_string()))
    }

    async fn update(
        &self,
        id: &ParticipantId,
        command: UpdateParticipantCommand,
    ) -> Result<JubileeParticipant, JubileeError> {
        let mut participant = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(JubileeError::NotFound(id.to_string()))?;

        if command.email.is_some() || command.phone_number.is_some() {
            let duplicate = self
                .repository
                .find_duplicate(command.email.clone(), command.phone_number.clone(), Some(*id))
                .await?;
            if duplicate.is_some() {
                return Err(JubileeError::Duplicate);
            }
        }

        if let Some(full_name) = command.full_name {
            participant.full_name = Some(full_name);
        }
        if let Some(phone_number) = command.phone_number {
            participant.phone_number = Some(phone_number);
        }
        if let Some(alternative) = command.alternative_phone_number {
            participant.alternative_phone_number = Some(alternative);
        }
        if let Some(email) = command.email {
            participant.email = Some(email);
        }
        if let Some(hsc_passing_year) = command.hsc_passing_year {
            participant.hsc_passing_year = Some(hsc_passing_year);
        }
        if let Some(group) = command.group {
            participant.group = Some(group);
        }
        if let Some(gender) = command.gender {
            participant.gender = Some(gender);
        }
        if let Some(blood_group) = command.blood_group {
            participant.blood_group = Some(blood_group);
        }
        if let Some(payment_type) = command.payment_type {
            participant.payment_type = payment_type;
        }
        if let Some(amount_type) = command.amount_type {
            participant.amount_type = amount_type;
        }
        if let Some(amount) = command.amount {
            participant.amount = amount;
        }
        if let Some(comments) = command.comments {
            participant.comments = Some(comments);
        }
        participant.updated_at = Utc::now();

        self.repository.update(participant).await
    }

    async fn delete(&self, id: &ParticipantId) -> Result<(), JubileeError> {
        self.repository.delete(id).await
    }

    async fn import_csv(&self, data: &[u8]) -> Result<CsvImportReport, JubileeError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data);

        let mut created = 0usize;
        let mut failed = Vec::new();

        for (index, record) in reader.deserialize::<CsvParticipantRecord>().enumerate() {
            // Row 1 is the header line.
            let row = index + 2;

            let outcome = match record {
                Ok(record) => match record.into_command() {
                    Ok(command) => self.register(command).await.map(|_| ()),
                    Err(e) => Err(e),
                },
                Err(e) => Err(JubileeError::DatabaseError(format!("CSV parse error: {e}"))),
            };

            match outcome {
                Ok(()) => created += 1,
                Err(e) => failed.push(CsvRowFailure {
                    row,
                    error: e.to_string(),
                }),
            }
        }

        Ok(CsvImportReport { created, failed })
    }
}

/// One CSV record of the bulk-import format. Headers are camelCase to match
/// the JSON registration payload; empty cells read as absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvParticipantRecord {
    participant_category: String,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    alternative_phone_number: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    hsc_passing_year: Option<i32>,
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    blood_group: Option<String>,
    payment_type: String,
    amount_type: String,
    amount: f64,
    #[serde(default)]
    comments: Option<String>,
    #[serde(default)]
    father_name: Option<String>,
    #[serde(default)]
    father_phone_number: Option<String>,
    #[serde(default)]
    father_occupation: Option<String>,
    #[serde(default)]
    mother_name: Option<String>,
    #[serde(default)]
    mother_phone_number: Option<String>,
    #[serde(default)]
    mother_occupation: Option<String>,
    #[serde(default)]
    main_participant_batch: Option<i32>,
    #[serde(default)]
    main_participant_group: Option<String>,
    #[serde(default)]
    main_participant_id: Option<String>,
    #[serde(default)]
    guest_name: Option<String>,
    #[serde(default)]
    guest_mobile_number: Option<String>,
    #[serde(default)]
    baby_name: Option<String>,
    #[serde(default)]
    baby_phone: Option<String>,
}

impl CsvParticipantRecord {
    fn into_command(self) -> Result<RegisterParticipantCommand, JubileeError> {
        let participant_category = ParticipantCategory::from_str(&self.participant_category)?;
        let payment_type = PaymentType::from_str(&self.payment_type)?;
        let amount_type = AmountType::from_str(&self.amount_type)?;

        let group = self
            .group
            .filter(|s| !s.is_empty())
            .map(|s| JubileeGroup::from_str(&s))
            .transpose()?;
        let gender = self
            .gender
            .filter(|s| !s.is_empty())
            .map(|s| Gender::from_str(&s))
            .transpose()?;
        let blood_group = self
            .blood_group
            .filter(|s| !s.is_empty())
            .map(|s| BloodGroup::from_str(&s))
            .transpose()?;
        let main_participant_group = self
            .main_participant_group
            .filter(|s| !s.is_empty())
            .map(|s| JubileeGroup::from_str(&s))
            .transpose()?;
        let main_participant_id = self
            .main_participant_id
            .filter(|s| !s.is_empty())
            .map(|s| ParticipantId::from_string(&s))
            .transpose()?;

        Ok(RegisterParticipantCommand {
            participant_category,
            full_name: self.full_name.filter(|s| !s.is_empty()),
            phone_number: self.phone_number.filter(|s| !s.is_empty()),
            alternative_phone_number: self.alternative_phone_number.filter(|s| !s.is_empty()),
            email: self.email.filter(|s| !s.is_empty()),
            hsc_passing_year: self.hsc_passing_year,
            group,
            gender,
            blood_group,
            payment_type,
            amount_type,
            amount: self.amount,
            comments: self.comments.filter(|s| !s.is_empty()),
            father_name: self.father_name.filter(|s| !s.is_empty()),
            father_phone_number: self.father_phone_number.filter(|s| !s.is_empty()),
            father_occupation: self.father_occupation.filter(|s| !s.is_empty()),
            mother_name: self.mother_name.filter(|s| !s.is_empty()),
            mother_phone_number: self.mother_phone_number.filter(|s| !s.is_empty()),
            mother_occupation: self.mother_occupation.filter(|s| !s.is_empty()),
            main_participant_batch: self.main_participant_batch,
            main_participant_group,
            main_participant_id,
            guest_name: self.guest_name.filter(|s| !s.is_empty()),
            guest_mobile_number: self.guest_mobile_number.filter(|s| !s.is_empty()),
            baby_name: self.baby_name.filter(|s| !s.is_empty()),
            baby_phone: self.baby_phone.filter(|s| !s.is_empty()),
        })
    }
}

/// Secret code format: `BB-GG-DD-MM-RRRRRR`.
///
/// BB = passing year mod 100, GG = group code (00 when unknown), DD/MM =
/// current day and month, RRRRRR = six random digits. Uniqueness is enforced
/// by regenerating on collision.
fn generate_secret_code(batch_year: i32, group: Option<JubileeGroup>) -> String {
    let batch = format!("{:02}", batch_year.rem_euclid(100));
    let group_code = group.map(|g| g.code()).unwrap_or("00");

    let now = Utc::now();
    let random_number: u32 = rand::thread_rng().gen_range(0..1_000_000);

    format!(
        "{}-{}-{:02}-{:02}-{:06}",
        batch,
        group_code,
        now.day(),
        now.month(),
        random_number
    )
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestJubileeRepository {}

        #[async_trait]
        impl JubileeRepository for TestJubileeRepository {
            async fn create(&self, participant: JubileeParticipant) -> Result<JubileeParticipant, JubileeError>;
            async fn find_by_id(&self, id: &ParticipantId) -> Result<Option<JubileeParticipant>, JubileeError>;
            async fn find_by_secret_code(&self, secret_code: &str) -> Result<Option<JubileeParticipant>, JubileeError>;
            async fn find_duplicate(&self, email: Option<String>, phone: Option<String>, exclude: Option<ParticipantId>) -> Result<Option<JubileeParticipant>, JubileeError>;
            async fn list_all(&self) -> Result<Vec<JubileeParticipant>, JubileeError>;
            async fn list_by_batch_group(&self, batch: i32, group: JubileeGroup) -> Result<Vec<JubileeParticipant>, JubileeError>;
            async fn update(&self, participant: JubileeParticipant) -> Result<JubileeParticipant, JubileeError>;
            async fn delete(&self, id: &ParticipantId) -> Result<(), JubileeError>;
        }
    }

    fn alumni_command() -> RegisterParticipantCommand {
        RegisterParticipantCommand {
            participant_category: ParticipantCategory::Alumni,
            full_name: Some("Rahim Uddin".to_string()),
            phone_number: Some("01712345678".to_string()),
            alternative_phone_number: None,
            email: Some("rahim@example.com".to_string()),
            hsc_passing_year: Some(2005),
            group: Some(JubileeGroup::Science),
            gender: Some(Gender::Male),
            blood_group: Some(BloodGroup::OPositive),
            payment_type: PaymentType::Bkash,
            amount_type: AmountType::Registration,
            amount: 1000.0,
            comments: None,
            father_name: Some("Abdul Uddin".to_string()),
            father_phone_number: Some("01812345678".to_string()),
            father_occupation: Some("Teacher".to_string()),
            mother_name: Some("Amina Begum".to_string()),
            mother_phone_number: Some("01912345678".to_string()),
            mother_occupation: Some("Homemaker".to_string()),
            main_participant_batch: None,
            main_participant_group: None,
            main_participant_id: None,
            guest_name: None,
            guest_mobile_number: None,
            baby_name: None,
            baby_phone: None,
        }
    }

    fn guest_command(main_id: Option<ParticipantId>) -> RegisterParticipantCommand {
        RegisterParticipantCommand {
            participant_category: ParticipantCategory::Guest,
            full_name: None,
            phone_number: None,
            alternative_phone_number: None,
            email: None,
            hsc_passing_year: None,
            group: None,
            gender: None,
            blood_group: None,
            payment_type: PaymentType::Cash,
            amount_type: AmountType::Registration,
            amount: 1000.0,
            comments: None,
            father_name: None,
            father_phone_number: None,
            father_occupation: None,
            mother_name: None,
            mother_phone_number: None,
            mother_occupation: None,
            main_participant_batch: Some(2005),
            main_participant_group: Some(JubileeGroup::Science),
            main_participant_id: main_id,
            guest_name: Some("Karim Mia".to_string()),
            guest_mobile_number: Some("01612345678".to_string()),
            baby_name: None,
            baby_phone: None,
        }
    }

    fn stored_participant(command: RegisterParticipantCommand) -> JubileeParticipant {
        let now = Utc::now();
        JubileeParticipant {
            id: ParticipantId::new(),
            participant_category: command.participant_category,
            secret_code: "05-01-01-01-000001".to_string(),
            full_name: command.full_name,
            phone_number: command.phone_number,
            alternative_phone_number: command.alternative_phone_number,
            email: command.email,
            hsc_passing_year: command.hsc_passing_year,
            group: command.group,
            gender: command.gender,
            blood_group: command.blood_group,
            payment_type: command.payment_type,
            amount_type: command.amount_type,
            amount: command.amount,
            comments: command.comments,
            father_name: command.father_name,
            father_phone_number: command.father_phone_number,
            father_occupation: command.father_occupation,
            mother_name: command.mother_name,
            mother_phone_number: command.mother_phone_number,
            mother_occupation: command.mother_occupation,
            main_participant_batch: command.main_participant_batch,
            main_participant_group: command.main_participant_group,
            main_participant_id: command.main_participant_id,
            main_participant_name: None,
            guest_name: command.guest_name,
            guest_mobile_number: command.guest_mobile_number,
            baby_name: command.baby_name,
            baby_phone: command.baby_phone,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_register_alumni_assigns_secret_code() {
        let mut repository = MockTestJubileeRepository::new();
        repository
            .expect_find_duplicate()
            .times(1)
            .returning(|_, _, _| Ok(None));
        repository
            .expect_find_by_secret_code()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|p| {
                // 05 = 2005 batch, 01 = Science
                p.secret_code.starts_with("05-01-") && p.secret_code.len() == 18
            })
            .times(1)
            .returning(|p| Ok(p));

        let service = JubileeService::new(Arc::new(repository));

        let participant = service.register(alumni_command()).await.unwrap();
        assert_eq!(participant.participant_category, ParticipantCategory::Alumni);
    }

    #[tokio::test]
    async fn test_register_alumni_missing_field() {
        let repository = MockTestJubileeRepository::new();
        let service = JubileeService::new(Arc::new(repository));

        let mut command = alumni_command();
        command.father_name = None;

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            JubileeError::MissingField("Father name")
        ));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_or_phone() {
        let mut repository = MockTestJubileeRepository::new();
        let existing = stored_participant(alumni_command());
        repository
            .expect_find_duplicate()
            .withf(|email, phone, exclude| {
                email.as_deref() == Some("rahim@example.com")
                    && phone.as_deref() == Some("01712345678")
                    && exclude.is_none()
            })
            .times(1)
            .returning(move |_, _, _| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = JubileeService::new(Arc::new(repository));

        let result = service.register(alumni_command()).await;
        assert!(matches!(result.unwrap_err(), JubileeError::Duplicate));
    }

    #[tokio::test]
    async fn test_register_guest_skips_duplicate_check_and_snapshots_main() {
        let mut repository = MockTestJubileeRepository::new();
        let main = stored_participant(alumni_command());
        let main_id = main.id;

        repository.expect_find_duplicate().times(0);
        let returned = main.clone();
        repository
            .expect_find_by_id()
            .withf(move |id| *id == main_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_find_by_secret_code()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|p| p.main_participant_name.as_deref() == Some("Rahim Uddin"))
            .times(1)
            .returning(|p| Ok(p));

        let service = JubileeService::new(Arc::new(repository));

        let participant = service.register(guest_command(Some(main_id))).await.unwrap();
        assert_eq!(participant.guest_name.as_deref(), Some("Karim Mia"));
    }

    #[tokio::test]
    async fn test_register_baby_requires_main_participant_id() {
        let repository = MockTestJubileeRepository::new();
        let service = JubileeService::new(Arc::new(repository));

        let mut command = guest_command(None);
        command.participant_category = ParticipantCategory::Baby;
        command.baby_name = Some("Junior".to_string());
        command.baby_phone = Some("01512345678".to_string());

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            JubileeError::MissingField("Main participant ID")
        ));
    }

    #[tokio::test]
    async fn test_register_guest_unknown_main_participant() {
        let mut repository = MockTestJubileeRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = JubileeService::new(Arc::new(repository));

        let result = service.register(guest_command(Some(ParticipantId::new()))).await;
        assert!(matches!(
            result.unwrap_err(),
            JubileeError::MainParticipantNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_secret_code_regenerated_on_collision() {
        let mut repository = MockTestJubileeRepository::new();
        repository
            .expect_find_duplicate()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let collision = stored_participant(alumni_command());
        let mut calls = 0;
        repository
            .expect_find_by_secret_code()
            .times(2)
            .returning(move |_| {
                calls += 1;
                if calls == 1 {
                    Ok(Some(collision.clone()))
                } else {
                    Ok(None)
                }
            });
        repository
            .expect_create()
            .times(1)
            .returning(|p| Ok(p));

        let service = JubileeService::new(Arc::new(repository));

        assert!(service.register(alumni_command()).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_by_batch_group_empty_is_not_found() {
        let mut repository = MockTestJubileeRepository::new();
        repository
            .expect_list_by_batch_group()
            .with(eq(2005), eq(JubileeGroup::Science))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = JubileeService::new(Arc::new(repository));

        let result = service.list_by_batch_group(2005, JubileeGroup::Science).await;
        assert!(matches!(
            result.unwrap_err(),
            JubileeError::NoParticipantsInBatchGroup { batch: 2005, .. }
        ));
    }

    #[tokio::test]
    async fn test_import_csv_mixed_outcomes() {
        let mut repository = MockTestJubileeRepository::new();
        repository
            .expect_find_duplicate()
            .returning(|_, _, _| Ok(None));
        repository
            .expect_find_by_secret_code()
            .returning(|_| Ok(None));
        repository.expect_create().returning(|p| Ok(p));

        let service = JubileeService::new(Arc::new(repository));

        let csv = "\
participantCategory,fullName,phoneNumber,email,hscPassingYear,group,gender,bloodGroup,paymentType,amountType,amount,fatherName,fatherPhoneNumber,fatherOccupation,motherName,motherPhoneNumber,motherOccupation
Alumni,Rahim Uddin,01712345678,rahim@example.com,2005,Science,Male,O+,Bkash,Registration,1000,Abdul,01812345678,Teacher,Amina,01912345678,Homemaker
Alumni,Karim Mia,01612345678,karim@example.com,2006,Science,Male,A+,Nagad,Registration,1000,,,,,,
";

        let report = service.import_csv(csv.as_bytes()).await.unwrap();

        // Second row misses the parent fields.
        assert_eq!(report.created, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].row, 3);
        assert!(report.failed[0].error.contains("Father name"));
    }

    #[test]
    fn test_secret_code_format() {
        let code = generate_secret_code(2005, Some(JubileeGroup::BusinessStudies));
        let parts: Vec<&str> = code.split('-').collect();

        assert_eq!(parts.len(), 5);
        assert_eq!(parts[0], "05");
        assert_eq!(parts[1], "02");
        assert_eq!(parts[4].len(), 6);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_secret_code_unknown_group() {
        let code = generate_secret_code(1999, None);
        assert!(code.starts_with("99-00-"));
    }
}
