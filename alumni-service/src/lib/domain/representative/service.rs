use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::representative::errors::RepresentativeError;
use crate::representative::models::CreateRepresentativeCommand;
use crate::representative::models::Representative;
use crate::representative::models::RepresentativeId;
use crate::representative::models::UpdateRepresentativeCommand;
use crate::representative::ports::RepresentativeRepository;
use crate::representative::ports::RepresentativeServicePort;

/// Domain service for representative submissions.
pub struct RepresentativeService<RR>
where
    RR: RepresentativeRepository,
{
    repository: Arc<RR>,
}

impl<RR> RepresentativeService<RR>
where
    RR: RepresentativeRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> RepresentativeServicePort for RepresentativeService<RR>
where
    RR: RepresentativeRepository,
{
    async fn create_representative(
        &self,
        command: CreateRepresentativeCommand,
    ) -> Result<Representative, RepresentativeError> {
        if self
            .repository
            .find_by_phone(&command.phone)
            .await?
            .is_some()
        {
            return Err(RepresentativeError::PhoneAlreadyExists);
        }

        let now = Utc::now();
        let representative = Representative {
            id: RepresentativeId::new(),
            name: command.name,
            phone: command.phone,
            facebook_url: command.facebook_url,
            comments: command.comments,
            hsc_year: command.hsc_year,
            hsc_group: command.hsc_group,
            gender: command.gender,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(representative).await
    }

    async fn list_representatives(&self) -> Result<Vec<Representative>, RepresentativeError> {
        self.repository.list_all().await
    }

    async fn get_representative(
        &self,
        id: &RepresentativeId,
    ) -> Result<Representative, RepresentativeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RepresentativeError::NotFound(id.to_string()))
    }

    async fn update_representative(
        &self,
        id: &RepresentativeId,
        command: UpdateRepresentativeCommand,
    ) -> Result<Representative, RepresentativeError> {
        let mut representative = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RepresentativeError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            representative.name = name;
        }
        if let Some(phone) = command.phone {
            representative.phone = phone;
        }
        if let Some(facebook_url) = command.facebook_url {
            representative.facebook_url = facebook_url;
        }
        if let Some(comments) = command.comments {
            representative.comments = Some(comments);
        }
        if let Some(hsc_year) = command.hsc_year {
            representative.hsc_year = hsc_year;
        }
        if let Some(hsc_group) = command.hsc_group {
            representative.hsc_group = hsc_group;
        }
        if let Some(gender) = command.gender {
            representative.gender = gender;
        }
        representative.updated_at = Utc::now();

        self.repository.update(representative).await
    }

    async fn delete_representative(
        &self,
        id: &RepresentativeId,
    ) -> Result<(), RepresentativeError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestRepresentativeRepository {}

        #[async_trait]
        impl RepresentativeRepository for TestRepresentativeRepository {
            async fn create(&self, representative: Representative) -> Result<Representative, RepresentativeError>;
            async fn find_by_id(&self, id: &RepresentativeId) -> Result<Option<Representative>, RepresentativeError>;
            async fn find_by_phone(&self, phone: &str) -> Result<Option<Representative>, RepresentativeError>;
            async fn list_all(&self) -> Result<Vec<Representative>, RepresentativeError>;
            async fn update(&self, representative: Representative) -> Result<Representative, RepresentativeError>;
            async fn delete(&self, id: &RepresentativeId) -> Result<(), RepresentativeError>;
        }
    }

    fn command() -> CreateRepresentativeCommand {
        CreateRepresentativeCommand {
            name: "Rahim Uddin".to_string(),
            phone: "01712345678".to_string(),
            facebook_url: "https://facebook.com/rahim".to_string(),
            comments: None,
            hsc_year: 2005,
            hsc_group: "Science".to_string(),
            gender: "Male".to_string(),
        }
    }

    fn representative(id: RepresentativeId) -> Representative {
        Representative {
            id,
            name: "Rahim Uddin".to_string(),
            phone: "01712345678".to_string(),
            facebook_url: "https://facebook.com/rahim".to_string(),
            comments: None,
            hsc_year: 2005,
            hsc_group: "Science".to_string(),
            gender: "Male".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut repository = MockTestRepresentativeRepository::new();
        repository
            .expect_find_by_phone()
            .with(eq("01712345678"))
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|representative| Ok(representative));

        let service = RepresentativeService::new(Arc::new(repository));

        let created = service.create_representative(command()).await.unwrap();
        assert_eq!(created.hsc_year, 2005);
    }

    #[tokio::test]
    async fn test_create_duplicate_phone() {
        let mut repository = MockTestRepresentativeRepository::new();
        let existing = representative(RepresentativeId::new());
        repository
            .expect_find_by_phone()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = RepresentativeService::new(Arc::new(repository));

        let result = service.create_representative(command()).await;
        assert!(matches!(
            result.unwrap_err(),
            RepresentativeError::PhoneAlreadyExists
        ));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestRepresentativeRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = RepresentativeService::new(Arc::new(repository));

        let result = service.get_representative(&RepresentativeId::new()).await;
        assert!(matches!(result.unwrap_err(), RepresentativeError::NotFound(_)));
    }
}
