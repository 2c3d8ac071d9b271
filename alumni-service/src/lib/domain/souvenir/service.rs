use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::souvenir::errors::SouvenirError;
use crate::souvenir::models::CreateSouvenirCommand;
use crate::souvenir::models::Souvenir;
use crate::souvenir::models::SouvenirId;
use crate::souvenir::models::SouvenirQuery;
use crate::souvenir::models::UpdateSouvenirCommand;
use crate::souvenir::models::MAX_GALLERY_PHOTOS;
use crate::souvenir::models::PHOTO_GALLERY;
use crate::souvenir::ports::SouvenirRepository;
use crate::souvenir::ports::SouvenirServicePort;

/// Domain service for souvenirs.
pub struct SouvenirService<SR>
where
    SR: SouvenirRepository,
{
    repository: Arc<SR>,
}

impl<SR> SouvenirService<SR>
where
    SR: SouvenirRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

/// Category-dependent media rules, applied to creates and to the merged
/// result of updates.
fn validate_media(
    category: &str,
    photo_url: &Option<String>,
    photo_urls: &[String],
    content: &Option<String>,
) -> Result<(), SouvenirError> {
    if category == PHOTO_GALLERY {
        if photo_urls.is_empty() {
            return Err(SouvenirError::MissingGalleryPhotos);
        }
        if photo_urls.len() > MAX_GALLERY_PHOTOS {
            return Err(SouvenirError::TooManyGalleryPhotos(MAX_GALLERY_PHOTOS));
        }
        if photo_url.is_some() {
            return Err(SouvenirError::SinglePhotoOnGallery);
        }
    } else {
        if photo_url.is_none() {
            return Err(SouvenirError::MissingPhoto);
        }
        if content.is_none() {
            return Err(SouvenirError::MissingContent);
        }
        if !photo_urls.is_empty() {
            return Err(SouvenirError::GalleryPhotosOnSingle);
        }
    }

    Ok(())
}

#[async_trait]
impl<SR> SouvenirServicePort for SouvenirService<SR>
where
    SR: SouvenirRepository,
{
    async fn create_souvenir(
        &self,
        command: CreateSouvenirCommand,
    ) -> Result<Souvenir, SouvenirError> {
        validate_media(
            &command.category,
            &command.photo_url,
            &command.photo_urls,
            &command.content,
        )?;

        let now = Utc::now();
        let souvenir = Souvenir {
            id: SouvenirId::new(),
            category: command.category,
            name: command.name,
            batch: command.batch,
            group: command.group,
            phone_number: command.phone_number,
            email: command.email.to_lowercase(),
            photo_url: command.photo_url,
            photo_urls: command.photo_urls,
            content: command.content,
            professional_details: command.professional_details,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(souvenir).await
    }

    async fn list_souvenirs(
        &self,
        query: SouvenirQuery,
    ) -> Result<(Vec<Souvenir>, i64), SouvenirError> {
        self.repository.list(&query).await
    }

    async fn get_souvenir(&self, id: &SouvenirId) -> Result<Souvenir, SouvenirError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(SouvenirError::NotFound(id.to_string()))
    }

    async fn update_souvenir(
        &self,
        id: &SouvenirId,
        command: UpdateSouvenirCommand,
    ) -> Result<Souvenir, SouvenirError> {
        let mut souvenir = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(SouvenirError::NotFound(id.to_string()))?;

        if let Some(name) = command.name {
            souvenir.name = name;
        }
        if let Some(batch) = command.batch {
            souvenir.batch = batch;
        }
        if let Some(group) = command.group {
            souvenir.group = group;
        }
        if let Some(phone_number) = command.phone_number {
            souvenir.phone_number = phone_number;
        }
        if let Some(email) = command.email {
            souvenir.email = email.to_lowercase();
        }
        if let Some(photo_url) = command.photo_url {
            souvenir.photo_url = Some(photo_url);
        }
        if let Some(photo_urls) = command.photo_urls {
            souvenir.photo_urls = photo_urls;
        }
        if let Some(content) = command.content {
            souvenir.content = Some(content);
        }
        if let Some(professional_details) = command.professional_details {
            souvenir.professional_details = Some(professional_details);
        }

        validate_media(
            &souvenir.category,
            &souvenir.photo_url,
            &souvenir.photo_urls,
            &souvenir.content,
        )?;

        souvenir.updated_at = Utc::now();
        self.repository.update(souvenir).await
    }

    async fn delete_souvenir(&self, id: &SouvenirId) -> Result<(), SouvenirError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestSouvenirRepository {}

        #[async_trait]
        impl SouvenirRepository for TestSouvenirRepository {
            async fn create(&self, souvenir: Souvenir) -> Result<Souvenir, SouvenirError>;
            async fn find_by_id(&self, id: &SouvenirId) -> Result<Option<Souvenir>, SouvenirError>;
            async fn list(&self, query: &SouvenirQuery) -> Result<(Vec<Souvenir>, i64), SouvenirError>;
            async fn update(&self, souvenir: Souvenir) -> Result<Souvenir, SouvenirError>;
            async fn delete(&self, id: &SouvenirId) -> Result<(), SouvenirError>;
        }
    }

    fn command(category: &str) -> CreateSouvenirCommand {
        CreateSouvenirCommand {
            category: category.to_string(),
            name: "Rahim Uddin".to_string(),
            batch: "2005".to_string(),
            group: "science".to_string(),
            phone_number: "01712345678".to_string(),
            email: "Rahim@Example.com".to_string(),
            photo_url: None,
            photo_urls: vec![],
            content: None,
            professional_details: None,
        }
    }

    #[tokio::test]
    async fn test_create_writeup_requires_photo_and_content() {
        let repository = MockTestSouvenirRepository::new();
        let service = SouvenirService::new(Arc::new(repository));

        let result = service.create_souvenir(command("memory-writeup")).await;
        assert!(matches!(result.unwrap_err(), SouvenirError::MissingPhoto));

        let repository = MockTestSouvenirRepository::new();
        let service = SouvenirService::new(Arc::new(repository));

        let mut cmd = command("memory-writeup");
        cmd.photo_url = Some("https://cdn.example.com/a.jpg".to_string());
        let result = service.create_souvenir(cmd).await;
        assert!(matches!(result.unwrap_err(), SouvenirError::MissingContent));
    }

    #[tokio::test]
    async fn test_create_writeup_success_lowercases_email() {
        let mut repository = MockTestSouvenirRepository::new();
        repository
            .expect_create()
            .withf(|s| s.email == "rahim@example.com")
            .times(1)
            .returning(|s| Ok(s));

        let service = SouvenirService::new(Arc::new(repository));

        let mut cmd = command("memory-writeup");
        cmd.photo_url = Some("https://cdn.example.com/a.jpg".to_string());
        cmd.content = Some("<p>Those were the days.</p>".to_string());

        assert!(service.create_souvenir(cmd).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_gallery_photo_rules() {
        let service = SouvenirService::new(Arc::new(MockTestSouvenirRepository::new()));

        let cmd = command(PHOTO_GALLERY);
        let result = service.create_souvenir(cmd).await;
        assert!(matches!(result.unwrap_err(), SouvenirError::MissingGalleryPhotos));

        let mut cmd = command(PHOTO_GALLERY);
        cmd.photo_urls = (0..11).map(|i| format!("https://cdn.example.com/{i}.jpg")).collect();
        let result = service.create_souvenir(cmd).await;
        assert!(matches!(
            result.unwrap_err(),
            SouvenirError::TooManyGalleryPhotos(_)
        ));

        let mut cmd = command(PHOTO_GALLERY);
        cmd.photo_urls = vec!["https://cdn.example.com/a.jpg".to_string()];
        cmd.photo_url = Some("https://cdn.example.com/b.jpg".to_string());
        let result = service.create_souvenir(cmd).await;
        assert!(matches!(result.unwrap_err(), SouvenirError::SinglePhotoOnGallery));
    }

    #[tokio::test]
    async fn test_update_revalidates_merged_state() {
        let mut repository = MockTestSouvenirRepository::new();
        let existing = Souvenir {
            id: SouvenirId::new(),
            category: PHOTO_GALLERY.to_string(),
            name: "Rahim Uddin".to_string(),
            batch: "2005".to_string(),
            group: "science".to_string(),
            phone_number: "01712345678".to_string(),
            email: "rahim@example.com".to_string(),
            photo_url: None,
            photo_urls: vec!["https://cdn.example.com/a.jpg".to_string()],
            content: None,
            professional_details: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let returned = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository.expect_update().times(0);

        let service = SouvenirService::new(Arc::new(repository));

        // Emptying the photo list must fail for a gallery souvenir.
        let command = UpdateSouvenirCommand {
            photo_urls: Some(vec![]),
            ..Default::default()
        };

        let result = service.update_souvenir(&existing.id, command).await;
        assert!(matches!(result.unwrap_err(), SouvenirError::MissingGalleryPhotos));
    }
}
