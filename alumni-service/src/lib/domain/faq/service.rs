use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::faq::errors::FaqError;
use crate::faq::models::CreateFaqCategoryCommand;
use crate::faq::models::CreateFaqCommand;
use crate::faq::models::Faq;
use crate::faq::models::FaqCategory;
use crate::faq::models::FaqCategoryId;
use crate::faq::models::FaqId;
use crate::faq::models::UpdateFaqCategoryCommand;
use crate::faq::models::UpdateFaqCommand;
use crate::faq::ports::FaqRepository;
use crate::faq::ports::FaqServicePort;

/// Home-page cap: at most this many faqs may carry the flag.
pub const HOME_PAGE_LIMIT: usize = 5;

/// Domain service for faqs and their categories.
pub struct FaqService<FR>
where
    FR: FaqRepository,
{
    repository: Arc<FR>,
}

impl<FR> FaqService<FR>
where
    FR: FaqRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }

    async fn ensure_category_exists(&self, id: &FaqCategoryId) -> Result<(), FaqError> {
        self.repository
            .find_category_by_id(id)
            .await?
            .map(|_| ())
            .ok_or(FaqError::CategoryNotFound(id.to_string()))
    }

    async fn ensure_order_free(
        &self,
        category_id: &FaqCategoryId,
        display_order: i32,
        exclude: Option<FaqId>,
    ) -> Result<(), FaqError> {
        match self
            .repository
            .find_faq_by_order(category_id, display_order, exclude)
            .await?
        {
            Some(_) => Err(FaqError::OrderTaken(display_order)),
            None => Ok(()),
        }
    }

    async fn ensure_home_page_capacity(&self, exclude: Option<FaqId>) -> Result<(), FaqError> {
        let current = self.repository.count_home_page_faqs(exclude).await?;
        if current >= HOME_PAGE_LIMIT as i64 {
            return Err(FaqError::HomePageLimitReached(HOME_PAGE_LIMIT));
        }
        Ok(())
    }
}

#[async_trait]
impl<FR> FaqServicePort for FaqService<FR>
where
    FR: FaqRepository,
{
    async fn create_category(
        &self,
        command: CreateFaqCategoryCommand,
    ) -> Result<FaqCategory, FaqError> {
        let now = Utc::now();
        let category = FaqCategory {
            id: FaqCategoryId::new(),
            name: command.name,
            description: command.description,
            created_at: now,
            updated_at: now,
        };

        self.repository.create_category(category).await
    }

    async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError> {
        self.repository.list_categories().await
    }

    async fn update_category(
        &self,
        id: &FaqCategoryId,
        command: UpdateFaqCategoryCommand,
    ) -> Result<FaqCategory, FaqError> {
        let mut category = self
            .repository
            .find_category_by_id(id)
            .await?
            .ok_or(FaqError::CategoryNotFound(id.to_string()))?;

        if let Some(name) = command.name {
            category.name = name;
        }
        if let Some(description) = command.description {
            category.description = Some(description);
        }
        category.updated_at = Utc::now();

        self.repository.update_category(category).await
    }

    async fn delete_category(&self, id: &FaqCategoryId) -> Result<(), FaqError> {
        self.ensure_category_exists(id).await?;

        if self.repository.count_faqs_in_category(id).await? > 0 {
            return Err(FaqError::CategoryInUse);
        }

        self.repository.delete_category(id).await
    }

    async fn create_faq(&self, command: CreateFaqCommand) -> Result<Faq, FaqError> {
        self.ensure_category_exists(&command.category_id).await?;

        if command.show_home_page {
            self.ensure_home_page_capacity(None).await?;
        }

        let display_order = command.display_order.unwrap_or(0);
        if command.display_order.is_some() {
            self.ensure_order_free(&command.category_id, display_order, None)
                .await?;
        }

        let now = Utc::now();
        let faq = Faq {
            id: FaqId::new(),
            question: command.question,
            answer: command.answer,
            category_id: command.category_id,
            display_order,
            show_home_page: command.show_home_page,
            created_at: now,
            updated_at: now,
        };

        self.repository.create_faq(faq).await
    }

    async fn list_faqs(&self, category_id: Option<FaqCategoryId>) -> Result<Vec<Faq>, FaqError> {
        if let Some(category_id) = &category_id {
            self.ensure_category_exists(category_id).await?;
        }
        self.repository.list_faqs(category_id).await
    }

    async fn home_page_faqs(&self) -> Result<Vec<Faq>, FaqError> {
        self.repository
            .list_home_page_faqs(HOME_PAGE_LIMIT as i64)
            .await
    }

    async fn get_faq(&self, id: &FaqId) -> Result<Faq, FaqError> {
        self.repository
            .find_faq_by_id(id)
            .await?
            .ok_or(FaqError::NotFound(id.to_string()))
    }

    async fn update_faq(&self, id: &FaqId, command: UpdateFaqCommand) -> Result<Faq, FaqError> {
        let mut faq = self
            .repository
            .find_faq_by_id(id)
            .await?
            .ok_or(FaqError::NotFound(id.to_string()))?;

        if let Some(category_id) = &command.category_id {
            self.ensure_category_exists(category_id).await?;
            faq.category_id = *category_id;
        }

        if command.show_home_page == Some(true) && !faq.show_home_page {
            self.ensure_home_page_capacity(Some(*id)).await?;
        }
        if let Some(show_home_page) = command.show_home_page {
            faq.show_home_page = show_home_page;
        }

        if let Some(display_order) = command.display_order {
            self.ensure_order_free(&faq.category_id, display_order, Some(*id))
                .await?;
            faq.display_order = display_order;
        }

        if let Some(question) = command.question {
            faq.question = question;
        }
        if let Some(answer) = command.answer {
            faq.answer = answer;
        }
        faq.updated_at = Utc::now();

        self.repository.update_faq(faq).await
    }

    async fn delete_faq(&self, id: &FaqId) -> Result<(), FaqError> {
        self.repository.delete_faq(id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestFaqRepository {}

        #[async_trait]
        impl FaqRepository for TestFaqRepository {
            async fn create_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError>;
            async fn find_category_by_id(&self, id: &FaqCategoryId) -> Result<Option<FaqCategory>, FaqError>;
            async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError>;
            async fn update_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError>;
            async fn delete_category(&self, id: &FaqCategoryId) -> Result<(), FaqError>;
            async fn count_faqs_in_category(&self, id: &FaqCategoryId) -> Result<i64, FaqError>;
            async fn create_faq(&self, faq: Faq) -> Result<Faq, FaqError>;
            async fn find_faq_by_id(&self, id: &FaqId) -> Result<Option<Faq>, FaqError>;
            async fn find_faq_by_order(&self, category_id: &FaqCategoryId, display_order: i32, exclude: Option<FaqId>) -> Result<Option<Faq>, FaqError>;
            async fn count_home_page_faqs(&self, exclude: Option<FaqId>) -> Result<i64, FaqError>;
            async fn list_faqs(&self, category_id: Option<FaqCategoryId>) -> Result<Vec<Faq>, FaqError>;
            async fn list_home_page_faqs(&self, limit: i64) -> Result<Vec<Faq>, FaqError>;
            async fn update_faq(&self, faq: Faq) -> Result<Faq, FaqError>;
            async fn delete_faq(&self, id: &FaqId) -> Result<(), FaqError>;
        }
    }

    fn test_category(id: FaqCategoryId) -> FaqCategory {
        FaqCategory {
            id,
            name: "Membership".to_string(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn test_faq(id: FaqId, category_id: FaqCategoryId) -> Faq {
        Faq {
            id,
            question: "How do I join?".to_string(),
            answer: "Register on the site.".to_string(),
            category_id,
            display_order: 1,
            show_home_page: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_command(category_id: FaqCategoryId, order: Option<i32>, home: bool) -> CreateFaqCommand {
        CreateFaqCommand {
            question: "How do I join?".to_string(),
            answer: "Register on the site.".to_string(),
            category_id,
            display_order: order,
            show_home_page: home,
        }
    }

    #[tokio::test]
    async fn test_create_faq_unknown_category() {
        let mut repository = MockTestFaqRepository::new();
        repository
            .expect_find_category_by_id()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create_faq().times(0);

        let service = FaqService::new(Arc::new(repository));

        let result = service
            .create_faq(create_command(FaqCategoryId::new(), None, false))
            .await;
        assert!(matches!(result.unwrap_err(), FaqError::CategoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_create_faq_order_taken() {
        let mut repository = MockTestFaqRepository::new();
        let category_id = FaqCategoryId::new();

        let category = test_category(category_id);
        repository
            .expect_find_category_by_id()
            .times(1)
            .returning(move |_| Ok(Some(category.clone())));
        let occupying = test_faq(FaqId::new(), category_id);
        repository
            .expect_find_faq_by_order()
            .withf(|_, order, exclude| *order == 1 && exclude.is_none())
            .times(1)
            .returning(move |_, _, _| Ok(Some(occupying.clone())));
        repository.expect_create_faq().times(0);

        let service = FaqService::new(Arc::new(repository));

        let result = service
            .create_faq(create_command(category_id, Some(1), false))
            .await;
        assert!(matches!(result.unwrap_err(), FaqError::OrderTaken(1)));
    }

    #[tokio::test]
    async fn test_create_faq_home_page_limit() {
        let mut repository = MockTestFaqRepository::new();
        let category_id = FaqCategoryId::new();

        let category = test_category(category_id);
        repository
            .expect_find_category_by_id()
            .times(1)
            .returning(move |_| Ok(Some(category.clone())));
        repository
            .expect_count_home_page_faqs()
            .times(1)
            .returning(|_| Ok(HOME_PAGE_LIMIT as i64));
        repository.expect_create_faq().times(0);

        let service = FaqService::new(Arc::new(repository));

        let result = service
            .create_faq(create_command(category_id, None, true))
            .await;
        assert!(matches!(
            result.unwrap_err(),
            FaqError::HomePageLimitReached(_)
        ));
    }

    #[tokio::test]
    async fn test_create_faq_success() {
        let mut repository = MockTestFaqRepository::new();
        let category_id = FaqCategoryId::new();

        let category = test_category(category_id);
        repository
            .expect_find_category_by_id()
            .times(1)
            .returning(move |_| Ok(Some(category.clone())));
        repository
            .expect_find_faq_by_order()
            .times(1)
            .returning(|_, _, _| Ok(None));
        repository
            .expect_create_faq()
            .withf(move |faq| faq.category_id == category_id && faq.display_order == 3)
            .times(1)
            .returning(|faq| Ok(faq));

        let service = FaqService::new(Arc::new(repository));

        let faq = service
            .create_faq(create_command(category_id, Some(3), false))
            .await
            .unwrap();
        assert_eq!(faq.display_order, 3);
    }

    #[tokio::test]
    async fn test_delete_category_in_use() {
        let mut repository = MockTestFaqRepository::new();
        let category_id = FaqCategoryId::new();

        let category = test_category(category_id);
        repository
            .expect_find_category_by_id()
            .times(1)
            .returning(move |_| Ok(Some(category.clone())));
        repository
            .expect_count_faqs_in_category()
            .times(1)
            .returning(|_| Ok(2));
        repository.expect_delete_category().times(0);

        let service = FaqService::new(Arc::new(repository));

        let result = service.delete_category(&category_id).await;
        assert!(matches!(result.unwrap_err(), FaqError::CategoryInUse));
    }

    #[tokio::test]
    async fn test_update_faq_enabling_home_page_checks_capacity() {
        let mut repository = MockTestFaqRepository::new();
        let category_id = FaqCategoryId::new();
        let faq = test_faq(FaqId::new(), category_id);
        let faq_id = faq.id;

        let returned = faq.clone();
        repository
            .expect_find_faq_by_id()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_count_home_page_faqs()
            .withf(move |exclude| *exclude == Some(faq_id))
            .times(1)
            .returning(|_| Ok(1));
        repository
            .expect_update_faq()
            .withf(|faq| faq.show_home_page)
            .times(1)
            .returning(|faq| Ok(faq));

        let service = FaqService::new(Arc::new(repository));

        let command = UpdateFaqCommand {
            show_home_page: Some(true),
            ..Default::default()
        };

        let updated = service.update_faq(&faq_id, command).await.unwrap();
        assert!(updated.show_home_page);
    }
}
