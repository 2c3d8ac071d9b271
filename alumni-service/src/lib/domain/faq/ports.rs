use async_trait::async_trait;

use crate::faq::errors::FaqError;
use crate::faq::models::CreateFaqCategoryCommand;
use crate::faq::models::CreateFaqCommand;
use crate::faq::models::Faq;
use crate::faq::models::FaqCategory;
use crate::faq::models::FaqCategoryId;
use crate::faq::models::FaqId;
use crate::faq::models::UpdateFaqCategoryCommand;
use crate::faq::models::UpdateFaqCommand;

/// Port for FAQ and category operations.
#[async_trait]
pub trait FaqServicePort: Send + Sync + 'static {
    /// # Errors
    /// * `DuplicateCategoryName` - a category with this name exists
    async fn create_category(
        &self,
        command: CreateFaqCategoryCommand,
    ) -> Result<FaqCategory, FaqError>;

    async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError>;

    async fn update_category(
        &self,
        id: &FaqCategoryId,
        command: UpdateFaqCategoryCommand,
    ) -> Result<FaqCategory, FaqError>;

    /// # Errors
    /// * `CategoryInUse` - faqs still reference the category
    async fn delete_category(&self, id: &FaqCategoryId) -> Result<(), FaqError>;

    /// # Errors
    /// * `CategoryNotFound` - referenced category does not exist
    /// * `OrderTaken` - display order already used within the category
    /// * `HomePageLimitReached` - home-page cap would be exceeded
    async fn create_faq(&self, command: CreateFaqCommand) -> Result<Faq, FaqError>;

    /// List faqs, optionally restricted to one category, ordered by display
    /// order then creation time.
    async fn list_faqs(&self, category_id: Option<FaqCategoryId>) -> Result<Vec<Faq>, FaqError>;

    /// The home-page selection, capped.
    async fn home_page_faqs(&self) -> Result<Vec<Faq>, FaqError>;

    async fn get_faq(&self, id: &FaqId) -> Result<Faq, FaqError>;

    async fn update_faq(&self, id: &FaqId, command: UpdateFaqCommand) -> Result<Faq, FaqError>;

    async fn delete_faq(&self, id: &FaqId) -> Result<(), FaqError>;
}

/// Persistence operations for faqs and their categories.
///
/// One repository for both collections: every service invariant (order
/// uniqueness, category existence, in-use checks) spans the two.
#[async_trait]
pub trait FaqRepository: Send + Sync + 'static {
    async fn create_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError>;

    async fn find_category_by_id(
        &self,
        id: &FaqCategoryId,
    ) -> Result<Option<FaqCategory>, FaqError>;

    async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError>;

    async fn update_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError>;

    async fn delete_category(&self, id: &FaqCategoryId) -> Result<(), FaqError>;

    /// Number of faqs referencing this category.
    async fn count_faqs_in_category(&self, id: &FaqCategoryId) -> Result<i64, FaqError>;

    async fn create_faq(&self, faq: Faq) -> Result<Faq, FaqError>;

    async fn find_faq_by_id(&self, id: &FaqId) -> Result<Option<Faq>, FaqError>;

    /// The faq occupying this display order within a category, ignoring
    /// `exclude` (used when updating a faq in place).
    async fn find_faq_by_order(
        &self,
        category_id: &FaqCategoryId,
        display_order: i32,
        exclude: Option<FaqId>,
    ) -> Result<Option<Faq>, FaqError>;

    /// Number of home-page faqs, ignoring `exclude`.
    async fn count_home_page_faqs(&self, exclude: Option<FaqId>) -> Result<i64, FaqError>;

    async fn list_faqs(&self, category_id: Option<FaqCategoryId>) -> Result<Vec<Faq>, FaqError>;

    async fn list_home_page_faqs(&self, limit: i64) -> Result<Vec<Faq>, FaqError>;

    async fn update_faq(&self, faq: Faq) -> Result<Faq, FaqError>;

    async fn delete_faq(&self, id: &FaqId) -> Result<(), FaqError>;
}
