use async_trait::async_trait;

use super::categories_model::{Category, NewCategory};
use crate::errors::Result;

#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn insert_category(&self, category: Category) -> Result<Category>;

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>>;

    /// Categories of a household, in creation order.
    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>>;
}

#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;

    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>>;

    /// Creates the built-in category set for a household.
    async fn create_default_categories(&self, household_id: &str) -> Result<Vec<Category>>;
}
