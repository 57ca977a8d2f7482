use async_trait::async_trait;

use budgetbuddy_core::categories::{Category, CategoryRepositoryTrait};
use budgetbuddy_core::errors::Result;

use crate::tables::{collect, ensure_new_id};
use crate::MemoryStore;

#[async_trait]
impl CategoryRepositoryTrait for MemoryStore {
    async fn insert_category(&self, category: Category) -> Result<Category> {
        let mut tables = self.tables.write().await;
        ensure_new_id(&tables.categories, &category.id, "Category")?;
        tables
            .index_mut(&category.household_id)
            .categories
            .push(category.id.clone());
        tables
            .categories
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    async fn get_category(&self, category_id: &str) -> Result<Option<Category>> {
        Ok(self.tables.read().await.categories.get(category_id).cloned())
    }

    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables
            .index(household_id)
            .map(|index| collect(&index.categories, &tables.categories))
            .unwrap_or_default())
    }
}
