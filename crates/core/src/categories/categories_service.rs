use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::categories_model::{default_categories, Category, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Result, ValidationError};

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        CategoryService { repository }
    }

    fn validate(new_category: &NewCategory) -> Result<()> {
        for (field, value) in [
            ("householdId", &new_category.household_id),
            ("name", &new_category.name),
            ("icon", &new_category.icon),
            ("color", &new_category.color),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field.to_string()).into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        Self::validate(&new_category)?;

        let category = Category {
            id: new_category
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_category.name.trim().to_string(),
            icon: new_category.icon,
            color: new_category.color,
            household_id: new_category.household_id,
        };
        debug!(
            "Creating category '{}' for household {}",
            category.name, category.household_id
        );
        self.repository.insert_category(category).await
    }

    async fn list_categories(&self, household_id: &str) -> Result<Vec<Category>> {
        self.repository.list_categories(household_id).await
    }

    async fn create_default_categories(&self, household_id: &str) -> Result<Vec<Category>> {
        let mut created = Vec::with_capacity(default_categories().len());
        for template in default_categories() {
            let category = self
                .create_category(template.to_new_category(household_id, None))
                .await?;
            created.push(category);
        }
        Ok(created)
    }
}
