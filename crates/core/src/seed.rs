//! Demo data for a fresh installation.

use log::info;

use crate::budgets::{BudgetPeriod, BudgetService, BudgetServiceTrait, NewBudget};
use crate::categories::{default_categories, CategoryService, CategoryServiceTrait};
use crate::constants::DEFAULT_HOUSEHOLD_ID;
use crate::errors::Result;
use crate::households::{HouseholdService, HouseholdServiceTrait, NewHousehold, NewUser};
use crate::storage::Repositories;

const DEMO_HOUSEHOLD_NAME: &str = "The Johnsons";

const DEMO_MEMBERS: [(&str, &str, &str); 2] = [
    (
        "user1",
        "sarah",
        "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face",
    ),
    (
        "user2",
        "mike",
        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
    ),
];

/// Monthly budget per default category, in the order of `default_categories()`.
const DEMO_BUDGETS: [&str; 7] = ["800", "200", "400", "300", "400", "1100", "1000"];

/// Creates the demo household with two members, the default categories
/// (`cat1`..`cat7`) and one monthly budget per category (`budget1`..`budget7`).
///
/// Does nothing when the demo household already exists.
pub async fn seed_demo_household(repositories: &Repositories) -> Result<()> {
    if repositories
        .households
        .get_household(DEFAULT_HOUSEHOLD_ID)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let households = HouseholdService::new(repositories.households.clone());
    let categories = CategoryService::new(repositories.categories.clone());
    let budgets = BudgetService::new(
        repositories.budgets.clone(),
        repositories.categories.clone(),
    );

    households
        .create_household(NewHousehold {
            id: Some(DEFAULT_HOUSEHOLD_ID.to_string()),
            name: DEMO_HOUSEHOLD_NAME.to_string(),
        })
        .await?;

    for (id, username, avatar) in DEMO_MEMBERS {
        households
            .create_user(NewUser {
                id: Some(id.to_string()),
                username: username.to_string(),
                household_id: DEFAULT_HOUSEHOLD_ID.to_string(),
                avatar: Some(avatar.to_string()),
            })
            .await?;
    }

    for (index, (template, amount)) in default_categories().iter().zip(DEMO_BUDGETS).enumerate() {
        let category = categories
            .create_category(
                template.to_new_category(DEFAULT_HOUSEHOLD_ID, Some(format!("cat{}", index + 1))),
            )
            .await?;
        budgets
            .create_budget(NewBudget {
                id: Some(format!("budget{}", index + 1)),
                household_id: DEFAULT_HOUSEHOLD_ID.to_string(),
                category_id: Some(category.id),
                amount: amount.to_string(),
                period: BudgetPeriod::Monthly,
            })
            .await?;
    }

    info!("Seeded demo household '{}'", DEFAULT_HOUSEHOLD_ID);
    Ok(())
}
