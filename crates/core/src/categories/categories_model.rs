//! Category domain models.

use serde::{Deserialize, Serialize};

/// Label used to classify expenses and to attach a budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub household_id: String,
}

/// Input model for creating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub id: Option<String>,
    pub household_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Presentation defaults for a built-in category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

const DEFAULT_CATEGORIES: [CategoryTemplate; 7] = [
    CategoryTemplate {
        name: "Groceries",
        icon: "fas fa-shopping-cart",
        color: "#2563EB",
    },
    CategoryTemplate {
        name: "Transportation",
        icon: "fas fa-gas-pump",
        color: "#059669",
    },
    CategoryTemplate {
        name: "Entertainment",
        icon: "fas fa-film",
        color: "#7C3AED",
    },
    CategoryTemplate {
        name: "Dining Out",
        icon: "fas fa-utensils",
        color: "#EA580C",
    },
    CategoryTemplate {
        name: "Utilities",
        icon: "fas fa-bolt",
        color: "#DC2626",
    },
    CategoryTemplate {
        name: "Healthcare",
        icon: "fas fa-heartbeat",
        color: "#DB2777",
    },
    CategoryTemplate {
        name: "Other",
        icon: "fas fa-question",
        color: "#64748B",
    },
];

/// Categories every new household starts with, in display order.
pub fn default_categories() -> &'static [CategoryTemplate] {
    &DEFAULT_CATEGORIES
}

impl CategoryTemplate {
    pub fn to_new_category(&self, household_id: &str, id: Option<String>) -> NewCategory {
        NewCategory {
            id,
            household_id: household_id.to_string(),
            name: self.name.to_string(),
            icon: self.icon.to_string(),
            color: self.color.to_string(),
        }
    }
}
