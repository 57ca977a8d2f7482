use diesel::prelude::*;

use budgetbuddy_core::categories::Category;

#[derive(Queryable, Selectable, Insertable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub household_id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<CategoryDB> for Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            icon: db.icon,
            color: db.color,
            household_id: db.household_id,
        }
    }
}

impl From<Category> for CategoryDB {
    fn from(domain: Category) -> Self {
        Self {
            id: domain.id,
            household_id: domain.household_id,
            name: domain.name,
            icon: domain.icon,
            color: domain.color,
        }
    }
}
