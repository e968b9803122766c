use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub is_inside_diet: bool,
}

/// Fields of a meal that can be replaced after creation. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct MealPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub is_inside_diet: Option<bool>,
}

impl Meal {
    pub fn apply(&mut self, patch: MealPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date_time) = patch.date_time {
            self.date_time = date_time;
        }
        if let Some(is_inside_diet) = patch.is_inside_diet {
            self.is_inside_diet = is_inside_diet;
        }
    }
}
