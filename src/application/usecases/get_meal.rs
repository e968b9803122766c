use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Meal, repositories::MealRepository};

pub struct GetMealUseCase {
    meal_repo: Arc<dyn MealRepository>,
}

impl GetMealUseCase {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    pub async fn execute(&self, user_id: Uuid, meal_id: Uuid) -> Result<Meal, DomainError> {
        self.meal_repo
            .get(&user_id, &meal_id)
            .await?
            .ok_or_else(DomainError::meal_not_found)
    }
}
