use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Meal, repositories::MealRepository};

pub struct ListMealsUseCase {
    meal_repo: Arc<dyn MealRepository>,
}

impl ListMealsUseCase {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Meal>, DomainError> {
        Ok(self.meal_repo.list_by_user(&user_id).await?)
    }
}
