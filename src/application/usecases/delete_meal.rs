use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainError, repositories::MealRepository};

pub struct DeleteMealUseCase {
    meal_repo: Arc<dyn MealRepository>,
}

impl DeleteMealUseCase {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    /// Not idempotent: deleting the same meal twice fails the second time.
    pub async fn execute(&self, user_id: Uuid, meal_id: Uuid) -> Result<(), DomainError> {
        if !self.meal_repo.delete(&user_id, &meal_id).await? {
            return Err(DomainError::meal_not_found());
        }

        info!(%user_id, %meal_id, "deleted meal");
        Ok(())
    }
}
