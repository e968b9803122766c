use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::MealMetrics, repositories::MealRepository};

pub struct ComputeMetricsUseCase {
    meal_repo: Arc<dyn MealRepository>,
}

impl ComputeMetricsUseCase {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<MealMetrics, DomainError> {
        let meals = self.meal_repo.list_by_user(&user_id).await?;
        Ok(MealMetrics::from_meals(&meals))
    }
}
