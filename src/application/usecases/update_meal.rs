use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    errors::DomainError,
    models::{Meal, MealPatch},
    repositories::MealRepository,
    value_objects::parse_meal_time,
};

pub struct UpdateMealUseCase {
    meal_repo: Arc<dyn MealRepository>,
}

/// Partial update. Unlike creation, an `is_inside_diet` that was not a boolean
/// arrives here as `None` and simply keeps the stored flag.
#[derive(Default)]
pub struct UpdateMealRequest {
    pub user_id: Uuid,
    pub meal_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    pub is_inside_diet: Option<bool>,
}

impl UpdateMealUseCase {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    pub async fn execute(&self, request: UpdateMealRequest) -> Result<Meal, DomainError> {
        // someone else's meal is missing, whatever the payload looks like
        if self
            .meal_repo
            .get(&request.user_id, &request.meal_id)
            .await?
            .is_none()
        {
            return Err(DomainError::meal_not_found());
        }

        if request.name.as_deref() == Some("") {
            debug!(meal_id = %request.meal_id, "rejected empty meal name");
            return Err(DomainError::validation("name cannot be empty"));
        }

        let date_time = request
            .date_time
            .as_deref()
            .map(parse_meal_time)
            .transpose()?;

        let patch = MealPatch {
            name: request.name,
            description: request.description,
            date_time,
            is_inside_diet: request.is_inside_diet,
        };

        self.meal_repo
            .update(&request.user_id, &request.meal_id, patch)
            .await?
            .ok_or_else(DomainError::meal_not_found)
    }
}
