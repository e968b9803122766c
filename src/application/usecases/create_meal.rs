use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    errors::DomainError, models::Meal, repositories::MealRepository,
    value_objects::parse_meal_time,
};

const REQUIRED_FIELDS: &str = "required fields: name, dateTime, isInsideDiet (boolean)";

pub struct CreateMealUseCase {
    meal_repo: Arc<dyn MealRepository>,
}

/// `is_inside_diet` is `None` both when absent and when the caller sent something
/// other than a boolean; either way creation is refused.
pub struct CreateMealRequest {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    pub is_inside_diet: Option<bool>,
}

impl CreateMealUseCase {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    pub async fn execute(&self, request: CreateMealRequest) -> Result<Meal, DomainError> {
        let (Some(name), Some(raw_date_time), Some(is_inside_diet)) = (
            request.name.filter(|name| !name.is_empty()),
            request.date_time.filter(|raw| !raw.is_empty()),
            request.is_inside_diet,
        ) else {
            debug!(user_id = %request.user_id, "rejected incomplete meal");
            return Err(DomainError::validation(REQUIRED_FIELDS));
        };

        let meal = Meal {
            id: Uuid::new_v4(),
            user_id: request.user_id,
            name,
            description: request.description.unwrap_or_default(),
            date_time: parse_meal_time(&raw_date_time)?,
            is_inside_diet,
        };

        let meal = self.meal_repo.insert(meal).await?;
        info!(user_id = %meal.user_id, meal_id = %meal.id, "created meal");
        Ok(meal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryMealRepository;

    fn request(user_id: Uuid) -> CreateMealRequest {
        CreateMealRequest {
            user_id,
            name: Some("Lunch".to_string()),
            description: None,
            date_time: Some("2024-01-01T12:00:00Z".to_string()),
            is_inside_diet: Some(true),
        }
    }

    #[tokio::test]
    async fn description_defaults_to_empty() -> anyhow::Result<()> {
        let repo = Arc::new(InMemoryMealRepository::new());
        let usecase = CreateMealUseCase::new(repo.clone());
        let user_id = Uuid::new_v4();

        let meal = usecase.execute(request(user_id)).await?;

        assert_eq!(meal.user_id, user_id);
        assert_eq!(meal.name, "Lunch");
        assert_eq!(meal.description, "");
        assert!(meal.is_inside_diet);
        assert_eq!(repo.get(&user_id, &meal.id).await?, Some(meal));
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_without_storing() -> anyhow::Result<()> {
        let repo = Arc::new(InMemoryMealRepository::new());
        let usecase = CreateMealUseCase::new(repo.clone());
        let user_id = Uuid::new_v4();

        let broken = [
            CreateMealRequest {
                name: None,
                ..request(user_id)
            },
            CreateMealRequest {
                name: Some(String::new()),
                ..request(user_id)
            },
            CreateMealRequest {
                date_time: None,
                ..request(user_id)
            },
            CreateMealRequest {
                date_time: Some("not a date".to_string()),
                ..request(user_id)
            },
            CreateMealRequest {
                is_inside_diet: None,
                ..request(user_id)
            },
        ];

        for request in broken {
            let result = usecase.execute(request).await;
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }
        assert!(repo.list_by_user(&user_id).await?.is_empty());
        Ok(())
    }
}
