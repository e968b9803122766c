use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::{
        services::access_guard::AccessGuard,
        usecases::{
            compute_metrics::ComputeMetricsUseCase, create_meal::CreateMealUseCase,
            delete_meal::DeleteMealUseCase, get_meal::GetMealUseCase,
            list_meals::ListMealsUseCase, list_users::ListUsersUseCase,
            resolve_user::ResolveUserUseCase, update_meal::UpdateMealUseCase,
        },
    },
    domain::repositories::{MealRepository, UserRepository},
    infrastructure::repositories::in_memory::{InMemoryMealRepository, InMemoryUserRepository},
};

#[derive(Clone)]
pub struct ApiState {
    pub access_guard: Arc<AccessGuard>,
    pub resolve_user_usecase: Arc<ResolveUserUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub create_meal_usecase: Arc<CreateMealUseCase>,
    pub list_meals_usecase: Arc<ListMealsUseCase>,
    pub get_meal_usecase: Arc<GetMealUseCase>,
    pub update_meal_usecase: Arc<UpdateMealUseCase>,
    pub delete_meal_usecase: Arc<DeleteMealUseCase>,
    pub compute_metrics_usecase: Arc<ComputeMetricsUseCase>,
}

impl ApiState {
    pub fn new(user_repo: Arc<dyn UserRepository>, meal_repo: Arc<dyn MealRepository>) -> Self {
        Self {
            access_guard: Arc::new(AccessGuard::new(user_repo.clone())),
            resolve_user_usecase: Arc::new(ResolveUserUseCase::new(user_repo.clone())),
            list_users_usecase: Arc::new(ListUsersUseCase::new(user_repo)),
            create_meal_usecase: Arc::new(CreateMealUseCase::new(meal_repo.clone())),
            list_meals_usecase: Arc::new(ListMealsUseCase::new(meal_repo.clone())),
            get_meal_usecase: Arc::new(GetMealUseCase::new(meal_repo.clone())),
            update_meal_usecase: Arc::new(UpdateMealUseCase::new(meal_repo.clone())),
            delete_meal_usecase: Arc::new(DeleteMealUseCase::new(meal_repo.clone())),
            compute_metrics_usecase: Arc::new(ComputeMetricsUseCase::new(meal_repo)),
        }
    }

    /// Fresh, empty stores. Nothing survives a restart.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryMealRepository::new()),
        )
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
    Meals,
}
