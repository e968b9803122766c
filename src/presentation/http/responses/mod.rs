use poem_openapi::{ApiResponse, Object, payload::Json};
use uuid::Uuid;

#[derive(Object)]
pub struct ServiceStatusDto {
    pub message: String,
}

#[derive(Object)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(ApiResponse)]
pub enum ResolveUserResponse {
    /// A user with that name did not exist and was created
    #[oai(status = 201)]
    Created(Json<UserDto>),
    /// A user with that name (ignoring case) already existed
    #[oai(status = 200)]
    Existing(Json<UserDto>),
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct MealDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub date_time: String,
    pub is_inside_diet: bool,
}

#[derive(ApiResponse)]
pub enum CreateMealResponse {
    #[oai(status = 201)]
    Created(Json<MealDto>),
}

#[derive(ApiResponse)]
pub enum DeleteMealResponse {
    #[oai(status = 204)]
    Deleted,
}

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct MealMetricsDto {
    pub total_meals: u32,
    pub meals_inside_diet: u32,
    pub meals_outside_diet: u32,
    pub best_inside_diet_sequence: u32,
}
