pub mod compute_metrics;
pub mod create_meal;
pub mod delete_meal;
pub mod get_meal;
pub mod list_meals;
pub mod list_users;
pub mod resolve_user;
pub mod update_meal;
