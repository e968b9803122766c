use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{Meal, MealPatch, User, UserResolution};

/// Known users, iterated in the order they were created.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns the user whose name matches ignoring case, creating it if none does.
    /// Lookup and insertion are one atomic step.
    async fn resolve_or_create(&self, name: &str) -> anyhow::Result<UserResolution>;
    async fn exists(&self, id: &Uuid) -> anyhow::Result<bool>;
    async fn list(&self) -> anyhow::Result<Vec<User>>;
}

/// Meals keyed by owner. Every lookup is scoped by `user_id`: a meal owned by
/// someone else behaves exactly like a missing one.
#[async_trait]
pub trait MealRepository: Send + Sync {
    async fn insert(&self, meal: Meal) -> anyhow::Result<Meal>;
    /// The user's meals in insertion order.
    async fn list_by_user(&self, user_id: &Uuid) -> anyhow::Result<Vec<Meal>>;
    async fn get(&self, user_id: &Uuid, meal_id: &Uuid) -> anyhow::Result<Option<Meal>>;
    async fn update(
        &self,
        user_id: &Uuid,
        meal_id: &Uuid,
        patch: MealPatch,
    ) -> anyhow::Result<Option<Meal>>;
    /// Returns `false` when nothing owned by `user_id` had that id.
    async fn delete(&self, user_id: &Uuid, meal_id: &Uuid) -> anyhow::Result<bool>;
}
