use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Meal, MealPatch, User, UserResolution},
    repositories::{MealRepository, UserRepository},
};

/// Users kept in a `Vec` so listing follows creation order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn resolve_or_create(&self, name: &str) -> anyhow::Result<UserResolution> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.iter().find(|u| u.has_name(name)) {
            return Ok(UserResolution::Existing(existing.clone()));
        }

        let user = User::new(name);
        users.push(user.clone());
        Ok(UserResolution::Created(user))
    }

    async fn exists(&self, id: &Uuid) -> anyhow::Result<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| &u.id == id))
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }
}

/// Meals of every user in one `Vec`, in insertion order. Removal shifts the tail
/// so the remaining meals keep their relative order.
#[derive(Default)]
pub struct InMemoryMealRepository {
    meals: Arc<RwLock<Vec<Meal>>>,
}

impl InMemoryMealRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn owned_by(meal: &Meal, user_id: &Uuid, meal_id: &Uuid) -> bool {
    &meal.id == meal_id && &meal.user_id == user_id
}

#[async_trait]
impl MealRepository for InMemoryMealRepository {
    async fn insert(&self, meal: Meal) -> anyhow::Result<Meal> {
        let mut meals = self.meals.write().await;
        if meals.iter().any(|m| m.id == meal.id) {
            anyhow::bail!("meal id {} already stored", meal.id);
        }
        meals.push(meal.clone());
        Ok(meal)
    }

    async fn list_by_user(&self, user_id: &Uuid) -> anyhow::Result<Vec<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals
            .iter()
            .filter(|m| &m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, user_id: &Uuid, meal_id: &Uuid) -> anyhow::Result<Option<Meal>> {
        let meals = self.meals.read().await;
        Ok(meals
            .iter()
            .find(|m| owned_by(m, user_id, meal_id))
            .cloned())
    }

    async fn update(
        &self,
        user_id: &Uuid,
        meal_id: &Uuid,
        patch: MealPatch,
    ) -> anyhow::Result<Option<Meal>> {
        let mut meals = self.meals.write().await;
        Ok(meals
            .iter_mut()
            .find(|m| owned_by(m, user_id, meal_id))
            .map(|meal| {
                meal.apply(patch);
                meal.clone()
            }))
    }

    async fn delete(&self, user_id: &Uuid, meal_id: &Uuid) -> anyhow::Result<bool> {
        let mut meals = self.meals.write().await;
        match meals.iter().position(|m| owned_by(m, user_id, meal_id)) {
            Some(index) => {
                meals.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
