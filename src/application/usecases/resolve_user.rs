use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{errors::DomainError, models::UserResolution, repositories::UserRepository};

pub struct ResolveUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

pub struct ResolveUserRequest {
    pub name: Option<String>,
}

impl ResolveUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Upsert by name: an existing user is returned unchanged.
    pub async fn execute(&self, request: ResolveUserRequest) -> Result<UserResolution, DomainError> {
        let Some(name) = request.name.filter(|name| !name.is_empty()) else {
            debug!("rejected user without a name");
            return Err(DomainError::validation("name is required"));
        };

        let resolution = self.user_repo.resolve_or_create(&name).await?;
        if resolution.is_created() {
            info!(user_id = %resolution.user().id, "created user");
        }
        Ok(resolution)
    }
}
