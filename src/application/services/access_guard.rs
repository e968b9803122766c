use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::{errors::DomainError, repositories::UserRepository};

/// Turns the identifier a caller presents into a known user id. Every meal
/// operation goes through here first.
pub struct AccessGuard {
    user_repo: Arc<dyn UserRepository>,
}

impl AccessGuard {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn authorize(&self, raw_user_id: Option<&str>) -> Result<Uuid, DomainError> {
        let raw = raw_user_id
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::IdentityRequired)?;

        // an id that doesn't parse can't belong to anyone
        let Ok(user_id) = Uuid::parse_str(raw) else {
            debug!(user_id = raw, "rejected malformed user id");
            return Err(DomainError::UnknownIdentity);
        };

        if !self.user_repo.exists(&user_id).await? {
            debug!(%user_id, "rejected unknown user id");
            return Err(DomainError::UnknownIdentity);
        }

        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    #[tokio::test]
    async fn missing_identity_is_required() {
        let guard = AccessGuard::new(Arc::new(InMemoryUserRepository::new()));

        assert!(matches!(
            guard.authorize(None).await,
            Err(DomainError::IdentityRequired)
        ));
        assert!(matches!(
            guard.authorize(Some("  ")).await,
            Err(DomainError::IdentityRequired)
        ));
    }

    #[tokio::test]
    async fn unknown_or_malformed_identity_is_rejected() {
        let guard = AccessGuard::new(Arc::new(InMemoryUserRepository::new()));

        assert!(matches!(
            guard.authorize(Some("1700000000000")).await,
            Err(DomainError::UnknownIdentity)
        ));
        let stranger = Uuid::new_v4().to_string();
        assert!(matches!(
            guard.authorize(Some(&stranger)).await,
            Err(DomainError::UnknownIdentity)
        ));
    }

    #[tokio::test]
    async fn known_user_passes() -> anyhow::Result<()> {
        let users = Arc::new(InMemoryUserRepository::new());
        let user = users.resolve_or_create("Lia").await?.into_user();
        let guard = AccessGuard::new(users);

        let resolved = guard.authorize(Some(&user.id.to_string())).await?;
        assert_eq!(resolved, user.id);
        Ok(())
    }
}
