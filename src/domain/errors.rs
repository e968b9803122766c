use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Header \"user-id\" is required.")]
    IdentityRequired,
    #[error("User not found.")]
    UnknownIdentity,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DomainError {
    pub fn meal_not_found() -> Self {
        Self::NotFound("meal not found".to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
