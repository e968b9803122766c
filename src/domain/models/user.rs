use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    /// Names are unique ignoring case, so lookups go through this.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Outcome of resolving a user by name.
#[derive(Debug, Clone)]
pub enum UserResolution {
    Existing(User),
    Created(User),
}

impl UserResolution {
    pub fn user(&self) -> &User {
        match self {
            UserResolution::Existing(user) | UserResolution::Created(user) => user,
        }
    }

    pub fn into_user(self) -> User {
        match self {
            UserResolution::Existing(user) | UserResolution::Created(user) => user,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, UserResolution::Created(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case() {
        let user = User::new("Maria");
        assert!(user.has_name("maria"));
        assert!(user.has_name("MARIA"));
        assert!(!user.has_name("Mario"));
    }

    #[test]
    fn new_users_get_distinct_ids() {
        assert_ne!(User::new("a").id, User::new("a").id);
    }
}
