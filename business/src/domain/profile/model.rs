use crate::domain::shared::value_objects::UserId;

use super::value_objects::ThemePreference;

/// Default display name shown until the user edits their profile.
pub const DEFAULT_PROFILE_NAME: &str = "Usuário";

/// Per-user profile record. `email` mirrors the identity service and is
/// never written through this application; changing the authentication
/// email requires a separate re-verification flow.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub theme: ThemePreference,
}

impl UserProfile {
    /// Fallback profile for users without a stored row yet.
    pub fn default_for(id: UserId) -> Self {
        Self {
            id,
            name: DEFAULT_PROFILE_NAME.to_string(),
            email: String::new(),
            theme: ThemePreference::default(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: UserId,
        name: String,
        email: String,
        theme: ThemePreference,
    ) -> Self {
        Self {
            id,
            name,
            email,
            theme,
        }
    }
}
