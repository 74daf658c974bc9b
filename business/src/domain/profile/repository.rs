use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::UserProfile;
use super::value_objects::ThemePreference;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self, user_id: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
    /// Upserts the display name; creates the row if the user has none yet.
    async fn update_name(&self, user_id: &UserId, name: &str) -> Result<(), RepositoryError>;
    /// Upserts the theme field; creates the row if the user has none yet.
    async fn set_theme(
        &self,
        user_id: &UserId,
        theme: ThemePreference,
    ) -> Result<(), RepositoryError>;
}
