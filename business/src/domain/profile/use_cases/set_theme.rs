use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::value_objects::ThemePreference;
use crate::domain::shared::value_objects::UserId;

pub struct SetThemeParams {
    pub user_id: UserId,
    pub theme: ThemePreference,
}

#[async_trait]
pub trait SetThemeUseCase: Send + Sync {
    async fn execute(&self, params: SetThemeParams) -> Result<UserProfile, ProfileError>;
}
