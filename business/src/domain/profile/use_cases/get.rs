use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::shared::value_objects::UserId;

pub struct GetProfileParams {
    pub user_id: UserId,
}

/// Profile plus the aggregate lifetime spend shown on the profile view.
pub struct ProfileOverview {
    pub profile: UserProfile,
    pub lifetime_spent: BigDecimal,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<ProfileOverview, ProfileError>;
}
