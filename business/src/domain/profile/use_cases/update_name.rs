use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateProfileNameParams {
    pub user_id: UserId,
    pub name: String,
}

#[async_trait]
pub trait UpdateProfileNameUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileNameParams)
    -> Result<UserProfile, ProfileError>;
}
