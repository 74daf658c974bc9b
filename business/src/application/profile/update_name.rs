use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::update_name::{
    UpdateProfileNameParams, UpdateProfileNameUseCase,
};

/// Persists the display name as typed. The mirrored email is deliberately
/// untouched: the authentication email only changes through the identity
/// service's own re-verification flow.
pub struct UpdateProfileNameUseCaseImpl {
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileNameUseCase for UpdateProfileNameUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateProfileNameParams,
    ) -> Result<UserProfile, ProfileError> {
        self.profile_repository
            .update_name(&params.user_id, &params.name)
            .await?;

        self.logger
            .info(&format!("Profile name updated for user {}", params.user_id));

        let profile = self
            .profile_repository
            .find(&params.user_id)
            .await?
            .unwrap_or_else(|| UserProfile::default_for(params.user_id));
        Ok(profile)
    }
}
