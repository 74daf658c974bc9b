use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::set_theme::{SetThemeParams, SetThemeUseCase};

pub struct SetThemeUseCaseImpl {
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetThemeUseCase for SetThemeUseCaseImpl {
    async fn execute(&self, params: SetThemeParams) -> Result<UserProfile, ProfileError> {
        self.profile_repository
            .set_theme(&params.user_id, params.theme)
            .await?;

        self.logger.info(&format!(
            "Theme set to {} for user {}",
            params.theme, params.user_id
        ));

        let profile = self
            .profile_repository
            .find(&params.user_id)
            .await?
            .unwrap_or_else(|| UserProfile::default_for(params.user_id));
        Ok(profile)
    }
}
