use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::get::{GetProfileParams, GetProfileUseCase, ProfileOverview};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::services::lifetime_spent;

pub struct GetProfileUseCaseImpl {
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<ProfileOverview, ProfileError> {
        // No stored row yet reads as the default profile, not as an error.
        let profile = self
            .profile_repository
            .find(&params.user_id)
            .await?
            .unwrap_or_else(|| UserProfile::default_for(params.user_id));

        let history = self.list_repository.get_history(&params.user_id).await?;
        let lifetime_spent = lifetime_spent(&history);

        self.logger
            .debug(&format!("Profile fetched for user {}", params.user_id));

        Ok(ProfileOverview {
            profile,
            lifetime_spent,
        })
    }
}
