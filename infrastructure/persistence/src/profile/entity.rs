use sqlx::FromRow;
use uuid::Uuid;

use business::domain::profile::model::UserProfile;
use business::domain::profile::value_objects::ThemePreference;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub theme: String,
}

impl ProfileEntity {
    pub fn into_domain(self) -> UserProfile {
        UserProfile::from_repository(
            UserId::new(self.id),
            self.name,
            self.email,
            self.theme.parse::<ThemePreference>().unwrap_or_default(),
        )
    }
}
