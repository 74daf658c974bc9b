use poem_openapi::Object;

use business::domain::profile::model::UserProfile;
use business::domain::profile::use_cases::get::ProfileOverview;

#[derive(Debug, Clone, Object)]
pub struct ProfileResponse {
    pub name: String,
    /// Mirrors the identity service; not editable through this API
    pub email: String,
    /// `light` or `dark`
    pub theme: String,
    /// Σ total over every history record
    pub lifetime_spent: String,
}

impl From<ProfileOverview> for ProfileResponse {
    fn from(overview: ProfileOverview) -> Self {
        Self {
            name: overview.profile.name,
            email: overview.profile.email,
            theme: overview.profile.theme.to_string(),
            lifetime_spent: overview.lifetime_spent.with_scale(2).to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProfileNameRequest {
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateThemeRequest {
    /// `light` or `dark`
    pub theme: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProfileFieldsResponse {
    pub name: String,
    pub email: String,
    pub theme: String,
}

impl From<UserProfile> for ProfileFieldsResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            theme: profile.theme.to_string(),
        }
    }
}
