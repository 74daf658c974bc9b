use poem_openapi::Object;

use business::domain::auth::model::Session;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Full name for the new profile
    pub name: String,
    pub email: String,
    pub password: String,
    /// Must match `password` exactly
    pub confirm_password: String,
}

#[derive(Debug, Clone, Object)]
pub struct RegisterNotice {
    /// Verification-pending notice; registration never opens a session.
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires
    pub expires_in: u64,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
        }
    }
}
