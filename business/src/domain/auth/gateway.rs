use async_trait::async_trait;

use super::errors::AuthError;
use super::model::Session;

pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Port to the external identity service (email+password, session-based).
///
/// Sign-up never returns a session: the account stays unusable until the
/// out-of-band email confirmation completes.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_up(&self, request: SignUpRequest) -> Result<(), AuthError>;
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}
