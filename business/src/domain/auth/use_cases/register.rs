use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Registers a new account. Success means a confirmation email is on its
/// way; it never authenticates the caller.
#[async_trait]
pub trait RegisterUseCase: Send + Sync {
    async fn execute(&self, params: RegisterParams) -> Result<(), AuthError>;
}
