use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct LogoutParams {
    pub access_token: String,
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, params: LogoutParams) -> Result<(), AuthError>;
}
