use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::model::Session;
use crate::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use crate::domain::logger::Logger;

pub struct LoginUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<Session, AuthError> {
        if params.email.trim().is_empty() || params.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let session = self
            .gateway
            .sign_in(&params.email, &params.password)
            .await?;

        self.logger
            .info(&format!("Session opened for {}", params.email));
        Ok(session)
    }
}
