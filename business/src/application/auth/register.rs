use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::{AuthGateway, SignUpRequest};
use crate::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};
use crate::domain::logger::Logger;

pub struct RegisterUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<(), AuthError> {
        // Both checks run before the identity service is touched.
        if params.name.trim().is_empty()
            || params.email.trim().is_empty()
            || params.password.is_empty()
            || params.confirm_password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        if params.password != params.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        self.gateway
            .sign_up(SignUpRequest {
                name: params.name,
                email: params.email.clone(),
                password: params.password,
            })
            .await?;

        self.logger
            .info(&format!("Sign-up submitted for {}", params.email));
        Ok(())
    }
}
