use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::use_cases::logout::{LogoutParams, LogoutUseCase};
use crate::domain::logger::Logger;

pub struct LogoutUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self, params: LogoutParams) -> Result<(), AuthError> {
        self.gateway.sign_out(&params.access_token).await?;
        self.logger.info("Session closed");
        Ok(())
    }
}
