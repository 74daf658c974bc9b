use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::auth::errors::AuthError;
use business::domain::auth::gateway::{AuthGateway, SignUpRequest};
use business::domain::auth::model::Session;

use crate::client::IdentityClient;

/// The identity service's wording for a failed password grant.
const INVALID_LOGIN_MESSAGE: &str = "Invalid login credentials";
const INVALID_GRANT_CODE: &str = "invalid_grant";

#[derive(Debug, Deserialize)]
struct SessionBody {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn description(&self) -> String {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.message.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "auth.unknown_error".to_string())
    }
}

/// Maps the token endpoint's generic bad-credentials failure onto its own
/// variant; every other message passes through verbatim.
fn classify_sign_in_error(body: &ErrorBody) -> AuthError {
    let description = body.description();
    if body.error.as_deref() == Some(INVALID_GRANT_CODE)
        || description.contains(INVALID_LOGIN_MESSAGE)
    {
        AuthError::InvalidCredentials
    } else {
        AuthError::Gateway(description)
    }
}

pub struct IdentityAuthGateway {
    client: IdentityClient,
}

impl IdentityAuthGateway {
    pub fn new(client: IdentityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for IdentityAuthGateway {
    async fn sign_up(&self, request: SignUpRequest) -> Result<(), AuthError> {
        let response = self
            .client
            .client
            .post(self.client.signup_url())
            .header("apikey", &self.client.api_key)
            .json(&json!({
                "email": request.email,
                "password": request.password,
                "data": { "name": request.name },
            }))
            .send()
            .await
            .map_err(|e| AuthError::Gateway(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(AuthError::Gateway(body.description()))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .client
            .post(self.client.token_password_url())
            .header("apikey", &self.client.api_key)
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(|e| AuthError::Gateway(e.to_string()))?;

        if !response.status().is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(classify_sign_in_error(&body));
        }

        let body: SessionBody = response
            .json()
            .await
            .map_err(|e| AuthError::Gateway(e.to_string()))?;

        Ok(Session {
            access_token: body.access_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .client
            .post(self.client.logout_url())
            .header("apikey", &self.client.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Gateway(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(AuthError::Gateway(body.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_grant_to_invalid_credentials() {
        let body = ErrorBody {
            error: Some("invalid_grant".to_string()),
            error_description: Some("Invalid login credentials".to_string()),
            msg: None,
            message: None,
        };

        assert!(matches!(
            classify_sign_in_error(&body),
            AuthError::InvalidCredentials
        ));
    }

    #[test]
    fn should_map_invalid_login_message_without_error_code() {
        let body = ErrorBody {
            error: None,
            error_description: None,
            msg: Some("Invalid login credentials".to_string()),
            message: None,
        };

        assert!(matches!(
            classify_sign_in_error(&body),
            AuthError::InvalidCredentials
        ));
    }

    #[test]
    fn should_pass_other_messages_through_verbatim() {
        let body = ErrorBody {
            error: Some("over_request_rate_limit".to_string()),
            error_description: Some("Too many requests".to_string()),
            msg: None,
            message: None,
        };

        match classify_sign_in_error(&body) {
            AuthError::Gateway(message) => assert_eq!(message, "Too many requests"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn should_fall_back_to_code_when_no_message() {
        let body = ErrorBody {
            error: None,
            error_description: None,
            msg: None,
            message: None,
        };

        assert_eq!(body.description(), "auth.unknown_error");
    }
}
