use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::auth_config::AuthConfig;

/// Audience the identity service stamps on every session token.
const SESSION_AUDIENCE: &str = "authenticated";

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct SessionClaims {
    sub: String,
    aud: String,
    exp: u64,
}

/// The verified caller: session presence is the single source of truth for
/// the authenticated/unauthenticated split.
#[derive(Debug, Clone)]
pub struct SessionPrincipal {
    pub user_id: UserId,
    pub access_token: String,
}

fn extract_user_id(token: &str, secret: &str) -> Result<UserId, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[SESSION_AUDIENCE]);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    token_data
        .claims
        .sub
        .parse::<UserId>()
        .map_err(|e| format!("auth.invalid_subject: {e}"))
}

/// Session Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "session_bearer_checker")]
pub struct SessionBearer(pub SessionPrincipal);

async fn session_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<SessionPrincipal> {
    let config = AuthConfig::from_env();

    match extract_user_id(&bearer.token, &config.jwt_secret) {
        Ok(user_id) => Some(SessionPrincipal {
            user_id,
            access_token: bearer.token,
        }),
        Err(e) => {
            tracing::warn!("Session auth failed: {e}");
            None
        }
    }
}
