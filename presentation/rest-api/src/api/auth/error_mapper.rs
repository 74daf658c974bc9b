use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Localized message for the one mapped failure; everything the identity
/// service says beyond bad credentials passes through verbatim.
const INVALID_CREDENTIALS_MESSAGE: &str = "E-mail ou senha incorretos.";

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            AuthError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "auth.missing_fields".to_string(),
            ),
            AuthError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "auth.password_mismatch".to_string(),
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "InvalidCredentials",
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ),
            AuthError::Gateway(message) => (StatusCode::BAD_GATEWAY, "AuthGateway", message),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
