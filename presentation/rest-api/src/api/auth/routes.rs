use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::auth::use_cases::logout::{LogoutParams, LogoutUseCase};
use business::domain::auth::use_cases::register::{RegisterParams, RegisterUseCase};

use crate::api::auth::dto::{LoginRequest, RegisterNotice, RegisterRequest, SessionResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

const REGISTER_NOTICE: &str = "Cadastro realizado! Verifique seu e-mail para confirmar a conta.";

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            logout_use_case,
        }
    }
}

/// Authentication API
///
/// Email+password registration and session handling against the external
/// identity service.
#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// Creates the account at the identity service. The account requires
    /// out-of-band email confirmation before it can sign in.
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterParams {
            name: body.0.name,
            email: body.0.email,
            password: body.0.password,
            confirm_password: body.0.confirm_password,
        };

        match self.register_use_case.execute(params).await {
            Ok(()) => RegisterResponse::Created(Json(RegisterNotice {
                message: REGISTER_NOTICE.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::BadGateway(json),
                }
            }
        }
    }

    /// Sign in with email and password
    ///
    /// Returns the session token pair on success.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => LoginResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginResponse::BadRequest(json),
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::BadGateway(json),
                }
            }
        }
    }

    /// Sign out
    ///
    /// Revokes the presented session at the identity service.
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self, auth: SessionBearer) -> LogoutResponse {
        match self
            .logout_use_case
            .execute(LogoutParams {
                access_token: auth.0.access_token,
            })
            .await
        {
            Ok(()) => LogoutResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                LogoutResponse::BadGateway(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<RegisterNotice>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LogoutResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
