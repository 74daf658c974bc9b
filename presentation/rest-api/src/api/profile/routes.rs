use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::profile::use_cases::get::{GetProfileParams, GetProfileUseCase};
use business::domain::profile::use_cases::set_theme::{SetThemeParams, SetThemeUseCase};
use business::domain::profile::use_cases::update_name::{
    UpdateProfileNameParams, UpdateProfileNameUseCase,
};
use business::domain::profile::value_objects::ThemePreference;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::profile::dto::{
    ProfileFieldsResponse, ProfileResponse, UpdateProfileNameRequest, UpdateThemeRequest,
};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct ProfileApi {
    get_use_case: Arc<dyn GetProfileUseCase>,
    update_name_use_case: Arc<dyn UpdateProfileNameUseCase>,
    set_theme_use_case: Arc<dyn SetThemeUseCase>,
}

impl ProfileApi {
    pub fn new(
        get_use_case: Arc<dyn GetProfileUseCase>,
        update_name_use_case: Arc<dyn UpdateProfileNameUseCase>,
        set_theme_use_case: Arc<dyn SetThemeUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_name_use_case,
            set_theme_use_case,
        }
    }
}

/// User profile API
///
/// Display name, mirrored email, theme preference, and the aggregate
/// lifetime spend.
#[OpenApi]
impl ProfileApi {
    /// Get the profile
    #[oai(path = "/profile", method = "get", tag = "ApiTags::Profile")]
    async fn get(&self, auth: SessionBearer) -> GetProfileResponse {
        match self
            .get_use_case
            .execute(GetProfileParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(overview) => GetProfileResponse::Ok(Json(overview.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProfileResponse::InternalError(json)
            }
        }
    }

    /// Update the display name
    ///
    /// The email cannot be changed here; it mirrors the identity service.
    #[oai(path = "/profile", method = "put", tag = "ApiTags::Profile")]
    async fn update_name(
        &self,
        auth: SessionBearer,
        body: Json<UpdateProfileNameRequest>,
    ) -> UpdateProfileResponse {
        match self
            .update_name_use_case
            .execute(UpdateProfileNameParams {
                user_id: auth.0.user_id,
                name: body.0.name,
            })
            .await
        {
            Ok(profile) => UpdateProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateProfileResponse::InternalError(json)
            }
        }
    }

    /// Set the theme preference
    #[oai(path = "/profile/theme", method = "put", tag = "ApiTags::Profile")]
    async fn set_theme(
        &self,
        auth: SessionBearer,
        body: Json<UpdateThemeRequest>,
    ) -> UpdateProfileResponse {
        let theme = match body.0.theme.parse::<ThemePreference>() {
            Ok(theme) => theme,
            Err(_) => {
                return UpdateProfileResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "profile.invalid_theme".to_string(),
                }));
            }
        };

        match self
            .set_theme_use_case
            .execute(SetThemeParams {
                user_id: auth.0.user_id,
                theme,
            })
            .await
        {
            Ok(profile) => UpdateProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateProfileResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileFieldsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
