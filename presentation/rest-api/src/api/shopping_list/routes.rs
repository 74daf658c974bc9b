use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shopping_list::use_cases::delete_record::{
    DeleteHistoryRecordParams, DeleteHistoryRecordUseCase,
};
use business::domain::shopping_list::use_cases::finalize::{
    FinalizeListParams, FinalizeListUseCase,
};
use business::domain::shopping_list::use_cases::get_current::{
    GetCurrentListParams, GetCurrentListUseCase,
};
use business::domain::shopping_list::use_cases::get_history::{
    GetHistoryParams, GetHistoryUseCase,
};
use business::domain::shopping_list::use_cases::resume::{ResumeListParams, ResumeListUseCase};
use business::domain::shopping_list::use_cases::save_draft::{SaveDraftParams, SaveDraftUseCase};
use business::domain::shopping_list::use_cases::update_balance::{
    UpdateBalanceParams, UpdateBalanceUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::shopping_list::dto::{
    CurrentListResponse, HistoryRecordResponse, ResumeListRequest, SealListRequest,
    SealedListResponse, UpdateBalanceRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    get_current_use_case: Arc<dyn GetCurrentListUseCase>,
    update_balance_use_case: Arc<dyn UpdateBalanceUseCase>,
    finalize_use_case: Arc<dyn FinalizeListUseCase>,
    save_draft_use_case: Arc<dyn SaveDraftUseCase>,
    get_history_use_case: Arc<dyn GetHistoryUseCase>,
    resume_use_case: Arc<dyn ResumeListUseCase>,
    delete_record_use_case: Arc<dyn DeleteHistoryRecordUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        get_current_use_case: Arc<dyn GetCurrentListUseCase>,
        update_balance_use_case: Arc<dyn UpdateBalanceUseCase>,
        finalize_use_case: Arc<dyn FinalizeListUseCase>,
        save_draft_use_case: Arc<dyn SaveDraftUseCase>,
        get_history_use_case: Arc<dyn GetHistoryUseCase>,
        resume_use_case: Arc<dyn ResumeListUseCase>,
        delete_record_use_case: Arc<dyn DeleteHistoryRecordUseCase>,
    ) -> Self {
        Self {
            get_current_use_case,
            update_balance_use_case,
            finalize_use_case,
            save_draft_use_case,
            get_history_use_case,
            resume_use_case,
            delete_record_use_case,
        }
    }
}

/// Shopping list lifecycle API
///
/// The current list with its budget summary, the finalize/draft
/// transitions, and the purchase history.
#[OpenApi]
impl ShoppingListApi {
    /// Get the current list
    ///
    /// Returns the caller's current list with its items and computed
    /// summary. Creates the list on first access.
    #[oai(
        path = "/lists/current",
        method = "get",
        tag = "ApiTags::CurrentList"
    )]
    async fn get_current(&self, auth: SessionBearer) -> GetCurrentResponse {
        match self
            .get_current_use_case
            .execute(GetCurrentListParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(snapshot) => GetCurrentResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCurrentResponse::InternalError(json)
            }
        }
    }

    /// Set the available balance
    ///
    /// Updates the budget declared for the current purchase.
    #[oai(
        path = "/lists/current/balance",
        method = "put",
        tag = "ApiTags::CurrentList"
    )]
    async fn update_balance(
        &self,
        auth: SessionBearer,
        body: Json<UpdateBalanceRequest>,
    ) -> UpdateBalanceResponse {
        let balance = match BigDecimal::from_str(&body.0.balance) {
            Ok(balance) => balance,
            Err(_) => {
                return UpdateBalanceResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_list.invalid_balance".to_string(),
                }));
            }
        };

        match self
            .update_balance_use_case
            .execute(UpdateBalanceParams {
                user_id: auth.0.user_id,
                balance,
            })
            .await
        {
            Ok(list) => UpdateBalanceResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateBalanceResponse::BadRequest(json),
                    409 => UpdateBalanceResponse::Conflict(json),
                    _ => UpdateBalanceResponse::InternalError(json),
                }
            }
        }
    }

    /// Finalize the current list
    ///
    /// Seals the current list as a concluded purchase under the given name
    /// and replaces it with a fresh empty list. Refused unless every item
    /// has a price and a balance was declared.
    #[oai(
        path = "/lists/current/finalize",
        method = "post",
        tag = "ApiTags::CurrentList"
    )]
    async fn finalize(&self, auth: SessionBearer, body: Json<SealListRequest>) -> SealResponse {
        match self
            .finalize_use_case
            .execute(FinalizeListParams {
                user_id: auth.0.user_id,
                name: body.0.name,
            })
            .await
        {
            Ok(sealed) => SealResponse::Ok(Json(SealedListResponse {
                record: sealed.record.into(),
                current: sealed.new_current.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SealResponse::BadRequest(json),
                    409 => SealResponse::Conflict(json),
                    _ => SealResponse::InternalError(json),
                }
            }
        }
    }

    /// Park the current list as a draft
    ///
    /// Seals the current list as pending, to be resumed later. Only
    /// requires a non-empty item collection.
    #[oai(
        path = "/lists/current/draft",
        method = "post",
        tag = "ApiTags::CurrentList"
    )]
    async fn save_draft(&self, auth: SessionBearer, body: Json<SealListRequest>) -> SealResponse {
        match self
            .save_draft_use_case
            .execute(SaveDraftParams {
                user_id: auth.0.user_id,
                name: body.0.name,
            })
            .await
        {
            Ok(sealed) => SealResponse::Ok(Json(SealedListResponse {
                record: sealed.record.into(),
                current: sealed.new_current.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SealResponse::BadRequest(json),
                    409 => SealResponse::Conflict(json),
                    _ => SealResponse::InternalError(json),
                }
            }
        }
    }

    /// List the purchase history
    ///
    /// Every parked or concluded list with its items, most recent first.
    #[oai(path = "/lists/history", method = "get", tag = "ApiTags::History")]
    async fn get_history(&self, auth: SessionBearer) -> GetHistoryResponse {
        match self
            .get_history_use_case
            .execute(GetHistoryParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(records) => {
                let responses: Vec<HistoryRecordResponse> =
                    records.into_iter().map(|r| r.into()).collect();
                GetHistoryResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetHistoryResponse::InternalError(json)
            }
        }
    }

    /// Resume a pending list
    ///
    /// Replaces the current list's content with the pending record and
    /// deletes the record. When the current list still has items the
    /// request must confirm discarding them.
    #[oai(
        path = "/lists/history/:id/resume",
        method = "post",
        tag = "ApiTags::History"
    )]
    async fn resume(
        &self,
        auth: SessionBearer,
        id: Path<String>,
        body: Json<ResumeListRequest>,
    ) -> ResumeResponse {
        let record_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return ResumeResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_list.invalid_id".to_string(),
                }));
            }
        };

        match self
            .resume_use_case
            .execute(ResumeListParams {
                user_id: auth.0.user_id,
                record_id,
                confirm_replace: body.0.confirm,
            })
            .await
        {
            Ok(snapshot) => ResumeResponse::Ok(Json(snapshot.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ResumeResponse::NotFound(json),
                    409 => ResumeResponse::Conflict(json),
                    _ => ResumeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a history record
    ///
    /// Permanently removes the record and its items. Irreversible.
    #[oai(
        path = "/lists/history/:id",
        method = "delete",
        tag = "ApiTags::History"
    )]
    async fn delete_record(&self, auth: SessionBearer, id: Path<String>) -> DeleteRecordResponse {
        let record_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteRecordResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_list.invalid_id".to_string(),
                }));
            }
        };

        match self
            .delete_record_use_case
            .execute(DeleteHistoryRecordParams {
                user_id: auth.0.user_id,
                record_id,
            })
            .await
        {
            Ok(()) => DeleteRecordResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteRecordResponse::NotFound(json),
                    409 => DeleteRecordResponse::Conflict(json),
                    _ => DeleteRecordResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCurrentResponse {
    #[oai(status = 200)]
    Ok(Json<CurrentListResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateBalanceResponse {
    #[oai(status = 200)]
    Ok(Json<CurrentListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SealResponse {
    #[oai(status = 200)]
    Ok(Json<SealedListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<HistoryRecordResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResumeResponse {
    #[oai(status = 200)]
    Ok(Json<CurrentListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecordResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
