use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shopping_item::use_cases::add::{
    AddShoppingItemParams, AddShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::remove::{
    RemoveShoppingItemParams, RemoveShoppingItemUseCase,
};
use business::domain::shopping_item::use_cases::update::{
    UpdateShoppingItemParams, UpdateShoppingItemUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::shopping_item::dto::{ShoppingItemRequest, ShoppingItemResponse};
use crate::api::tags::ApiTags;

pub struct ShoppingItemApi {
    add_use_case: Arc<dyn AddShoppingItemUseCase>,
    update_use_case: Arc<dyn UpdateShoppingItemUseCase>,
    remove_use_case: Arc<dyn RemoveShoppingItemUseCase>,
}

impl ShoppingItemApi {
    pub fn new(
        add_use_case: Arc<dyn AddShoppingItemUseCase>,
        update_use_case: Arc<dyn UpdateShoppingItemUseCase>,
        remove_use_case: Arc<dyn RemoveShoppingItemUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            update_use_case,
            remove_use_case,
        }
    }
}

/// Current list item API
///
/// Endpoints for the items of the caller's current shopping list. Every
/// mutation rewrites the list's whole item set in the store.
#[OpenApi]
impl ShoppingItemApi {
    /// Add an item to the current list
    #[oai(
        path = "/lists/current/items",
        method = "post",
        tag = "ApiTags::CurrentList"
    )]
    async fn add(&self, auth: SessionBearer, body: Json<ShoppingItemRequest>) -> AddItemResponse {
        let unit_price = match BigDecimal::from_str(&body.0.unit_price) {
            Ok(price) => price,
            Err(_) => {
                return AddItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_item.invalid_price".to_string(),
                }));
            }
        };

        let params = AddShoppingItemParams {
            user_id: auth.0.user_id,
            name: body.0.name,
            quantity: body.0.quantity,
            unit_price,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => AddItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    409 => AddItemResponse::Conflict(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Edit an item on the current list
    ///
    /// The item keeps its identifier and its position in the collection.
    #[oai(
        path = "/lists/current/items/:id",
        method = "put",
        tag = "ApiTags::CurrentList"
    )]
    async fn update(
        &self,
        auth: SessionBearer,
        id: Path<String>,
        body: Json<ShoppingItemRequest>,
    ) -> UpdateItemResponse {
        let item_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_item.invalid_id".to_string(),
                }));
            }
        };
        let unit_price = match BigDecimal::from_str(&body.0.unit_price) {
            Ok(price) => price,
            Err(_) => {
                return UpdateItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_item.invalid_price".to_string(),
                }));
            }
        };

        let params = UpdateShoppingItemParams {
            user_id: auth.0.user_id,
            id: item_id,
            name: body.0.name,
            quantity: body.0.quantity,
            unit_price,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    409 => UpdateItemResponse::Conflict(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from the current list
    #[oai(
        path = "/lists/current/items/:id",
        method = "delete",
        tag = "ApiTags::CurrentList"
    )]
    async fn remove(&self, auth: SessionBearer, id: Path<String>) -> RemoveItemResponse {
        let item_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveItemResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "shopping_item.invalid_id".to_string(),
                }));
            }
        };

        match self
            .remove_use_case
            .execute(RemoveShoppingItemParams {
                user_id: auth.0.user_id,
                id: item_id,
            })
            .await
        {
            Ok(()) => RemoveItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveItemResponse::NotFound(json),
                    409 => RemoveItemResponse::Conflict(json),
                    _ => RemoveItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
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
pub enum RemoveItemResponse {
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
