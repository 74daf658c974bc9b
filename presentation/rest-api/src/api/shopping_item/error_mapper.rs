use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.name_empty",
            ),
            ShoppingItemError::QuantityNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.quantity_not_positive",
            ),
            ShoppingItemError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.price_negative",
            ),
            ShoppingItemError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "shopping_item.not_found")
            }
            ShoppingItemError::CurrentListMissing => (
                StatusCode::CONFLICT,
                "Conflict",
                "shopping_list.current_missing",
            ),
            ShoppingItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
