use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.name_empty",
            ),
            ShoppingListError::NegativeBalance => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_list.negative_balance",
            ),
            ShoppingListError::Empty => {
                (StatusCode::CONFLICT, "GuardFailure", "shopping_list.empty")
            }
            ShoppingListError::ItemsWithoutPrice => (
                StatusCode::CONFLICT,
                "GuardFailure",
                "shopping_list.items_without_price",
            ),
            ShoppingListError::BalanceNotSet => (
                StatusCode::CONFLICT,
                "GuardFailure",
                "shopping_list.balance_not_set",
            ),
            ShoppingListError::NotResumable => (
                StatusCode::CONFLICT,
                "GuardFailure",
                "shopping_list.not_resumable",
            ),
            ShoppingListError::CurrentNotEmpty => (
                StatusCode::CONFLICT,
                "ConfirmationRequired",
                "shopping_list.current_not_empty",
            ),
            ShoppingListError::CannotDeleteCurrent => (
                StatusCode::CONFLICT,
                "GuardFailure",
                "shopping_list.cannot_delete_current",
            ),
            ShoppingListError::CurrentListMissing => (
                StatusCode::CONFLICT,
                "Conflict",
                "shopping_list.current_missing",
            ),
            ShoppingListError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "shopping_list.not_found")
            }
            ShoppingListError::Repository(_) => (
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
