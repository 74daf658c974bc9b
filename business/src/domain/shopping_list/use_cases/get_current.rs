use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListWithItems;

pub struct GetCurrentListParams {
    pub user_id: UserId,
}

/// Fetches the current list with its items, creating the singleton on first
/// access.
#[async_trait]
pub trait GetCurrentListUseCase: Send + Sync {
    async fn execute(&self, params: GetCurrentListParams)
    -> Result<ListWithItems, ShoppingListError>;
}
