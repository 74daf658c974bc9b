use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListWithItems;

pub struct GetHistoryParams {
    pub user_id: UserId,
}

/// Fetches every parked or concluded list with its items, most recent first.
#[async_trait]
pub trait GetHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetHistoryParams,
    ) -> Result<Vec<ListWithItems>, ShoppingListError>;
}
