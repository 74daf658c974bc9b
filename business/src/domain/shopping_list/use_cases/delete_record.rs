use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteHistoryRecordParams {
    pub user_id: UserId,
    pub record_id: Uuid,
}

#[async_trait]
pub trait DeleteHistoryRecordUseCase: Send + Sync {
    async fn execute(&self, params: DeleteHistoryRecordParams) -> Result<(), ShoppingListError>;
}
