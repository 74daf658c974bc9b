use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::errors::ShoppingItemError;

pub struct RemoveShoppingItemParams {
    pub user_id: UserId,
    pub id: Uuid,
}

#[async_trait]
pub trait RemoveShoppingItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveShoppingItemParams) -> Result<(), ShoppingItemError>;
}
