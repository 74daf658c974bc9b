use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct UpdateShoppingItemParams {
    pub user_id: UserId,
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

#[async_trait]
pub trait UpdateShoppingItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError>;
}
