use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct AddShoppingItemParams {
    pub user_id: UserId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

#[async_trait]
pub trait AddShoppingItemUseCase: Send + Sync {
    async fn execute(&self, params: AddShoppingItemParams)
    -> Result<ShoppingItem, ShoppingItemError>;
}
