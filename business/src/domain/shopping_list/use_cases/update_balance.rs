use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct UpdateBalanceParams {
    pub user_id: UserId,
    pub balance: BigDecimal,
}

#[async_trait]
pub trait UpdateBalanceUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBalanceParams)
    -> Result<ShoppingList, ShoppingListError>;
}
