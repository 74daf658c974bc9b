use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::{BigDecimal, Zero};

use crate::domain::logger::Logger;
use crate::domain::shared::format::format_brl;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::update_balance::{
    UpdateBalanceParams, UpdateBalanceUseCase,
};

pub struct UpdateBalanceUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateBalanceUseCase for UpdateBalanceUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateBalanceParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        if params.balance < BigDecimal::zero() {
            return Err(ShoppingListError::NegativeBalance);
        }

        let mut current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingListError::CurrentListMissing)?;

        self.list_repository
            .update_balance(current.id, &params.balance)
            .await?;

        self.logger.info(&format!(
            "Balance updated on list {}: {}",
            current.id,
            format_brl(&params.balance)
        ));

        current.balance = params.balance;
        Ok(current)
    }
}
