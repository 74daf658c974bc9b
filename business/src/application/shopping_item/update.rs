use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::update::{
    UpdateShoppingItemParams, UpdateShoppingItemUseCase,
};
use crate::domain::shopping_list::repository::ShoppingListRepository;

pub struct UpdateShoppingItemUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingItemUseCase for UpdateShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Updating item on current list: {}", params.id));

        let current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingItemError::CurrentListMissing)?;

        let mut items = self.item_repository.get_for_list(current.id).await?;
        let position = items
            .iter()
            .position(|item| item.id == params.id)
            .ok_or(ShoppingItemError::NotFound)?;

        let updated = items[position].edited(params.name, params.quantity, params.unit_price)?;
        items[position] = updated.clone();

        self.item_repository
            .replace_for_list(current.id, &items)
            .await?;

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}
