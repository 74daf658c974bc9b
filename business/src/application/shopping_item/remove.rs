use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::remove::{
    RemoveShoppingItemParams, RemoveShoppingItemUseCase,
};
use crate::domain::shopping_list::repository::ShoppingListRepository;

pub struct RemoveShoppingItemUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveShoppingItemUseCase for RemoveShoppingItemUseCaseImpl {
    async fn execute(&self, params: RemoveShoppingItemParams) -> Result<(), ShoppingItemError> {
        self.logger
            .info(&format!("Removing item from current list: {}", params.id));

        let current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingItemError::CurrentListMissing)?;

        let items = self.item_repository.get_for_list(current.id).await?;
        let before = items.len();
        let remaining: Vec<_> = items
            .into_iter()
            .filter(|item| item.id != params.id)
            .collect();
        if remaining.len() == before {
            return Err(ShoppingItemError::NotFound);
        }

        self.item_repository
            .replace_for_list(current.id, &remaining)
            .await?;

        self.logger.info(&format!("Item removed: {}", params.id));
        Ok(())
    }
}
