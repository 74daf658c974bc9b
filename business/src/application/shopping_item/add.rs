use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::add::{AddShoppingItemParams, AddShoppingItemUseCase};
use crate::domain::shopping_list::repository::ShoppingListRepository;

pub struct AddShoppingItemUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddShoppingItemUseCase for AddShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Adding item to current list: {}", params.name));

        let current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingItemError::CurrentListMissing)?;

        let item = ShoppingItem::new(current.id, params.name, params.quantity, params.unit_price)?;

        let mut items = self.item_repository.get_for_list(current.id).await?;
        items.push(item.clone());
        self.item_repository
            .replace_for_list(current.id, &items)
            .await?;

        self.logger.info(&format!("Item added: {}", item.id));
        Ok(item)
    }
}
