use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListWithItems;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_history::{GetHistoryParams, GetHistoryUseCase};

pub struct GetHistoryUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetHistoryUseCase for GetHistoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetHistoryParams,
    ) -> Result<Vec<ListWithItems>, ShoppingListError> {
        let lists = self.list_repository.get_history(&params.user_id).await?;
        self.logger.debug(&format!(
            "Fetched {} history records for user {}",
            lists.len(),
            params.user_id
        ));

        let mut records = Vec::with_capacity(lists.len());
        for list in lists {
            let items = self.item_repository.get_for_list(list.id).await?;
            records.push(ListWithItems { list, items });
        }
        Ok(records)
    }
}
