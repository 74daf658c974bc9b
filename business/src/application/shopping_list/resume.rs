use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListWithItems;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::resume::{ResumeListParams, ResumeListUseCase};

/// Brings a pending record back as the content of the current list and
/// deletes the record: resuming consumes it, it never duplicates it.
pub struct ResumeListUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResumeListUseCase for ResumeListUseCaseImpl {
    async fn execute(&self, params: ResumeListParams) -> Result<ListWithItems, ShoppingListError> {
        let record = self
            .list_repository
            .get_by_id(params.record_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;
        if !record.is_pending() {
            return Err(ShoppingListError::NotResumable);
        }

        let mut current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingListError::CurrentListMissing)?;

        let current_items = self.item_repository.get_for_list(current.id).await?;
        if !current_items.is_empty() && !params.confirm_replace {
            // Destructive replace; the caller has to confirm discarding.
            return Err(ShoppingListError::CurrentNotEmpty);
        }

        let record_items = self.item_repository.get_for_list(record.id).await?;
        let moved: Vec<ShoppingItem> = record_items
            .into_iter()
            .map(|item| item.reparented(current.id))
            .collect();

        self.item_repository
            .replace_for_list(current.id, &moved)
            .await?;
        self.list_repository
            .update_balance(current.id, &record.balance)
            .await?;
        self.list_repository.delete(record.id).await?;

        self.logger.info(&format!(
            "Pending list resumed and consumed: {} ({})",
            record.name, record.id
        ));

        current.balance = record.balance.clone();
        Ok(ListWithItems {
            list: current,
            items: moved,
        })
    }
}
