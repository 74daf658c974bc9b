use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ListWithItems, ShoppingList};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::services::total_expense;
use crate::domain::shopping_list::use_cases::finalize::SealedList;
use crate::domain::shopping_list::use_cases::save_draft::{SaveDraftParams, SaveDraftUseCase};
use crate::domain::shopping_list::value_objects::ListStatus;

/// Parks the current list into history as `Pending`. Unlike finalize there
/// is no price or balance requirement: an unfinished list is saved as-is.
pub struct SaveDraftUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveDraftUseCase for SaveDraftUseCaseImpl {
    async fn execute(&self, params: SaveDraftParams) -> Result<SealedList, ShoppingListError> {
        let current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingListError::CurrentListMissing)?;
        let items = self.item_repository.get_for_list(current.id).await?;

        if items.is_empty() {
            return Err(ShoppingListError::Empty);
        }

        let total = total_expense(&items);
        let record = current.sealed(params.name, Utc::now(), total, ListStatus::Pending)?;
        self.list_repository.seal(&record).await?;

        let new_current = ShoppingList::new_current(params.user_id);
        self.list_repository.insert(&new_current).await?;

        self.logger.info(&format!(
            "List parked as pending: {} ({})",
            record.name, record.id
        ));

        Ok(SealedList {
            record: ListWithItems {
                list: record,
                items,
            },
            new_current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_item::model::ShoppingItem;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ListRepo {
            async fn find_current(&self, user_id: &UserId) -> Result<Option<ShoppingList>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingList, RepositoryError>;
            async fn get_history(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn insert(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
            async fn seal(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
            async fn update_balance(&self, id: Uuid, balance: &BigDecimal) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ShoppingItemRepository for ItemRepo {
            async fn get_for_list(&self, list_id: Uuid) -> Result<Vec<ShoppingItem>, RepositoryError>;
            async fn replace_for_list(&self, list_id: Uuid, items: &[ShoppingItem]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_park_unpriced_items_with_zero_balance() {
        let user_id = UserId::new(Uuid::new_v4());
        let current = ShoppingList::new_current(user_id);
        let list_id = current.id;
        // No prices, no balance: still parkable.
        let items = vec![
            ShoppingItem::new(list_id, "Arroz".to_string(), 1, BigDecimal::from_str("0").unwrap())
                .unwrap(),
        ];

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));
        mock_lists
            .expect_seal()
            .withf(move |record| record.id == list_id && record.status == ListStatus::Pending)
            .returning(|_| Ok(()));
        mock_lists
            .expect_insert()
            .withf(|list| list.status == ListStatus::Current)
            .returning(|_| Ok(()));

        let items_clone = items.clone();
        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(items_clone.clone()));

        let use_case = SaveDraftUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let sealed = use_case
            .execute(SaveDraftParams {
                user_id,
                name: "Churrasco".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(sealed.record.list.status, ListStatus::Pending);
        assert!(sealed.new_current.is_current());
    }

    #[tokio::test]
    async fn should_refuse_when_list_empty() {
        let user_id = UserId::new(Uuid::new_v4());
        let current = ShoppingList::new_current(user_id);

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));

        let mut mock_items = MockItemRepo::new();
        mock_items.expect_get_for_list().returning(|_| Ok(vec![]));

        let use_case = SaveDraftUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SaveDraftParams {
                user_id,
                name: "Churrasco".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Empty));
    }
}
