use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::shared::format::format_brl;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ListWithItems, ShoppingList};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::services::total_expense;
use crate::domain::shopping_list::use_cases::finalize::{
    FinalizeListParams, FinalizeListUseCase, SealedList,
};
use crate::domain::shopping_list::value_objects::ListStatus;

pub struct FinalizeListUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FinalizeListUseCase for FinalizeListUseCaseImpl {
    async fn execute(&self, params: FinalizeListParams) -> Result<SealedList, ShoppingListError> {
        let current = self
            .list_repository
            .find_current(&params.user_id)
            .await?
            .ok_or(ShoppingListError::CurrentListMissing)?;
        let items = self.item_repository.get_for_list(current.id).await?;

        // Guards, all checked before any write.
        if items.is_empty() {
            return Err(ShoppingListError::Empty);
        }
        if !items.iter().all(|item| item.unit_price > BigDecimal::zero()) {
            return Err(ShoppingListError::ItemsWithoutPrice);
        }
        if current.balance <= BigDecimal::zero() {
            return Err(ShoppingListError::BalanceNotSet);
        }

        let total = total_expense(&items);
        let record = current.sealed(params.name, Utc::now(), total, ListStatus::Concluded)?;
        self.list_repository.seal(&record).await?;

        let new_current = ShoppingList::new_current(params.user_id);
        self.list_repository.insert(&new_current).await?;

        self.logger.info(&format!(
            "List concluded: {} ({}, {})",
            record.name,
            record.id,
            format_brl(&record.total)
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

    fn test_user_id() -> UserId {
        UserId::new(Uuid::new_v4())
    }

    fn price(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    fn current_with_balance(user_id: UserId, balance: &str) -> ShoppingList {
        let mut list = ShoppingList::new_current(user_id);
        list.balance = price(balance);
        list
    }

    fn item(list_id: Uuid, quantity: u32, unit_price: &str) -> ShoppingItem {
        ShoppingItem::new(list_id, "Leite".to_string(), quantity, price(unit_price)).unwrap()
    }

    #[tokio::test]
    async fn should_seal_as_concluded_and_replace_with_fresh_current() {
        let user_id = test_user_id();
        let current = current_with_balance(user_id, "10");
        let list_id = current.id;
        let items = vec![item(list_id, 2, "3.50")];

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));
        mock_lists
            .expect_seal()
            .withf(move |record| {
                record.id == list_id
                    && record.status == ListStatus::Concluded
                    && record.name == "Groceries"
                    && record.total == BigDecimal::from_str("7.00").unwrap()
            })
            .returning(|_| Ok(()));
        mock_lists
            .expect_insert()
            .withf(move |list| {
                list.id != list_id
                    && list.status == ListStatus::Current
                    && list.balance == BigDecimal::zero()
            })
            .returning(|_| Ok(()));

        let items_clone = items.clone();
        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(items_clone.clone()));

        let use_case = FinalizeListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let sealed = use_case
            .execute(FinalizeListParams {
                user_id,
                name: "Groceries".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(sealed.record.list.total, price("7.00"));
        assert_eq!(sealed.record.list.status, ListStatus::Concluded);
        assert_eq!(sealed.record.list.balance, price("10"));
        assert_eq!(sealed.record.items.len(), 1);
        assert!(sealed.new_current.is_current());
        assert_eq!(sealed.new_current.balance, BigDecimal::zero());
    }

    #[tokio::test]
    async fn should_refuse_when_any_item_has_no_price() {
        let user_id = test_user_id();
        let current = current_with_balance(user_id, "10");
        let list_id = current.id;
        let items = vec![item(list_id, 1, "3.50"), item(list_id, 1, "0")];

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));

        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(items.clone()));

        let use_case = FinalizeListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeListParams {
                user_id,
                name: "Groceries".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::ItemsWithoutPrice
        ));
    }

    #[tokio::test]
    async fn should_refuse_when_balance_not_set() {
        let user_id = test_user_id();
        let current = current_with_balance(user_id, "0");
        let list_id = current.id;
        let items = vec![item(list_id, 1, "3.50")];

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));

        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(items.clone()));

        let use_case = FinalizeListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeListParams {
                user_id,
                name: "Groceries".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::BalanceNotSet
        ));
    }

    #[tokio::test]
    async fn should_refuse_when_list_empty() {
        let user_id = test_user_id();
        let current = current_with_balance(user_id, "10");

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));

        let mut mock_items = MockItemRepo::new();
        mock_items.expect_get_for_list().returning(|_| Ok(vec![]));

        let use_case = FinalizeListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeListParams {
                user_id,
                name: "Groceries".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::Empty));
    }

    #[tokio::test]
    async fn should_refuse_blank_name_before_any_write() {
        let user_id = test_user_id();
        let current = current_with_balance(user_id, "10");
        let list_id = current.id;
        let items = vec![item(list_id, 1, "3.50")];

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));

        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(items.clone()));

        let use_case = FinalizeListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FinalizeListParams {
                user_id,
                name: "   ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[tokio::test]
    async fn should_permit_finalize_while_over_budget() {
        let user_id = test_user_id();
        // balance 5, expense 7: over budget but balance > 0 and all priced.
        let current = current_with_balance(user_id, "5");
        let list_id = current.id;
        let items = vec![item(list_id, 2, "3.50")];

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(current.clone())));
        mock_lists.expect_seal().returning(|_| Ok(()));
        mock_lists.expect_insert().returning(|_| Ok(()));

        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(items.clone()));

        let use_case = FinalizeListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let sealed = use_case
            .execute(FinalizeListParams {
                user_id,
                name: "Estouro".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(sealed.record.list.total, price("7.00"));
    }
}
