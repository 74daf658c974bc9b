use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ListWithItems, ShoppingList};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_current::{
    GetCurrentListParams, GetCurrentListUseCase,
};

pub struct GetCurrentListUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentListUseCase for GetCurrentListUseCaseImpl {
    async fn execute(
        &self,
        params: GetCurrentListParams,
    ) -> Result<ListWithItems, ShoppingListError> {
        if let Some(list) = self.list_repository.find_current(&params.user_id).await? {
            let items = self.item_repository.get_for_list(list.id).await?;
            return Ok(ListWithItems { list, items });
        }

        // First access for this user: bootstrap the singleton current list.
        let list = ShoppingList::new_current(params.user_id);
        self.list_repository.insert(&list).await?;
        self.logger
            .info(&format!("Current list created for user: {}", params.user_id));

        Ok(ListWithItems {
            list,
            items: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_item::model::ShoppingItem;
    use crate::domain::shopping_list::value_objects::ListStatus;
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
    async fn should_return_current_list_with_items() {
        let user_id = UserId::new(Uuid::new_v4());
        let list = ShoppingList::new_current(user_id);
        let list_id = list.id;
        let item = ShoppingItem::new(
            list_id,
            "Arroz".to_string(),
            1,
            BigDecimal::from_str("20").unwrap(),
        )
        .unwrap();

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_find_current()
            .returning(move |_| Ok(Some(list.clone())));

        let item_clone = item.clone();
        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_for_list()
            .returning(move |_| Ok(vec![item_clone.clone()]));

        let use_case = GetCurrentListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(mock_items),
            logger: mock_logger(),
        };

        let snapshot = use_case
            .execute(GetCurrentListParams { user_id })
            .await
            .unwrap();

        assert_eq!(snapshot.list.id, list_id);
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test]
    async fn should_bootstrap_singleton_when_missing() {
        let user_id = UserId::new(Uuid::new_v4());

        let mut mock_lists = MockListRepo::new();
        mock_lists.expect_find_current().returning(|_| Ok(None));
        mock_lists
            .expect_insert()
            .withf(move |list| list.status == ListStatus::Current && list.user_id == user_id)
            .returning(|_| Ok(()));

        let use_case = GetCurrentListUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            item_repository: Arc::new(MockItemRepo::new()),
            logger: mock_logger(),
        };

        let snapshot = use_case
            .execute(GetCurrentListParams { user_id })
            .await
            .unwrap();

        assert!(snapshot.list.is_current());
        assert!(snapshot.items.is_empty());
    }
}
