use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete_record::{
    DeleteHistoryRecordParams, DeleteHistoryRecordUseCase,
};

pub struct DeleteHistoryRecordUseCaseImpl {
    pub list_repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteHistoryRecordUseCase for DeleteHistoryRecordUseCaseImpl {
    async fn execute(&self, params: DeleteHistoryRecordParams) -> Result<(), ShoppingListError> {
        let record = self
            .list_repository
            .get_by_id(params.record_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;
        if record.is_current() {
            return Err(ShoppingListError::CannotDeleteCurrent);
        }

        self.list_repository.delete(record.id).await?;

        self.logger.info(&format!(
            "History record deleted: {} ({})",
            record.name, record.id
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::model::ShoppingList;
    use crate::domain::shopping_list::value_objects::ListStatus;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
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

    fn concluded_record(user_id: UserId) -> ShoppingList {
        ShoppingList::from_repository(
            Uuid::new_v4(),
            user_id,
            "Compra do Mês".to_string(),
            Utc::now(),
            BigDecimal::from_str("100").unwrap(),
            BigDecimal::from_str("120").unwrap(),
            ListStatus::Concluded,
        )
    }

    #[tokio::test]
    async fn should_delete_exactly_the_identified_record() {
        let user_id = UserId::new(Uuid::new_v4());
        let record = concluded_record(user_id);
        let record_id = record.id;

        let mut mock_lists = MockListRepo::new();
        let record_clone = record.clone();
        mock_lists
            .expect_get_by_id()
            .withf(move |id, uid| *id == record_id && *uid == user_id)
            .returning(move |_, _| Ok(record_clone.clone()));
        mock_lists
            .expect_delete()
            .withf(move |id| *id == record_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteHistoryRecordUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteHistoryRecordParams { user_id, record_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_refuse_to_delete_current_list() {
        let user_id = UserId::new(Uuid::new_v4());
        let current = ShoppingList::new_current(user_id);
        let record_id = current.id;

        let mut mock_lists = MockListRepo::new();
        let current_clone = current.clone();
        mock_lists
            .expect_get_by_id()
            .returning(move |_, _| Ok(current_clone.clone()));

        let use_case = DeleteHistoryRecordUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteHistoryRecordParams { user_id, record_id })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::CannotDeleteCurrent
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_record() {
        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = DeleteHistoryRecordUseCaseImpl {
            list_repository: Arc::new(mock_lists),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteHistoryRecordParams {
                user_id: UserId::new(Uuid::new_v4()),
                record_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}
