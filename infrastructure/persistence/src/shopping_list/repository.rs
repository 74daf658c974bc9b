use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;
use business::domain::shopping_list::value_objects::ListStatus;

use super::entity::ShoppingListEntity;

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn find_current(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ShoppingList>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, user_id, list_name, date, total, balance_at_time, status FROM shopping_lists WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id.as_uuid())
        .bind(ListStatus::Current.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        user_id: &UserId,
    ) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, user_id, list_name, date, total, balance_at_time, status FROM shopping_lists WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_history(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, user_id, list_name, date, total, balance_at_time, status FROM shopping_lists WHERE user_id = $1 AND status <> $2 ORDER BY date DESC",
        )
        .bind(user_id.as_uuid())
        .bind(ListStatus::Current.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO shopping_lists (id, user_id, list_name, date, total, balance_at_time, status) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(list.id)
        .bind(list.user_id.as_uuid())
        .bind(&list.name)
        .bind(list.date)
        .bind(&list.total)
        .bind(&list.balance)
        .bind(list.status.to_string())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn seal(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE shopping_lists SET list_name = $2, date = $3, total = $4, status = $5 WHERE id = $1",
        )
        .bind(list.id)
        .bind(&list.name)
        .bind(list.date)
        .bind(&list.total)
        .bind(list.status.to_string())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn update_balance(&self, id: Uuid, balance: &BigDecimal) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE shopping_lists SET balance_at_time = $2 WHERE id = $1")
            .bind(id)
            .bind(balance)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Item rows go with the list via the foreign key cascade.
        sqlx::query("DELETE FROM shopping_lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
