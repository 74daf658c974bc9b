use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use super::entity::ShoppingItemEntity;

pub struct ShoppingItemRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingItemRepository for ShoppingItemRepositoryPostgres {
    async fn get_for_list(&self, list_id: Uuid) -> Result<Vec<ShoppingItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingItemEntity>(
            "SELECT id, list_id, name, quantity, unit_price FROM shopping_items WHERE list_id = $1 ORDER BY position",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn replace_for_list(
        &self,
        list_id: Uuid,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError> {
        // Delete-then-insert inside one transaction: the delete completes
        // before the insert begins, and concurrent replacements of the same
        // list serialize instead of interleaving.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM shopping_items WHERE list_id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO shopping_items (id, list_id, name, quantity, unit_price, position) VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(item.id)
            .bind(list_id)
            .bind(&item.name)
            .bind(item.quantity as i32)
            .bind(&item.unit_price)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
