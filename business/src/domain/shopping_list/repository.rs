use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// The per-user current list, if one has been created yet.
    async fn find_current(&self, user_id: &UserId) -> Result<Option<ShoppingList>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId)
    -> Result<ShoppingList, RepositoryError>;
    /// Every non-current list for the user, most recent first.
    async fn get_history(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn insert(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    /// Rewrites name, date, total, and status of an existing row.
    async fn seal(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    async fn update_balance(&self, id: Uuid, balance: &BigDecimal) -> Result<(), RepositoryError>;
    /// Removes the list row and, by ownership, its items.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
