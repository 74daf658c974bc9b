use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::ShoppingItem;

/// Port for the item rows of a single list.
///
/// Item writes are whole-collection replacements: the store deletes every
/// row under the list identifier and bulk-inserts the new collection, both
/// inside one transaction so concurrent replacements serialize per list.
#[async_trait]
pub trait ShoppingItemRepository: Send + Sync {
    async fn get_for_list(&self, list_id: Uuid) -> Result<Vec<ShoppingItem>, RepositoryError>;
    async fn replace_for_list(
        &self,
        list_id: Uuid,
        items: &[ShoppingItem],
    ) -> Result<(), RepositoryError>;
}
