use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

use super::finalize::SealedList;

pub struct SaveDraftParams {
    pub user_id: UserId,
    /// User-entered name committed with the transition.
    pub name: String,
}

#[async_trait]
pub trait SaveDraftUseCase: Send + Sync {
    async fn execute(&self, params: SaveDraftParams) -> Result<SealedList, ShoppingListError>;
}
