use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ListWithItems;

pub struct ResumeListParams {
    pub user_id: UserId,
    pub record_id: Uuid,
    /// Must be set when the current list still has items: resuming replaces
    /// them irreversibly.
    pub confirm_replace: bool,
}

#[async_trait]
pub trait ResumeListUseCase: Send + Sync {
    async fn execute(&self, params: ResumeListParams) -> Result<ListWithItems, ShoppingListError>;
}
