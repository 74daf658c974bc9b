use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{ListWithItems, ShoppingList};

pub struct FinalizeListParams {
    pub user_id: UserId,
    /// User-entered name committed with the transition.
    pub name: String,
}

/// Result of sealing the current list into history: the stamped record with
/// the items it took ownership of, and the fresh empty current list that
/// replaced it.
#[derive(Debug)]
pub struct SealedList {
    pub record: ListWithItems,
    pub new_current: ShoppingList,
}

#[async_trait]
pub trait FinalizeListUseCase: Send + Sync {
    async fn execute(&self, params: FinalizeListParams) -> Result<SealedList, ShoppingListError>;
}
