#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.empty")]
    Empty,
    #[error("shopping_list.items_without_price")]
    ItemsWithoutPrice,
    #[error("shopping_list.balance_not_set")]
    BalanceNotSet,
    #[error("shopping_list.name_empty")]
    NameEmpty,
    #[error("shopping_list.negative_balance")]
    NegativeBalance,
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.not_resumable")]
    NotResumable,
    #[error("shopping_list.current_not_empty")]
    CurrentNotEmpty,
    #[error("shopping_list.cannot_delete_current")]
    CannotDeleteCurrent,
    #[error("shopping_list.current_missing")]
    CurrentListMissing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
