#[derive(Debug, thiserror::Error)]
pub enum ShoppingItemError {
    #[error("shopping_item.name_empty")]
    NameEmpty,
    #[error("shopping_item.quantity_not_positive")]
    QuantityNotPositive,
    #[error("shopping_item.price_negative")]
    PriceNegative,
    #[error("shopping_item.not_found")]
    NotFound,
    #[error("shopping_list.current_missing")]
    CurrentListMissing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
