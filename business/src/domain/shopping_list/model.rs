use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_item::model::ShoppingItem;

use super::errors::ShoppingListError;
use super::value_objects::ListStatus;

/// Name given to a freshly created current list before the user seals it.
pub const DEFAULT_LIST_NAME: &str = "Minha Lista";

#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub date: DateTime<Utc>,
    pub total: BigDecimal,
    pub balance: BigDecimal,
    pub status: ListStatus,
}

impl ShoppingList {
    /// Creates the per-user singleton current list: empty, zero balance.
    pub fn new_current(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: DEFAULT_LIST_NAME.to_string(),
            date: Utc::now(),
            total: BigDecimal::zero(),
            balance: BigDecimal::zero(),
            status: ListStatus::Current,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        date: DateTime<Utc>,
        total: BigDecimal,
        balance: BigDecimal,
        status: ListStatus,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            date,
            total,
            balance,
            status,
        }
    }

    /// Stamps the list into a history record: user-chosen name, seal
    /// timestamp, snapshotted total, and a terminal or pending status.
    /// The total is never recomputed after this point.
    pub fn sealed(
        &self,
        name: String,
        date: DateTime<Utc>,
        total: BigDecimal,
        status: ListStatus,
    ) -> Result<Self, ShoppingListError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }
        debug_assert!(status != ListStatus::Current);

        Ok(Self {
            id: self.id,
            user_id: self.user_id,
            name,
            date,
            total,
            balance: self.balance.clone(),
            status,
        })
    }

    pub fn is_current(&self) -> bool {
        self.status == ListStatus::Current
    }

    pub fn is_pending(&self) -> bool {
        self.status == ListStatus::Pending
    }
}

/// A list together with its owned items, as returned by the join-like fetch.
#[derive(Debug, Clone)]
pub struct ListWithItems {
    pub list: ShoppingList,
    pub items: Vec<ShoppingItem>,
}
