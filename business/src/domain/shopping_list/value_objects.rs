use serde::{Deserialize, Serialize};

/// Lifecycle status of a shopping list.
///
/// Every list row carries one of these three states: the single editable
/// `Current` list, a resumable `Pending` draft, or a terminal `Concluded`
/// purchase. The wire strings are the ones the store has always used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    Current,
    Pending,
    Concluded,
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListStatus::Current => write!(f, "current"),
            ListStatus::Pending => write!(f, "pendente"),
            ListStatus::Concluded => write!(f, "concluída"),
        }
    }
}

impl std::str::FromStr for ListStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(ListStatus::Current),
            "pendente" => Ok(ListStatus::Pending),
            "concluída" => Ok(ListStatus::Concluded),
            _ => Err(format!("Invalid list status: {}", s)),
        }
    }
}
