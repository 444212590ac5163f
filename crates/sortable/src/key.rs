use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a row of a [`SortableList`](crate::SortableList).
///
/// Category rows and item rows live in separate namespaces: an item whose id happens to
/// equal a category id is still a different key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum RowKey {
    Category(String),
    Item(String),
}

impl RowKey {
    pub fn category(id: impl Into<String>) -> Self {
        Self::Category(id.into())
    }

    pub fn item(id: impl Into<String>) -> Self {
        Self::Item(id.into())
    }

    pub fn is_category(&self) -> bool {
        matches!(self, Self::Category(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Category(id) | Self::Item(id) => id,
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(id) => write!(f, "category:{id}"),
            Self::Item(id) => write!(f, "item:{id}"),
        }
    }
}
