use serde::{Deserialize, Serialize};

use crate::key::RowKey;

/// A group of items, rendered as a header row followed by its item rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Category<T> {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item<T>>,
}

impl<T> Category<T> {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn items(mut self, items: impl Into<Vec<Item<T>>>) -> Self {
        self.items = items.into();
        self
    }

    pub fn key(&self) -> RowKey {
        RowKey::category(self.id.clone())
    }

    /// Same category with no items, used as the header of a rebuilt group.
    pub(crate) fn header(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            items: Vec::new(),
        }
    }
}

/// A draggable row.
///
/// `parent` records the category the item was loaded under. It is informational only:
/// after a drag the live grouping comes from the item's position in the order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item<T> {
    pub id: String,
    pub parent: String,
    pub data: T,
}

impl<T> Item<T> {
    pub fn new(id: impl Into<String>, parent: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            data,
        }
    }

    pub fn key(&self) -> RowKey {
        RowKey::item(self.id.clone())
    }
}
