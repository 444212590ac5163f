use std::collections::{HashMap, HashSet};

use crate::data::{Category, Item};
use crate::error::SortableError;
use crate::key::RowKey;

/// The flat row order plus the category and item tables it refers to.
///
/// The tables are built once from the loaded data. Dragging only ever rewrites the order;
/// grouping is derived from it on demand by [`OrderModel::rebuild_grouped_view`].
#[derive(Clone, Debug)]
pub struct OrderModel<T> {
    order: Vec<RowKey>,
    categories: HashMap<RowKey, Category<T>>,
    items: HashMap<RowKey, Item<T>>,
}

impl<T> OrderModel<T> {
    /// Flattens `data` into `[category, items.., category, items..]`.
    pub fn from_categories(data: Vec<Category<T>>) -> Result<Self, SortableError> {
        let mut order = Vec::new();
        let mut categories = HashMap::new();
        let mut items = HashMap::new();

        for mut category in data {
            let key = category.key();
            let category_items = std::mem::take(&mut category.items);
            if categories.insert(key.clone(), category).is_some() {
                return Err(SortableError::DuplicateKey(key));
            }
            order.push(key);

            for item in category_items {
                let key = item.key();
                if items.insert(key.clone(), item).is_some() {
                    return Err(SortableError::DuplicateKey(key));
                }
                order.push(key);
            }
        }

        Ok(Self {
            order,
            categories,
            items,
        })
    }

    /// Replace the flattened order with a caller-provided one covering the same keys. The
    /// order must open with a category.
    pub fn with_order(mut self, order: Vec<RowKey>) -> Result<Self, SortableError> {
        let known: HashSet<&RowKey> = self.order.iter().collect();
        let given: HashSet<&RowKey> = order.iter().collect();
        if given.len() != order.len() {
            let duplicate = order
                .iter()
                .enumerate()
                .find(|(ix, key)| order[..*ix].contains(key))
                .map(|(_, key)| key.clone());
            if let Some(key) = duplicate {
                return Err(SortableError::DuplicateKey(key));
            }
        }

        let missing = known.difference(&given).count();
        let unexpected = given.difference(&known).count();
        if missing > 0 || unexpected > 0 {
            return Err(SortableError::OrderMismatch {
                missing,
                unexpected,
            });
        }
        if let Some(first) = order.first().filter(|key| key.is_item()) {
            return Err(SortableError::LeadingItem(first.clone()));
        }

        self.reorder(order);
        Ok(self)
    }

    pub fn current(&self) -> &[RowKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn position(&self, key: &RowKey) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        match key {
            RowKey::Category(_) => self.categories.contains_key(key),
            RowKey::Item(_) => self.items.contains_key(key),
        }
    }

    /// The category header for `key`. Its `items` are always empty.
    pub fn category(&self, key: &RowKey) -> Option<&Category<T>> {
        self.categories.get(key)
    }

    pub fn item(&self, key: &RowKey) -> Option<&Item<T>> {
        self.items.get(key)
    }

    /// Commit `next` as the live order, moving a category back to the front if needed.
    pub fn reorder(&mut self, mut next: Vec<RowKey>) {
        debug_assert_eq!(next.len(), self.order.len());
        repair_leading_anchor(&mut next);
        self.order = next;
    }
}

impl<T: Clone> OrderModel<T> {
    /// Regroup the current order: each category key opens a new group that collects the
    /// item keys following it.
    pub fn rebuild_grouped_view(&self) -> Vec<Category<T>> {
        let mut groups: Vec<Category<T>> = Vec::new();

        for key in &self.order {
            match key {
                RowKey::Category(_) => {
                    if let Some(category) = self.categories.get(key) {
                        groups.push(category.header());
                    }
                }
                RowKey::Item(_) => {
                    let Some(item) = self.items.get(key) else {
                        continue;
                    };
                    match groups.last_mut() {
                        Some(group) => group.items.push(item.clone()),
                        None => tracing::warn!(%key, "item precedes every category, dropped"),
                    }
                }
            }
        }

        groups
    }
}

/// If the first row is an item, swap it with the second.
pub fn repair_leading_anchor(order: &mut [RowKey]) {
    if order.len() > 1 && order[0].is_item() {
        order.swap(0, 1);
    }
}

/// `order` with the rows at `a` and `b` exchanged.
pub fn swap_rows(order: &[RowKey], a: usize, b: usize) -> Vec<RowKey> {
    let mut next = order.to_vec();
    next.swap(a, b);
    next
}

/// `order` with the row at `from` removed and reinserted at `to`.
pub fn shift_row(order: &[RowKey], from: usize, to: usize) -> Vec<RowKey> {
    let mut next = order.to_vec();
    let key = next.remove(from);
    next.insert(to.min(next.len()), key);
    next
}
