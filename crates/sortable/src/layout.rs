use std::collections::{HashMap, HashSet};

use crate::geometry::{Axis, Size};
use crate::key::RowKey;

/// Measured sizes of every row, available once all rows have reported.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowLayouts {
    sizes: HashMap<RowKey, Size>,
}

impl RowLayouts {
    pub fn size_of(&self, key: &RowKey) -> Size {
        self.sizes.get(key).copied().unwrap_or(Size::ZERO)
    }

    pub fn extent_of(&self, key: &RowKey, axis: Axis) -> f32 {
        self.size_of(key).along(axis)
    }

    /// Offset of `key` along `axis`: the summed extents of every row before it in `order`.
    pub fn offset_of(&self, key: &RowKey, order: &[RowKey], axis: Axis) -> Option<f32> {
        let mut offset = 0.;
        for k in order {
            if k == key {
                return Some(offset);
            }
            offset += self.extent_of(k, axis);
        }
        None
    }

    /// Offsets of all rows in `order`, in one pass.
    pub fn offsets(&self, order: &[RowKey], axis: Axis) -> Vec<f32> {
        let mut next = 0.;
        order
            .iter()
            .map(|key| {
                let offset = next;
                next += self.extent_of(key, axis);
                offset
            })
            .collect()
    }

    pub fn total_extent(&self, axis: Axis) -> f32 {
        self.sizes.values().map(|size| size.along(axis)).sum()
    }

    pub fn content_size(&self) -> Size {
        Size::new(
            self.total_extent(Axis::Horizontal),
            self.total_extent(Axis::Vertical),
        )
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(RowKey, Size)> for RowLayouts {
    fn from_iter<I: IntoIterator<Item = (RowKey, Size)>>(iter: I) -> Self {
        Self {
            sizes: iter
                .into_iter()
                .map(|(key, size)| (key, size.sanitized()))
                .collect(),
        }
    }
}

/// Outcome of a single [`LayoutRegistry::report`].
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutProgress {
    Pending { remaining: usize },
    /// The last outstanding row reported. Returned exactly once per registry.
    Complete(RowLayouts),
    /// Unknown key, repeated report, or the join already finished or was cancelled.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JoinState {
    Waiting,
    Joined,
    Cancelled,
}

/// Counting join over the first layout report of each row.
///
/// Rows are registered up front; every report removes one from the pending set and the
/// report that empties it yields the full [`RowLayouts`]. Later reports are ignored, so
/// reordering never triggers a re-measure.
#[derive(Debug)]
pub struct LayoutRegistry {
    pending: HashSet<RowKey>,
    sizes: HashMap<RowKey, Size>,
    state: JoinState,
}

impl LayoutRegistry {
    pub fn new(keys: impl IntoIterator<Item = RowKey>) -> Self {
        Self {
            pending: keys.into_iter().collect(),
            sizes: HashMap::new(),
            state: JoinState::Waiting,
        }
    }

    pub fn remaining(&self) -> usize {
        match self.state {
            JoinState::Waiting => self.pending.len(),
            JoinState::Joined | JoinState::Cancelled => 0,
        }
    }

    pub fn is_joined(&self) -> bool {
        self.state == JoinState::Joined
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == JoinState::Cancelled
    }

    pub fn report(&mut self, key: &RowKey, size: Size) -> LayoutProgress {
        if self.state != JoinState::Waiting || !self.pending.remove(key) {
            return LayoutProgress::Ignored;
        }
        self.sizes.insert(key.clone(), size.sanitized());

        match self.take_if_complete() {
            Some(layouts) => LayoutProgress::Complete(layouts),
            None => LayoutProgress::Pending {
                remaining: self.pending.len(),
            },
        }
    }

    /// Finishes the join if nothing is pending, which is immediately true for an empty list.
    pub fn take_if_complete(&mut self) -> Option<RowLayouts> {
        if self.state != JoinState::Waiting || !self.pending.is_empty() {
            return None;
        }
        self.state = JoinState::Joined;
        Some(RowLayouts {
            sizes: std::mem::take(&mut self.sizes),
        })
    }

    /// Drops every pending row and partial size. The join never completes afterwards.
    pub fn cancel(&mut self) {
        self.pending.clear();
        self.sizes.clear();
        self.state = JoinState::Cancelled;
    }
}
