use crate::geometry::{Axis, Point};
use crate::key::RowKey;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Backward,
    Forward,
}

/// State of the row currently being dragged. Exists only between activation and release.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub active_key: RowKey,
    pub active_index: usize,
    /// Origin of the dragged row's box, in content coordinates.
    pub location: Point,
    pub direction: Option<MoveDirection>,
    direction_changed: bool,
    /// Row swapped with on the last committed swap. Cleared when the direction flips.
    pub previous_swap_target: Option<RowKey>,
}

impl DragSession {
    pub fn new(active_key: RowKey, active_index: usize, location: Point) -> Self {
        Self {
            active_key,
            active_index,
            location,
            direction: None,
            direction_changed: false,
            previous_swap_target: None,
        }
    }

    /// Record a new row location and derive the movement direction along `axis`.
    ///
    /// A move with no displacement along the axis keeps the previous direction.
    pub fn track_move(&mut self, location: Point, axis: Axis) {
        let prev = self.location.along(axis);
        let next = location.along(axis);
        self.location = location;

        let direction = if next > prev {
            Some(MoveDirection::Forward)
        } else if next < prev {
            Some(MoveDirection::Backward)
        } else {
            self.direction
        };

        self.direction_changed = direction != self.direction;
        self.direction = direction;
        if self.direction_changed {
            self.previous_swap_target = None;
        }
    }

    pub fn direction_changed(&self) -> bool {
        self.direction_changed
    }

    /// Shift the dragged row by `delta` along `axis` without counting it as pointer movement.
    pub fn nudge(&mut self, axis: Axis, delta: f32) {
        self.location = self.location.moved_along(axis, delta);
    }
}
