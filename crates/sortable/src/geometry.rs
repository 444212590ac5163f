use serde::{Deserialize, Serialize};

/// Scroll axis of the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis`.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    /// A point at `value` along `axis` and zero across it.
    pub fn on_axis(axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Vertical => Self::new(0., value),
            Axis::Horizontal => Self::new(value, 0.),
        }
    }

    /// This point moved by `delta` along `axis`.
    pub fn moved_along(self, axis: Axis, delta: f32) -> Self {
        match axis {
            Axis::Vertical => Self::new(self.x, self.y + delta),
            Axis::Horizontal => Self::new(self.x + delta, self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.,
        height: 0.,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Negative or non-finite dimensions count as zero.
    pub(crate) fn sanitized(self) -> Self {
        fn clamp(v: f32) -> f32 {
            if v.is_finite() && v > 0. { v } else { 0. }
        }
        Self::new(clamp(self.width), clamp(self.height))
    }
}

/// Position and size of the list container, in the coordinate space pointer events use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub page_x: f32,
    pub page_y: f32,
}

impl ContainerLayout {
    pub(crate) fn page_start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.page_y,
            Axis::Horizontal => self.page_x,
        }
    }

    pub(crate) fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}
