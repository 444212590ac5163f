use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SortableError;
use crate::geometry::Axis;

pub const DEFAULT_AUTOSCROLL_AREA_SIZE: f32 = 60.;

/// Options recognized by [`SortableList`](crate::SortableList).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    pub axis: Axis,
    pub sorting_enabled: bool,
    pub scroll_enabled: bool,
    /// Width of the band at each container edge that triggers auto-scroll.
    pub autoscroll_area_size: f32,
    pub autoscroll_interval_ms: u64,
    /// Rows are activated by the host rather than by a long press.
    pub manually_activate_rows: bool,
    /// Long-press delay before a row activates. `None` leaves it to the gesture recognizer.
    pub row_activation_time_ms: Option<u64>,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            sorting_enabled: true,
            scroll_enabled: true,
            autoscroll_area_size: DEFAULT_AUTOSCROLL_AREA_SIZE,
            autoscroll_interval_ms: 100,
            manually_activate_rows: false,
            row_activation_time_ms: None,
        }
    }
}

impl SortableConfig {
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.axis = if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        self
    }

    pub fn sorting_enabled(mut self, enabled: bool) -> Self {
        self.sorting_enabled = enabled;
        self
    }

    pub fn scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    pub fn autoscroll_area_size(mut self, size: f32) -> Self {
        self.autoscroll_area_size = size;
        self
    }

    pub fn autoscroll_interval(mut self, interval: Duration) -> Self {
        self.autoscroll_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn manually_activate_rows(mut self, manual: bool) -> Self {
        self.manually_activate_rows = manual;
        self
    }

    pub fn row_activation_time(mut self, time: Duration) -> Self {
        self.row_activation_time_ms = Some(u64::try_from(time.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn autoscroll_interval_duration(&self) -> Duration {
        Duration::from_millis(self.autoscroll_interval_ms)
    }

    pub fn row_activation_duration(&self) -> Option<Duration> {
        self.row_activation_time_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), SortableError> {
        if !self.autoscroll_area_size.is_finite() || self.autoscroll_area_size < 0. {
            return Err(SortableError::InvalidConfig(format!(
                "autoscroll_area_size must be a non-negative number, got {}",
                self.autoscroll_area_size
            )));
        }
        if self.autoscroll_interval_ms == 0 {
            return Err(SortableError::InvalidConfig(
                "autoscroll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
