use std::time::{Duration, Instant};

use crate::geometry::{Axis, ContainerLayout, Point};

pub const DEFAULT_AUTOSCROLL_INTERVAL: Duration = Duration::from_millis(100);

const SMALL_STEP: f32 = 30.;
const LARGE_STEP: f32 = 60.;
const SMALL_STEP_TICKS: u32 = 4;

/// Unclamped scroll distance for the `tick`-th step of a run.
pub fn scroll_step(tick: u32) -> f32 {
    if tick < SMALL_STEP_TICKS {
        SMALL_STEP
    } else {
        LARGE_STEP
    }
}

/// Which way an auto-scroll run moves the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Pointer in the leading band, scrolling toward offset 0.
    Backward,
    /// Pointer in the trailing band, scrolling toward the maximum offset.
    Forward,
}

impl ScrollDirection {
    fn sign(self) -> f32 {
        match self {
            Self::Backward => -1.,
            Self::Forward => 1.,
        }
    }

    fn should_scroll(self, offset: f32, max_offset: f32) -> bool {
        match self {
            Self::Backward => offset > 0.,
            Self::Forward => offset < max_offset,
        }
    }

    fn clamp_step(self, step: f32, offset: f32, max_offset: f32) -> f32 {
        match self {
            Self::Backward if offset - step < 0. => offset,
            Self::Forward if offset + step > max_offset => max_offset - offset,
            _ => step,
        }
    }
}

/// The band, if any, that `pointer` falls into. `pointer` is in the same page coordinates
/// as the container's `page_x`/`page_y`.
pub fn band_at(
    pointer: Point,
    container: &ContainerLayout,
    axis: Axis,
    area_size: f32,
) -> Option<ScrollDirection> {
    let position = pointer.along(axis);
    let start = container.page_start(axis);
    let end = start + container.extent(axis);

    if position < start + area_size {
        Some(ScrollDirection::Backward)
    } else if position > end - area_size {
        Some(ScrollDirection::Forward)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug)]
struct ScrollTask {
    direction: ScrollDirection,
    steps: u32,
    next_due: Instant,
}

/// Repeating scroll task driven while a dragged row sits near a container edge.
///
/// At most one task runs at a time. The host clocks it through [`AutoScroller::tick`];
/// each due tick yields one signed delta, which the caller applies to both the scroll
/// offset and the dragged row.
#[derive(Debug)]
pub struct AutoScroller {
    interval: Duration,
    task: Option<ScrollTask>,
}

impl AutoScroller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            task: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.task.map(|task| task.direction)
    }

    /// React to a pointer move: stop when the pointer left both bands, start when it is in
    /// a band with room to scroll. A running task is left untouched otherwise.
    pub fn update(
        &mut self,
        band: Option<ScrollDirection>,
        offset: f32,
        max_offset: f32,
        now: Instant,
    ) {
        let Some(direction) = band else {
            self.stop();
            return;
        };
        if self.task.is_some() || !direction.should_scroll(offset, max_offset) {
            return;
        }

        tracing::debug!(?direction, "auto-scroll started");
        self.task = Some(ScrollTask {
            direction,
            steps: 0,
            next_due: now + self.interval,
        });
    }

    /// Run the task if it is due. Returns the signed distance to scroll, or `None` when
    /// nothing is due. Reaching the boundary stops the task.
    pub fn tick(&mut self, offset: f32, max_offset: f32, now: Instant) -> Option<f32> {
        let task = self.task.as_mut()?;
        if now < task.next_due {
            return None;
        }
        if !task.direction.should_scroll(offset, max_offset) {
            self.stop();
            return None;
        }

        let step = task
            .direction
            .clamp_step(scroll_step(task.steps), offset, max_offset);
        task.steps += 1;
        task.next_due = now + self.interval;
        let delta = task.direction.sign() * step;
        tracing::trace!(delta, offset, "auto-scroll tick");
        Some(delta)
    }

    /// Stop the running task. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.task.take().is_some();
        if stopped {
            tracing::debug!("auto-scroll stopped");
        }
        stopped
    }
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSCROLL_INTERVAL)
    }
}
