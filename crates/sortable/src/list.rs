use std::rc::Rc;
use std::time::Instant;

use crate::autoscroll::{AutoScroller, band_at};
use crate::config::SortableConfig;
use crate::data::Category;
use crate::error::SortableError;
use crate::geometry::{Axis, ContainerLayout, Point, Size};
use crate::key::RowKey;
use crate::layout::{LayoutProgress, LayoutRegistry, RowLayouts};
use crate::order::OrderModel;
use crate::reorder::reorder_on_move;
use crate::session::DragSession;

const ELEVATED_Z_INDEX: i32 = 100;

/// A pointer move reported by the gesture layer for the dragged row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMove {
    /// Origin of the dragged row's box, in content coordinates.
    pub location: Point,
    /// Pointer position, in the page coordinates of [`ContainerLayout`].
    pub pointer: Point,
}

/// Where and how the renderer should draw one row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlacement {
    pub key: RowKey,
    pub index: usize,
    /// Slot origin. The dragged row follows [`SortableList::active_row_location`] instead.
    pub origin: Point,
    pub z_index: i32,
    pub active: bool,
    pub disabled: bool,
    pub animated: bool,
}

struct SortableListCallbacks<T> {
    on_change_order: Option<Rc<dyn Fn(&[RowKey])>>,
    on_activate_row: Option<Rc<dyn Fn(&RowKey)>>,
    on_release_row: Option<Rc<dyn Fn(&[Category<T>])>>,
    on_press_row: Option<Rc<dyn Fn(&RowKey)>>,
    on_scroll_to: Option<Rc<dyn Fn(Point, bool)>>,
}

impl<T> Default for SortableListCallbacks<T> {
    fn default() -> Self {
        Self {
            on_change_order: None,
            on_activate_row: None,
            on_release_row: None,
            on_press_row: None,
            on_scroll_to: None,
        }
    }
}

struct Measured {
    layouts: RowLayouts,
    container: ContainerLayout,
}

impl Measured {
    fn max_scroll_offset(&self, axis: Axis, footer_extent: f32) -> f32 {
        self.layouts.total_extent(axis) + footer_extent - self.container.extent(axis)
    }
}

enum Phase {
    Measuring {
        registry: LayoutRegistry,
        rows: Option<RowLayouts>,
        container: Option<ContainerLayout>,
    },
    Ready(Measured),
}

impl Phase {
    fn measuring(order: &[RowKey], container: Option<ContainerLayout>) -> Self {
        let mut registry = LayoutRegistry::new(order.iter().cloned());
        let rows = registry.take_if_complete();
        Self::Measuring {
            registry,
            rows,
            container,
        }
    }
}

/// Headless state for a drag-to-reorder list of categories and items.
///
/// The host forwards layout reports, gestures and clock ticks; the list answers with
/// order changes, scroll commands and per-row placements. Gestures are ignored until
/// every row and the container have reported their layout.
pub struct SortableList<T> {
    config: SortableConfig,
    model: OrderModel<T>,
    phase: Phase,
    session: Option<DragSession>,
    released_key: Option<RowKey>,
    scroll_offset: Point,
    footer_extent: f32,
    autoscroller: AutoScroller,
    callbacks: SortableListCallbacks<T>,
}

impl<T: Clone + 'static> SortableList<T> {
    pub fn new(data: Vec<Category<T>>, config: SortableConfig) -> Result<Self, SortableError> {
        config.validate()?;
        let model = OrderModel::from_categories(data)?;
        let phase = Phase::measuring(model.current(), None);
        let autoscroller = AutoScroller::new(config.autoscroll_interval_duration());

        Ok(Self {
            config,
            model,
            phase,
            session: None,
            released_key: None,
            scroll_offset: Point::ZERO,
            footer_extent: 0.,
            autoscroller,
            callbacks: SortableListCallbacks::default(),
        })
    }

    /// Start from `order` instead of the order flattened from the data.
    pub fn with_order(mut self, order: Vec<RowKey>) -> Result<Self, SortableError> {
        self.model = self.model.with_order(order)?;
        Ok(self)
    }

    /// Called with the flat order after every committed reorder.
    pub fn on_change_order(mut self, f: impl Fn(&[RowKey]) + 'static) -> Self {
        self.callbacks.on_change_order = Some(Rc::new(f));
        self
    }

    pub fn on_activate_row(mut self, f: impl Fn(&RowKey) + 'static) -> Self {
        self.callbacks.on_activate_row = Some(Rc::new(f));
        self
    }

    /// Called on release with the order regrouped into categories.
    pub fn on_release_row(mut self, f: impl Fn(&[Category<T>]) + 'static) -> Self {
        self.callbacks.on_release_row = Some(Rc::new(f));
        self
    }

    pub fn on_press_row(mut self, f: impl Fn(&RowKey) + 'static) -> Self {
        self.callbacks.on_press_row = Some(Rc::new(f));
        self
    }

    /// Receives `(offset, animated)` scroll commands for the host's scroll view.
    pub fn on_scroll_to(mut self, f: impl Fn(Point, bool) + 'static) -> Self {
        self.callbacks.on_scroll_to = Some(Rc::new(f));
        self
    }

    /// Replace all categories and items. Any drag is dropped silently and every row must
    /// report its layout again; the container layout is kept.
    pub fn set_data(&mut self, data: Vec<Category<T>>) -> Result<(), SortableError> {
        let model = OrderModel::from_categories(data)?;
        self.cancel_drag();
        if let Phase::Measuring { registry, .. } = &mut self.phase {
            registry.cancel();
        }

        let container = match &self.phase {
            Phase::Measuring { container, .. } => *container,
            Phase::Ready(measured) => Some(measured.container),
        };
        self.model = model;
        self.released_key = None;
        self.phase = Phase::measuring(self.model.current(), container);
        self.finish_measuring();
        Ok(())
    }

    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    pub fn model(&self) -> &OrderModel<T> {
        &self.model
    }

    pub fn order(&self) -> &[RowKey] {
        self.model.current()
    }

    pub fn grouped(&self) -> Vec<Category<T>> {
        self.model.rebuild_grouped_view()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// Rows that have not reported a layout yet.
    pub fn pending_layouts(&self) -> usize {
        match &self.phase {
            Phase::Measuring { registry, .. } => registry.remaining(),
            Phase::Ready(_) => 0,
        }
    }

    pub fn report_layout(&mut self, key: &RowKey, size: Size) {
        let Phase::Measuring { registry, rows, .. } = &mut self.phase else {
            return;
        };

        match registry.report(key, size) {
            LayoutProgress::Complete(layouts) => {
                *rows = Some(layouts);
                self.finish_measuring();
            }
            LayoutProgress::Pending { remaining } => {
                tracing::trace!(%key, remaining, "row layout reported");
            }
            LayoutProgress::Ignored => {
                tracing::trace!(%key, "row layout ignored");
            }
        }
    }

    /// Capture the container layout. Only the first report is used.
    pub fn report_container_layout(&mut self, layout: ContainerLayout) {
        let Phase::Measuring { container, .. } = &mut self.phase else {
            return;
        };
        if container.is_none() {
            *container = Some(layout);
            self.finish_measuring();
        }
    }

    fn finish_measuring(&mut self) {
        let Phase::Measuring {
            rows, container, ..
        } = &mut self.phase
        else {
            return;
        };
        let Some(container) = *container else {
            return;
        };
        let Some(layouts) = rows.take() else {
            return;
        };

        tracing::debug!(rows = layouts.len(), "row layouts ready");
        self.phase = Phase::Ready(Measured { layouts, container });
    }

    /// Extend the scrollable range past the last row, e.g. for a footer.
    pub fn set_footer_extent(&mut self, extent: f32) {
        self.footer_extent = if extent.is_finite() { extent.max(0.) } else { 0. };
    }

    pub fn report_scroll_offset(&mut self, offset: Point) {
        self.scroll_offset = offset;
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll_offset
    }

    pub fn scroll_by(&mut self, delta: f32, animated: bool) {
        self.scroll_offset = self.scroll_offset.moved_along(self.config.axis, delta);
        self.emit_scroll_to(animated);
    }

    /// Whether the host should let the user scroll the container directly.
    pub fn scroll_enabled(&self) -> bool {
        self.config.scroll_enabled && self.session.is_none()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.autoscroller.is_running()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn active_row(&self) -> Option<&RowKey> {
        self.session.as_ref().map(|session| &session.active_key)
    }

    pub fn active_row_location(&self) -> Option<Point> {
        self.session.as_ref().map(|session| session.location)
    }

    pub fn released_row(&self) -> Option<&RowKey> {
        self.released_key.as_ref()
    }

    pub fn is_row_disabled(&self, key: &RowKey) -> bool {
        key.is_category() || !self.config.sorting_enabled
    }

    pub fn content_size(&self) -> Size {
        match &self.phase {
            Phase::Ready(measured) => measured.layouts.content_size(),
            Phase::Measuring { .. } => Size::ZERO,
        }
    }

    pub fn placements(&self) -> Vec<RowPlacement> {
        let axis = self.config.axis;
        let order = self.model.current();
        let (offsets, animated) = match &self.phase {
            Phase::Ready(measured) => (measured.layouts.offsets(order, axis), true),
            Phase::Measuring { .. } => (vec![0.; order.len()], false),
        };
        let active_key = self.active_row();

        order
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(index, (key, offset))| {
                let active = active_key == Some(key);
                let elevated = active || self.released_key.as_ref() == Some(key);
                RowPlacement {
                    key: key.clone(),
                    index,
                    origin: Point::on_axis(axis, offset),
                    z_index: if elevated { ELEVATED_Z_INDEX } else { 0 },
                    active,
                    disabled: self.is_row_disabled(key),
                    animated: animated && !active,
                }
            })
            .collect()
    }

    /// Start dragging `key`. Ignored while another row is active, before layout is ready,
    /// for disabled rows and for keys not in the order.
    pub fn activate_row(&mut self, key: &RowKey, index: usize, location: Point) {
        if let Some(session) = &self.session {
            tracing::debug!(%key, active = %session.active_key, "drag already active");
            return;
        }
        if !self.is_ready() {
            tracing::debug!(%key, "activation before layout is ready");
            return;
        }
        if self.is_row_disabled(key) {
            return;
        }
        let Some(position) = self.model.position(key) else {
            tracing::debug!(%key, "activation of unknown row");
            return;
        };
        if position != index {
            tracing::trace!(%key, index, position, "activation index out of date");
        }

        self.session = Some(DragSession::new(key.clone(), position, location));
        self.released_key = None;
        tracing::debug!(%key, index = position, "row activated");

        if let Some(on_activate_row) = self.callbacks.on_activate_row.as_ref() {
            on_activate_row(key);
        }
    }

    pub fn move_row(&mut self, event: DragMove, now: Instant) {
        let axis = self.config.axis;
        let Phase::Ready(measured) = &self.phase else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.track_move(event.location, axis);

        let reordered = !self.autoscroller.is_running()
            && reorder_on_move(session, &mut self.model, &measured.layouts, axis).is_some();

        if self.config.scroll_enabled {
            let band = band_at(
                event.pointer,
                &measured.container,
                axis,
                self.config.autoscroll_area_size,
            );
            let max_offset = measured.max_scroll_offset(axis, self.footer_extent);
            self.autoscroller
                .update(band, self.scroll_offset.along(axis), max_offset, now);
        }

        if reordered && let Some(on_change_order) = self.callbacks.on_change_order.as_ref() {
            on_change_order(self.model.current());
        }
    }

    /// Advance the auto-scroll task. Call at least once per
    /// [`autoscroll_interval_ms`](SortableConfig::autoscroll_interval_ms) while
    /// [`is_auto_scrolling`](Self::is_auto_scrolling).
    pub fn tick(&mut self, now: Instant) {
        let axis = self.config.axis;
        let Phase::Ready(measured) = &self.phase else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            self.autoscroller.stop();
            return;
        };

        let max_offset = measured.max_scroll_offset(axis, self.footer_extent);
        let Some(delta) = self
            .autoscroller
            .tick(self.scroll_offset.along(axis), max_offset, now)
        else {
            return;
        };

        self.scroll_offset = self.scroll_offset.moved_along(axis, delta);
        session.nudge(axis, delta);
        self.emit_scroll_to(false);
    }

    /// End the drag and report the regrouped order. Ignored when no row is active.
    pub fn release_row(&mut self, key: &RowKey) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.active_key != *key {
            tracing::debug!(%key, active = %session.active_key, "released a different row");
        }

        self.autoscroller.stop();
        tracing::debug!(key = %session.active_key, index = session.active_index, "row released");
        self.released_key = Some(session.active_key);

        let groups = self.model.rebuild_grouped_view();
        if let Some(on_release_row) = self.callbacks.on_release_row.as_ref() {
            on_release_row(&groups);
        }
    }

    /// A tap without a drag.
    pub fn press_row(&mut self, key: &RowKey) {
        if !self.model.contains(key) {
            return;
        }
        if let Some(on_press_row) = self.callbacks.on_press_row.as_ref() {
            on_press_row(key);
        }
    }

    /// Drop the current drag without notifying anyone.
    pub fn cancel_drag(&mut self) {
        self.autoscroller.stop();
        if let Some(session) = self.session.take() {
            tracing::debug!(key = %session.active_key, "drag cancelled");
        }
    }

    /// Cancel the drag and any outstanding layout join, e.g. when the view goes away.
    pub fn teardown(&mut self) {
        self.cancel_drag();
        if let Phase::Measuring { registry, .. } = &mut self.phase {
            registry.cancel();
        }
    }

    fn emit_scroll_to(&self, animated: bool) {
        if let Some(on_scroll_to) = self.callbacks.on_scroll_to.as_ref() {
            on_scroll_to(self.scroll_offset, animated);
        }
    }
}
