use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use sortable_list::{
    Axis, Category, ContainerLayout, DragMove, Point, RowKey, Size, SortableConfig, SortableList,
};

use crate::groceries::Grocery;

pub const ROW_HEIGHT: f32 = 44.;
pub const VIEWPORT_HEIGHT: f32 = 220.;

/// Stands in for the host view: measures rows, forwards a scripted drag and collects
/// everything the list reports back.
pub struct Scenario {
    list: SortableList<Grocery>,
    released: Rc<RefCell<Option<Vec<Category<Grocery>>>>>,
    clock: Instant,
}

impl Scenario {
    pub fn new(data: Vec<Category<Grocery>>, config: SortableConfig) -> anyhow::Result<Self> {
        anyhow::ensure!(
            config.axis == Axis::Vertical,
            "the scripted drag runs on a vertical list"
        );
        let released: Rc<RefCell<Option<Vec<Category<Grocery>>>>> = Rc::default();

        let mut list = SortableList::new(data, config)?
            .on_activate_row(|key| tracing::info!(%key, "row activated"))
            .on_change_order(|order| tracing::info!(rows = order.len(), "order changed"))
            .on_scroll_to(|offset, animated| {
                tracing::info!(x = offset.x, y = offset.y, animated, "scroll to")
            })
            .on_release_row({
                let released = released.clone();
                move |groups| *released.borrow_mut() = Some(groups.to_vec())
            });

        let keys = list.order().to_vec();
        for key in &keys {
            list.report_layout(key, Size::new(320., ROW_HEIGHT));
        }
        list.report_container_layout(ContainerLayout {
            width: 320.,
            height: VIEWPORT_HEIGHT,
            ..Default::default()
        });
        anyhow::ensure!(
            list.is_ready(),
            "{} rows never reported a layout",
            list.pending_layouts()
        );

        Ok(Self {
            list,
            released,
            clock: Instant::now(),
        })
    }

    pub fn list(&self) -> &SortableList<Grocery> {
        &self.list
    }

    /// Drag the last item of the list to just below the first header, one row per step,
    /// letting auto-scroll run whenever the pointer sits in the leading band.
    pub fn drag_last_item_to_top(&mut self) -> anyhow::Result<Vec<Category<Grocery>>> {
        let Some((index, key)) = self
            .list
            .order()
            .iter()
            .enumerate()
            .rev()
            .find(|(_, key)| key.is_item())
            .map(|(ix, key)| (ix, key.clone()))
        else {
            anyhow::bail!("no item rows to drag");
        };

        // Start scrolled to the bottom so the dragged row is visible.
        let max_offset = (self.list.content_size().height - VIEWPORT_HEIGHT).max(0.);
        self.list.report_scroll_offset(Point::new(0., max_offset));

        let start = self
            .list
            .placements()
            .get(index)
            .map(|placement| placement.origin)
            .unwrap_or_default();
        self.list.activate_row(&key, index, start);

        // Half a row per move, up to the slot right below the first header.
        let target = ROW_HEIGHT;
        let mut location = start;
        loop {
            location.y = (location.y - ROW_HEIGHT / 2.).max(target);
            self.move_to(location);

            while self.list.is_auto_scrolling() {
                self.advance(self.list.config().autoscroll_interval_duration());
            }
            if let Some(nudged) = self.list.active_row_location() {
                location = nudged;
            }
            if location.y <= target {
                break;
            }
        }
        // Rows skipped while auto-scroll owned the drag are caught up by one last move.
        self.move_to(location);

        self.list.release_row(&key);
        self.released
            .borrow_mut()
            .take()
            .ok_or_else(|| anyhow::anyhow!("release was not reported"))
    }

    fn move_to(&mut self, location: Point) {
        let pointer_y = location.y - self.list.scroll_offset().y + ROW_HEIGHT / 2.;
        self.list.move_row(
            DragMove {
                location,
                pointer: Point::new(160., pointer_y),
            },
            self.clock,
        );
        self.advance(Duration::from_millis(16));
    }

    fn advance(&mut self, by: Duration) {
        self.clock += by;
        self.list.tick(self.clock);
    }
}

pub fn dump(order: &[RowKey]) -> String {
    order
        .iter()
        .enumerate()
        .map(|(ix, key)| format!("{ix:02}  {key}"))
        .collect::<Vec<_>>()
        .join("\n")
}
