mod autoscroll;
mod config;
mod data;
mod error;
mod geometry;
mod hit_test;
mod key;
mod layout;
mod list;
mod order;
mod reorder;
mod session;

pub use autoscroll::{
    AutoScroller, DEFAULT_AUTOSCROLL_INTERVAL, ScrollDirection, band_at, scroll_step,
};
pub use config::{DEFAULT_AUTOSCROLL_AREA_SIZE, SortableConfig};
pub use data::{Category, Item};
pub use error::SortableError;
pub use geometry::{Axis, ContainerLayout, Point, Size};
pub use hit_test::{RowUnder, find_row_under};
pub use key::RowKey;
pub use layout::{LayoutProgress, LayoutRegistry, RowLayouts};
pub use list::{DragMove, RowPlacement, SortableList};
pub use order::{OrderModel, repair_leading_anchor, shift_row, swap_rows};
pub use reorder::{ReorderStep, reorder_on_move};
pub use session::{DragSession, MoveDirection};
