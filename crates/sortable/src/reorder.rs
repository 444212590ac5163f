use crate::geometry::Axis;
use crate::hit_test::find_row_under;
use crate::layout::RowLayouts;
use crate::order::{OrderModel, shift_row, swap_rows};
use crate::session::DragSession;

/// A reorder committed in response to a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderStep {
    /// Adjacent rows exchanged positions.
    Swap { from: usize, to: usize },
    /// The active row jumped over one or more rows to `to`.
    Shift { from: usize, to: usize },
}

/// Hit-test the session's row and commit a swap or shift into `model` if it moved onto
/// another row.
///
/// The row swapped with on the previous step is skipped until the drag direction flips,
/// so two equal rows don't trade places on every jitter across their boundary.
pub fn reorder_on_move<T>(
    session: &mut DragSession,
    model: &mut OrderModel<T>,
    layouts: &RowLayouts,
    axis: Axis,
) -> Option<ReorderStep> {
    let order = model.current();
    let from = if order.get(session.active_index) == Some(&session.active_key) {
        session.active_index
    } else {
        model.position(&session.active_key)?
    };

    let under = find_row_under(
        &session.active_key,
        from,
        session.location,
        order,
        layouts,
        axis,
    );

    if under.key == session.active_key
        || session.previous_swap_target.as_ref() == Some(&under.key)
        || under.index == 0
    {
        return None;
    }

    let (next, step) = if from.abs_diff(under.index) == 1 {
        session.previous_swap_target = Some(under.key);
        (
            swap_rows(order, from, under.index),
            ReorderStep::Swap {
                from,
                to: under.index,
            },
        )
    } else {
        (
            shift_row(order, from, under.index),
            ReorderStep::Shift {
                from,
                to: under.index,
            },
        )
    };

    model.reorder(next);
    session.active_index = model.position(&session.active_key).unwrap_or(under.index);
    tracing::trace!(key = %session.active_key, ?step, "reordered");
    Some(step)
}
