use crate::geometry::{Axis, Point};
use crate::key::RowKey;
use crate::layout::RowLayouts;

/// The row a dragged row currently covers enough to trade places with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowUnder {
    pub key: RowKey,
    pub index: usize,
}

/// Find the row under the dragged row whose box starts at `location`.
///
/// Rows are scanned in order along `axis`. A row before the active slot matches when the
/// dragged box's leading edge sits between that row's start and the start of its last
/// third. The row after the current one matches when the dragged box's trailing edge has
/// passed the first third of it (the last row matches for any overshoot). The first
/// match wins; with no match the active row itself is returned.
///
/// Row 0 is the anchor and is never returned.
pub fn find_row_under(
    active_key: &RowKey,
    active_index: usize,
    location: Point,
    order: &[RowKey],
    layouts: &RowLayouts,
    axis: Axis,
) -> RowUnder {
    let no_change = RowUnder {
        key: active_key.clone(),
        index: active_index,
    };
    let count = order.len();
    if count < 2 {
        return no_change;
    }

    let leading = location.along(axis);
    let trailing = leading + layouts.extent_of(active_key, axis);

    let mut end = 0.;
    for ix in 0..count - 1 {
        let key = &order[ix];
        let extent = layouts.extent_of(key, axis);
        let start = end;
        end += extent;

        if ix != 0
            && ix < active_index
            && key != active_key
            && start <= leading
            && leading <= end - extent / 3.
        {
            return RowUnder {
                key: key.clone(),
                index: ix,
            };
        }

        let next_ix = ix + 1;
        let next_extent = layouts.extent_of(&order[next_ix], axis);
        if end + next_extent / 3. <= trailing
            && (trailing <= end + next_extent || next_ix == count - 1)
        {
            return RowUnder {
                key: order[next_ix].clone(),
                index: next_ix,
            };
        }
    }

    no_change
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn order() -> Vec<RowKey> {
        vec![
            RowKey::category("C1"),
            RowKey::item("i1"),
            RowKey::item("i2"),
            RowKey::category("C2"),
            RowKey::item("i3"),
        ]
    }

    fn uniform(order: &[RowKey], size: Size) -> RowLayouts {
        order.iter().map(|key| (key.clone(), size)).collect()
    }

    #[test]
    fn resting_row_finds_itself() {
        let order = order();
        let layouts = uniform(&order, Size::new(200., 50.));
        let under = find_row_under(
            &order[2],
            2,
            Point::new(0., 100.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(
            under,
            RowUnder {
                key: order[2].clone(),
                index: 2
            }
        );
    }

    #[test]
    fn upward_drag_over_previous_row() {
        let order = order();
        let layouts = uniform(&order, Size::new(200., 50.));
        let under = find_row_under(
            &order[2],
            2,
            Point::new(0., 50.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(
            under,
            RowUnder {
                key: order[1].clone(),
                index: 1
            }
        );
    }

    #[test]
    fn downward_drag_past_first_third_of_next_row() {
        let order = order();
        let layouts = uniform(&order, Size::new(200., 50.));

        // Trailing edge at 115 has not reached the first third of i2 (100..150).
        let under = find_row_under(
            &order[1],
            1,
            Point::new(0., 65.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(under.index, 1);

        let under = find_row_under(
            &order[1],
            1,
            Point::new(0., 70.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(
            under,
            RowUnder {
                key: order[2].clone(),
                index: 2
            }
        );
    }

    #[test]
    fn fast_drag_skips_several_rows() {
        let order = order();
        let layouts = uniform(&order, Size::new(200., 50.));
        let under = find_row_under(
            &order[1],
            1,
            Point::new(0., 150.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(
            under,
            RowUnder {
                key: order[3].clone(),
                index: 3
            }
        );
    }

    #[test]
    fn overshooting_the_last_row_still_matches_it() {
        let order = order();
        let layouts = uniform(&order, Size::new(200., 50.));
        let under = find_row_under(
            &order[2],
            2,
            Point::new(0., 400.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(
            under,
            RowUnder {
                key: order[4].clone(),
                index: 4
            }
        );
    }

    #[test]
    fn never_returns_the_anchor() {
        let order = order();
        let layouts = uniform(&order, Size::new(200., 50.));
        for y in [-100., -20., 0., 5., 20.] {
            let under = find_row_under(
                &order[1],
                1,
                Point::new(0., y),
                &order,
                &layouts,
                Axis::Vertical,
            );
            assert_ne!(under.index, 0, "y = {y}");
        }
    }

    #[test]
    fn horizontal_uses_widths() {
        let order = order();
        let layouts = uniform(&order, Size::new(80., 10.));
        let under = find_row_under(
            &order[2],
            2,
            Point::new(80., 0.),
            &order,
            &layouts,
            Axis::Horizontal,
        );
        assert_eq!(
            under,
            RowUnder {
                key: order[1].clone(),
                index: 1
            }
        );
    }

    #[test]
    fn single_row_list() {
        let order = vec![RowKey::category("C1")];
        let layouts = uniform(&order, Size::new(10., 10.));
        let under = find_row_under(
            &order[0],
            0,
            Point::new(0., 500.),
            &order,
            &layouts,
            Axis::Vertical,
        );
        assert_eq!(under.index, 0);
    }
}
