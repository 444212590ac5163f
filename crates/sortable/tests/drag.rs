use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use sortable_list::{
    Category, ContainerLayout, DragMove, Item, Point, RowKey, Size, SortableConfig,
    SortableError, SortableList,
};

type Log<T> = Rc<RefCell<Vec<T>>>;

fn data() -> Vec<Category<&'static str>> {
    vec![
        Category::new("C1", "Produce").items(vec![
            Item::new("i1", "C1", "apples"),
            Item::new("i2", "C1", "pears"),
        ]),
        Category::new("C2", "Dairy").items(vec![Item::new("i3", "C2", "milk")]),
    ]
}

struct Harness {
    list: SortableList<&'static str>,
    changes: Log<Vec<RowKey>>,
    releases: Log<Vec<Category<&'static str>>>,
    now: Instant,
}

impl Harness {
    fn new() -> anyhow::Result<Self> {
        let changes: Log<Vec<RowKey>> = Rc::default();
        let releases: Log<Vec<Category<&'static str>>> = Rc::default();

        let mut list = SortableList::new(data(), SortableConfig::default())?
            .on_change_order({
                let changes = changes.clone();
                move |order| changes.borrow_mut().push(order.to_vec())
            })
            .on_release_row({
                let releases = releases.clone();
                move |groups| releases.borrow_mut().push(groups.to_vec())
            });

        let keys = list.order().to_vec();
        for key in &keys {
            list.report_layout(key, Size::new(320., 50.));
        }
        list.report_container_layout(ContainerLayout {
            width: 320.,
            height: 1000.,
            ..Default::default()
        });
        anyhow::ensure!(list.is_ready(), "list should be measured");

        Ok(Self {
            list,
            changes,
            releases,
            now: Instant::now(),
        })
    }

    /// Move the dragged row to `y`, with the pointer parked mid-container.
    fn drag_to(&mut self, y: f32) {
        self.list.move_row(
            DragMove {
                location: Point::new(0., y),
                pointer: Point::new(100., 500.),
            },
            self.now,
        );
    }

    fn ids(&self) -> Vec<&str> {
        self.list.order().iter().map(|key| key.id()).collect()
    }
}

fn group_ids(groups: &[Category<&'static str>]) -> Vec<(String, Vec<String>)> {
    groups
        .iter()
        .map(|g| (g.id.clone(), g.items.iter().map(|i| i.id.clone()).collect()))
        .collect()
}

#[test]
fn dragging_onto_adjacent_row_swaps() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.list.activate_row(&RowKey::item("i2"), 2, Point::new(0., 100.));
    h.drag_to(50.);

    assert_eq!(h.ids(), vec!["C1", "i2", "i1", "C2", "i3"]);
    assert_eq!(h.changes.borrow().len(), 1);
    assert_eq!(h.changes.borrow()[0], h.list.order());

    h.list.release_row(&RowKey::item("i2"));
    let releases = h.releases.borrow();
    assert_eq!(releases.len(), 1);
    assert_eq!(
        group_ids(&releases[0]),
        vec![
            ("C1".to_string(), vec!["i2".to_string(), "i1".to_string()]),
            ("C2".to_string(), vec!["i3".to_string()]),
        ]
    );
    assert_eq!(releases[0][0].title, "Produce");
    assert_eq!(releases[0][0].items[0].data, "pears");
    Ok(())
}

#[test]
fn fast_drag_shifts_across_rows() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.list.activate_row(&RowKey::item("i1"), 1, Point::new(0., 50.));
    h.drag_to(150.);

    assert_eq!(h.ids(), vec!["C1", "i2", "C2", "i1", "i3"]);
    assert_eq!(h.list.session().map(|s| s.active_index), Some(3));

    h.list.release_row(&RowKey::item("i1"));
    assert_eq!(
        group_ids(&h.releases.borrow()[0]),
        vec![
            ("C1".to_string(), vec!["i2".to_string()]),
            ("C2".to_string(), vec!["i1".to_string(), "i3".to_string()]),
        ]
    );
    Ok(())
}

#[test]
fn steady_drag_across_a_boundary_swaps_once() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.list.activate_row(&RowKey::item("i1"), 1, Point::new(0., 50.));

    for y in 51..=100 {
        h.drag_to(y as f32);
    }

    assert_eq!(h.changes.borrow().len(), 1);
    assert_eq!(h.ids(), vec!["C1", "i2", "i1", "C2", "i3"]);
    Ok(())
}

#[test]
fn reversing_direction_allows_swapping_back() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.list.activate_row(&RowKey::item("i1"), 1, Point::new(0., 50.));

    h.drag_to(70.);
    assert_eq!(h.ids(), vec!["C1", "i2", "i1", "C2", "i3"]);

    h.drag_to(71.);
    assert_eq!(h.changes.borrow().len(), 1, "same direction keeps the guard");

    h.drag_to(69.);
    assert_eq!(h.ids(), vec!["C1", "i1", "i2", "C2", "i3"]);
    assert_eq!(h.changes.borrow().len(), 2);
    Ok(())
}

#[test]
fn release_without_drag_reports_initial_grouping() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.list.activate_row(&RowKey::item("i3"), 4, Point::new(0., 200.));
    h.list.release_row(&RowKey::item("i3"));

    assert!(h.changes.borrow().is_empty());
    assert_eq!(h.releases.borrow()[0], data());
    assert_eq!(h.list.released_row(), Some(&RowKey::item("i3")));
    assert!(h.list.active_row().is_none());
    Ok(())
}

#[test]
fn moves_and_releases_without_a_session_are_ignored() -> anyhow::Result<()> {
    let mut h = Harness::new()?;
    h.drag_to(300.);
    h.list.release_row(&RowKey::item("i1"));

    assert!(h.changes.borrow().is_empty());
    assert!(h.releases.borrow().is_empty());
    Ok(())
}

#[test]
fn press_reports_known_rows_only() -> anyhow::Result<()> {
    let pressed: Log<RowKey> = Rc::default();
    let mut list = SortableList::new(data(), SortableConfig::default())?.on_press_row({
        let pressed = pressed.clone();
        move |key| pressed.borrow_mut().push(key.clone())
    });

    list.press_row(&RowKey::item("i2"));
    list.press_row(&RowKey::item("C1"));
    list.press_row(&RowKey::category("C1"));

    assert_eq!(
        *pressed.borrow(),
        vec![RowKey::item("i2"), RowKey::category("C1")]
    );
    Ok(())
}

#[test]
fn initial_order_override() -> anyhow::Result<()> {
    let order = vec![
        RowKey::category("C2"),
        RowKey::item("i3"),
        RowKey::item("i1"),
        RowKey::category("C1"),
        RowKey::item("i2"),
    ];
    let list = SortableList::new(data(), SortableConfig::default())?.with_order(order)?;

    assert_eq!(
        group_ids(&list.grouped()),
        vec![
            ("C2".to_string(), vec!["i3".to_string(), "i1".to_string()]),
            ("C1".to_string(), vec!["i2".to_string()]),
        ]
    );

    let item_first = vec![
        RowKey::item("i1"),
        RowKey::item("i2"),
        RowKey::category("C1"),
        RowKey::category("C2"),
        RowKey::item("i3"),
    ];
    let err = SortableList::new(data(), SortableConfig::default())?
        .with_order(item_first)
        .err();
    assert_eq!(err, Some(SortableError::LeadingItem(RowKey::item("i1"))));
    Ok(())
}

#[test]
fn horizontal_list_reorders_on_x() -> anyhow::Result<()> {
    let mut list = SortableList::new(data(), SortableConfig::default().horizontal(true))?;
    let keys = list.order().to_vec();
    for key in &keys {
        list.report_layout(key, Size::new(80., 40.));
    }
    list.report_container_layout(ContainerLayout {
        width: 1000.,
        height: 40.,
        ..Default::default()
    });

    list.activate_row(&RowKey::item("i2"), 2, Point::new(160., 0.));
    list.move_row(
        DragMove {
            location: Point::new(80., 0.),
            pointer: Point::new(500., 20.),
        },
        Instant::now(),
    );

    let ids: Vec<&str> = list.order().iter().map(|k| k.id()).collect();
    assert_eq!(ids, vec!["C1", "i2", "i1", "C2", "i3"]);
    assert_eq!(list.placements()[2].origin, Point::new(160., 0.));
    Ok(())
}
