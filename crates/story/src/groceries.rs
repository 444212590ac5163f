use serde::{Deserialize, Serialize};
use sortable_list::{Category, Item};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grocery {
    pub label: String,
}

fn item(id: &str, parent: &str, label: &str) -> Item<Grocery> {
    Item::new(
        id,
        parent,
        Grocery {
            label: label.to_string(),
        },
    )
}

pub fn demo_groceries() -> Vec<Category<Grocery>> {
    vec![
        Category::new("produce", "Produce").items(vec![
            item("1", "produce", "Apples"),
            item("2", "produce", "Spinach"),
            item("3", "produce", "Lemons"),
        ]),
        Category::new("dairy", "Dairy").items(vec![
            item("4", "dairy", "Milk"),
            item("5", "dairy", "Butter"),
        ]),
        Category::new("pantry", "Pantry").items(vec![
            item("6", "pantry", "Rice"),
            item("7", "pantry", "Olive oil"),
            item("8", "pantry", "Coffee"),
        ]),
    ]
}

pub fn load_groceries(json: &str) -> serde_json::Result<Vec<Category<Grocery>>> {
    serde_json::from_str(json)
}
