mod groceries;
mod scenario;

use anyhow::Context as _;
use sortable_list::SortableConfig;
use tracing_subscriber::EnvFilter;

use crate::groceries::{demo_groceries, load_groceries};
use crate::scenario::{Scenario, dump};

/// Usage: `sortable-list-story [categories.json] [config.json]`
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let data = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {path}"))?;
            load_groceries(&json).with_context(|| format!("failed to parse {path}"))?
        }
        None => demo_groceries(),
    };
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {path}"))?;
            serde_json::from_str::<SortableConfig>(&json)
                .with_context(|| format!("failed to parse {path}"))?
        }
        None => SortableConfig::default(),
    };

    let mut scenario = Scenario::new(data, config)?;
    println!("before:\n{}\n", dump(scenario.list().order()));

    let groups = scenario.drag_last_item_to_top()?;
    println!("after:\n{}\n", dump(scenario.list().order()));
    println!("{}", serde_json::to_string_pretty(&groups)?);

    Ok(())
}
