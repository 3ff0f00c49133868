//! Text and JSON output for the CLI.

use serde::Serialize;
use serde_json::json;

use collectify_infra::ListSummary;
use collectify_inventory::{FilterMode, InventoryList, ItemEntry, entries, percentage};

const ITEMS_PER_ROW: usize = 7;

#[derive(Debug, Serialize)]
struct ListView<'a> {
    name: &'a str,
    key: &'a str,
    image: &'a str,
    completion: Option<u8>,
    filter: FilterMode,
    items: Vec<ItemEntry>,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn completion_text(completion: Option<u8>) -> String {
    match completion {
        Some(pct) => format!("{pct}% completed"),
        None => "completion undefined".to_string(),
    }
}

pub fn message(text: &str, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&json!({ "message": text }));
    }
    println!("{text}");
    Ok(())
}

pub fn summaries(summaries: &[ListSummary], json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&summaries);
    }
    if summaries.is_empty() {
        println!("No lists available.");
        return Ok(());
    }

    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for s in summaries {
        match &s.error {
            Some(err) => println!("{:<width$}  unreadable: {err}", s.name),
            None => println!(
                "{:<width$}  {}  [{}]",
                s.name,
                completion_text(s.completion),
                s.image
            ),
        }
    }
    Ok(())
}

/// Confirmation after a mutation, followed by the new completion.
pub fn updated(list: &InventoryList, text: &str, json: bool) -> anyhow::Result<()> {
    let completion = percentage(list).ok();
    if json {
        return print_json(&json!({
            "message": text,
            "name": list.name(),
            "completion": completion,
            "possessed": list.possessed().collect::<Vec<_>>(),
            "missing": list.missing().collect::<Vec<_>>(),
        }));
    }
    println!("{text}");
    println!("{}: {}", list.name(), completion_text(completion));
    Ok(())
}

pub fn list(list: &InventoryList, filter: FilterMode, json: bool) -> anyhow::Result<()> {
    let items = entries(list, filter);
    let completion = percentage(list).ok();

    if json {
        return print_json(&ListView {
            name: list.name(),
            key: list.key().as_str(),
            image: list.image(),
            completion,
            filter,
            items,
        });
    }

    println!("{}", list.name());
    println!("{}", completion_text(completion));
    println!("showing: {filter} (* = owned)");
    if items.is_empty() {
        println!("(no items)");
        return Ok(());
    }
    for row in items.chunks(ITEMS_PER_ROW) {
        let cells: Vec<String> = row
            .iter()
            .map(|e| format!("{:>5}{}", e.id, if e.owned { '*' } else { ' ' }))
            .collect();
        println!("{}", cells.join(" ").trim_end());
    }
    Ok(())
}
