//! crates/recipe_assistant_core/src/shopping.rs
//!
//! Turns shortfalls into shopping list entries and renders the list for export.

use std::fmt::Write as _;
use std::str::FromStr;

use uuid::Uuid;

use crate::domain::{Shortfall, ShoppingListItem};

/// The column order of the CSV export.
pub const CSV_HEADER: &str = "name,quantityValue,quantityUnit,checked,sourceRecipeId";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Csv,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Text => "shopping-list.txt",
            ExportFormat::Csv => "shopping-list.csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format '{other}'")),
        }
    }
}

/// One unchecked item per shortfall, pointing back at `recipe_id`.
/// Existing list entries are never merged with.
pub fn items_from_shortfalls(shortfalls: &[Shortfall], recipe_id: Uuid) -> Vec<ShoppingListItem> {
    shortfalls
        .iter()
        .map(|shortfall| ShoppingListItem {
            id: Uuid::new_v4(),
            name: shortfall.name.clone(),
            quantity_value: Some(shortfall.needed_amount),
            quantity_unit: Some(shortfall.needed_unit.clone()).filter(|unit| !unit.is_empty()),
            checked: false,
            source_recipe_id: Some(recipe_id),
        })
        .collect()
}

pub fn export(items: &[ShoppingListItem], format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => to_text(items),
        ExportFormat::Csv => to_csv(items),
    }
}

/// `"<amount> <unit> - <name> (checked)"` per line; the quantity prefix only
/// appears when the amount is non-zero and the unit is non-empty.
pub fn to_text(items: &[ShoppingListItem]) -> String {
    items
        .iter()
        .map(|item| {
            let mut line = String::new();
            if let (Some(value), Some(unit)) = (item.quantity_value, item.quantity_unit.as_deref()) {
                if value != 0.0 && !unit.is_empty() {
                    let _ = write!(line, "{value} {unit} - ");
                }
            }
            line.push_str(&item.name);
            if item.checked {
                line.push_str(" (checked)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_csv(items: &[ShoppingListItem]) -> String {
    let mut lines = Vec::with_capacity(items.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(items.iter().map(|item| {
        format!(
            "{},{},{},{},{}",
            quote(&item.name),
            item.quantity_value.map(|v| v.to_string()).unwrap_or_default(),
            item.quantity_unit.as_deref().map(quote_if_needed).unwrap_or_default(),
            item.checked,
            item.source_recipe_id.map(|id| id.to_string()).unwrap_or_default(),
        )
    }));
    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Units are free text, so they are quoted only when they would break the row.
fn quote_if_needed(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        quote(field)
    } else {
        field.to_string()
    }
}
