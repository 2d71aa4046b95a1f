use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod rows;
pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list: full documents for json/raw, summary rows for tables.
pub fn output_list<T, R>(items: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize,
    R: Serialize + for<'a> From<&'a T>,
{
    match format {
        OutputFormat::Table => {
            let rows = items.iter().map(R::from).collect::<Vec<_>>();
            println!("{}", Table::from_rows(&rows)?.render(table_options()));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&items, format),
    }
}

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// A document as `field | value` rows; nested references show their label.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let table = match serde_json::to_value(value)? {
        Value::Object(map) => Table::key_value(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, cell(&v)))
                .collect(),
        ),
        Value::Array(items) => Table {
            headers: vec!["value".to_string()],
            rows: items.iter().map(|item| vec![cell(item)]).collect(),
        },
        scalar => Table::key_value(vec![("value".to_string(), cell(&scalar))]),
    };
    Ok(table.render(table_options()))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Object(map) => ["orderId", "manifestId", "drsId", "name", "code", "_id"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map_or_else(|| value.to_string(), str::to_string),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            format!("{} entries", items.len())
        }
        other => other.to_string(),
    }
}
