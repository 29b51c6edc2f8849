use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table(value: Value) -> anyhow::Result<String> {
    let options = table_options();
    let rendered = match value {
        Value::Array(items) => render_list(&items, options),
        // A single record reads best as field/value pairs.
        Value::Object(map) => {
            let rows = ordered_keys(std::iter::once(&map))
                .into_iter()
                .map(|key| {
                    let cell = map.get(&key).map_or_else(|| "-".to_string(), cell_text);
                    vec![key, cell]
                })
                .collect::<Vec<_>>();
            table::render_rows(&["field", "value"], &rows, options)
        }
        scalar => table::render_rows(&["value"], &[vec![cell_text(&scalar)]], options),
    };
    Ok(rendered)
}

fn render_list(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let records = items.iter().filter_map(Value::as_object).collect::<Vec<_>>();
    if records.len() != items.len() {
        let rows = items.iter().map(|item| vec![cell_text(item)]).collect::<Vec<_>>();
        return table::render_rows(&["value"], &rows, options);
    }

    let headers = ordered_keys(records.iter().copied());
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| record.get(header).map_or_else(|| "-".to_string(), cell_text))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_rows(&header_refs, &rows, options)
}

/// Union of keys across records, `id` first and the rest alphabetical.
fn ordered_keys<'a>(records: impl Iterator<Item = &'a Map<String, Value>>) -> Vec<String> {
    let mut keys = Vec::<String>::new();
    for record in records {
        for key in record.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys.sort_by(|a, b| (a.as_str() != "id", a).cmp(&(b.as_str() != "id", b)));
    keys
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
