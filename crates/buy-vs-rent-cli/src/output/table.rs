use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{result_of, row_headers};

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    print!("{}", render_table(value));
}

/// Summary table of the scalar result fields, one table per embedded
/// array (the per-year trace), then warnings and methodology.
pub fn render_table(value: &Value) -> String {
    let mut out = String::new();
    let result = result_of(value);

    match result {
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (key, val) in map {
                match val {
                    Value::Array(_) => {}
                    Value::Object(inner) => {
                        for (inner_key, inner_val) in inner {
                            builder.push_record([format!("{key}.{inner_key}"), format_value(inner_val)]);
                        }
                    }
                    _ => builder.push_record([key.clone(), format_value(val)]),
                }
            }
            out.push_str(&Table::from(builder).to_string());
            out.push('\n');

            for (key, val) in map {
                if let Value::Array(rows) = val {
                    out.push('\n');
                    out.push_str(key);
                    out.push('\n');
                    out.push_str(&render_rows(rows));
                }
            }
        }
        Value::Array(rows) => out.push_str(&render_rows(rows)),
        _ => {
            out.push_str(&format_value(result));
            out.push('\n');
        }
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\nWarnings:\n");
            for w in warnings {
                if let Value::String(s) = w {
                    out.push_str(&format!("  - {}\n", s));
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        out.push_str(&format!("\nMethodology: {}\n", meth));
    }

    out
}

fn render_rows(rows: &[Value]) -> String {
    let Some(Value::Object(first)) = rows.first() else {
        return "(empty)\n".to_string();
    };

    let headers = row_headers(first);
    let mut builder = Builder::default();
    builder.push_record(headers.iter().cloned());

    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    format!("{}\n", Table::from(builder))
}

/// Decimal amounts arrive as strings; show them to two places.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) => d.round_dp(2).to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
