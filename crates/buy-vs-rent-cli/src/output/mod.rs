pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` payload of a computation envelope, or the value itself.
fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Column order for per-year rows: `year` first, then the remaining fields.
fn row_headers(first: &Map<String, Value>) -> Vec<String> {
    let mut headers: Vec<String> = first.keys().cloned().collect();
    if let Some(pos) = headers.iter().position(|h| h == "year") {
        let year = headers.remove(pos);
        headers.insert(0, year);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_year_column_comes_first() {
        let row = json!({ "flat_cost": "1", "year": 1, "emi_expense": "2" });
        let headers = row_headers(row.as_object().unwrap());
        assert_eq!(headers, vec!["year", "emi_expense", "flat_cost"]);
    }

    #[test]
    fn test_result_of_unwraps_envelope() {
        let envelope = json!({ "result": { "monthly_emi": "1" }, "warnings": [] });
        assert_eq!(result_of(&envelope), &json!({ "monthly_emi": "1" }));
        let bare = json!({ "monthly_emi": "1" });
        assert_eq!(result_of(&bare), &bare);
    }
}
