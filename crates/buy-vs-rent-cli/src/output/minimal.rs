use rust_decimal::Decimal;
use serde_json::Value;

use super::result_of;

/// Print just the key answer from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

/// The recommendation with its savings when present, otherwise the monthly
/// instalment, otherwise the first result field.
fn minimal_line(value: &Value) -> String {
    let result = result_of(value);

    if let Value::Object(map) = result {
        if let Some(Value::Object(rec)) = map.get("recommendation") {
            let strategy = rec.get("strategy").map(format_minimal).unwrap_or_default();
            let savings = rec.get("savings").map(format_minimal).unwrap_or_default();
            return format!("{} {}", strategy, savings);
        }

        if let Some(emi) = map.get("monthly_emi").filter(|v| !v.is_null()) {
            return format_minimal(emi);
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) => d.round_dp(2).to_string(),
            Err(_) => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
