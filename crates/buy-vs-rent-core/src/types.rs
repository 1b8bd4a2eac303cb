use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values, in fixed-point decimal.
pub type Money = Decimal;

/// Annual rates expressed as percentages (5 = 5%), the way users quote them.
pub type Percent = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_with_metadata_captures_assumptions_and_version() {
        let out = with_metadata(
            "test",
            &serde_json::json!({ "rate": "8" }),
            vec!["careful".into()],
            42,
            dec!(1.5),
        );
        assert_eq!(out.result, dec!(1.5));
        assert_eq!(out.assumptions["rate"], "8");
        assert_eq!(out.warnings, vec!["careful".to_string()]);
        assert_eq!(out.metadata.computation_time_us, 42);
        assert_eq!(out.metadata.version, env!("CARGO_PKG_VERSION"));
    }
}
