use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read a JSON or YAML document from stdin if data is being piped.
/// Returns None if stdin is a TTY (interactive) or empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_document(&buffer)
}

// JSON documents are valid YAML, so the YAML parser covers both.
fn parse_document<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: T = serde_yaml::from_str(trimmed)?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use buy_vs_rent_core::simulation::SimulationConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_input_is_none() {
        let parsed: Option<SimulationConfig> = parse_document("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_document() {
        let parsed: Option<SimulationConfig> = parse_document(
            r#"{"starting_rent": 15000, "flat_cost": 3000000, "initial_downpayment": 600000, "loan_tenure": 15}"#,
        )
        .unwrap();
        let config = parsed.unwrap();
        assert_eq!(config.starting_rent, dec!(15000));
        assert_eq!(config.loan_tenure, 15);
    }

    #[test]
    fn test_yaml_document() {
        let parsed: Option<SimulationConfig> = parse_document(
            "starting_rent: 15000\nflat_cost: 3000000\ninitial_downpayment: 600000\nloan_tenure: 15\nrent_appreciation: 4.5\n",
        )
        .unwrap();
        assert_eq!(parsed.unwrap().rent_appreciation, dec!(4.5));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let parsed: Result<Option<SimulationConfig>, _> = parse_document("starting_rent: 15000\n");
        assert!(parsed.is_err());
    }
}
