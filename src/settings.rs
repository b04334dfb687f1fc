use serde::Deserialize;

use crate::error::CounterError;

pub const DEFAULT_INITIAL_DECKS: f64 = 6.0;
pub const DEFAULT_BASE_BET: f64 = 1.0;
pub const DECK_STEP: f64 = 0.5;

pub const INITIAL_DECKS_FIELD: &str = "initial_decks";
pub const BASE_BET_FIELD: &str = "base_bet";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub initial_decks: f64,
    pub base_bet: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            initial_decks: DEFAULT_INITIAL_DECKS,
            base_bet: DEFAULT_BASE_BET,
        }
    }
}

/// Settings as they arrive from the settings form. Each field may be a JSON
/// number or the raw text of a number input.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInput {
    #[serde(default)]
    pub initial_decks: serde_json::Value,
    #[serde(default)]
    pub base_bet: serde_json::Value,
}

impl SettingsInput {
    pub fn resolve(self) -> Result<Settings, CounterError> {
        let defaults = Settings::default();
        let initial_decks = value_to_number(INITIAL_DECKS_FIELD, &self.initial_decks)?
            .unwrap_or(defaults.initial_decks);
        let base_bet =
            value_to_number(BASE_BET_FIELD, &self.base_bet)?.unwrap_or(defaults.base_bet);
        Ok(Settings {
            initial_decks: validate(INITIAL_DECKS_FIELD, initial_decks)?,
            base_bet: validate(BASE_BET_FIELD, base_bet)?,
        })
    }
}

pub fn parse_numeric(field: &'static str, raw: &str) -> Result<f64, CounterError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CounterError::invalid(field, raw));
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| CounterError::invalid(field, raw))?;
    validate(field, value)
}

/// Configuration values must be finite and strictly positive.
pub fn validate(field: &'static str, value: f64) -> Result<f64, CounterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CounterError::invalid(field, value))
    }
}

/// `Ok(None)` for a missing field, so the caller can fall back to a default.
pub fn value_to_number(
    field: &'static str,
    value: &serde_json::Value,
) -> Result<Option<f64>, CounterError> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => match number.as_f64() {
            Some(n) => validate(field, n).map(Some),
            None => Err(CounterError::invalid(field, number)),
        },
        serde_json::Value::String(raw) => parse_numeric(field, raw).map(Some),
        other => Err(CounterError::invalid(field, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.initial_decks, 6.0);
        assert_eq!(settings.base_bet, 1.0);
    }

    #[test]
    fn test_parse_numeric_accepts_numbers() {
        assert_eq!(parse_numeric(BASE_BET_FIELD, "2.5"), Ok(2.5));
        assert_eq!(parse_numeric(BASE_BET_FIELD, " 8 "), Ok(8.0));
    }

    #[test]
    fn test_parse_numeric_rejects_garbage() {
        assert!(parse_numeric(BASE_BET_FIELD, "").is_err());
        assert!(parse_numeric(BASE_BET_FIELD, "   ").is_err());
        assert!(parse_numeric(BASE_BET_FIELD, "abc").is_err());
        assert!(parse_numeric(BASE_BET_FIELD, "NaN").is_err());
        assert!(parse_numeric(BASE_BET_FIELD, "inf").is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(validate(INITIAL_DECKS_FIELD, 0.0).is_err());
        assert!(validate(INITIAL_DECKS_FIELD, -1.0).is_err());
        assert!(validate(INITIAL_DECKS_FIELD, f64::NAN).is_err());
        assert!(validate(INITIAL_DECKS_FIELD, f64::INFINITY).is_err());
        assert_eq!(validate(INITIAL_DECKS_FIELD, 0.5), Ok(0.5));
    }

    #[test]
    fn test_settings_input_missing_fields_use_defaults() {
        let input: SettingsInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.resolve(), Ok(Settings::default()));
    }

    #[test]
    fn test_settings_input_numbers_and_strings() {
        let input: SettingsInput =
            serde_json::from_value(json!({ "initialDecks": 8, "baseBet": "5" })).unwrap();
        let settings = input.resolve().unwrap();
        assert_eq!(settings.initial_decks, 8.0);
        assert_eq!(settings.base_bet, 5.0);
    }

    #[test]
    fn test_settings_input_rejects_bad_values() {
        let input: SettingsInput =
            serde_json::from_value(json!({ "initialDecks": "" })).unwrap();
        assert_eq!(
            input.resolve(),
            Err(CounterError::invalid(INITIAL_DECKS_FIELD, ""))
        );

        let input: SettingsInput =
            serde_json::from_value(json!({ "baseBet": true })).unwrap();
        assert!(input.resolve().is_err());

        let input: SettingsInput =
            serde_json::from_value(json!({ "baseBet": -2 })).unwrap();
        assert!(input.resolve().is_err());
    }
}
