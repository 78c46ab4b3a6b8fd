//! User settings for outlay
//!
//! Nothing is persisted between sessions, so settings come from CLI flags and
//! environment variables rather than a config file.

use serde::{Deserialize, Serialize};

/// User settings for a single dashboard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used everywhere an amount is shown
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) for the transaction and recurring lists
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
