use std::env;

use serde::{Deserialize, Serialize};

const NO_COLOR_VAR: &str = "NO_COLOR";

/// Session-wide presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub currency_symbol: String,
    pub decimal_places: usize,
    pub done_keyword: String,
    pub suggest_categories: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            decimal_places: 2,
            done_keyword: "done".into(),
            suggest_categories: true,
            color: true,
        }
    }
}

impl Config {
    /// Defaults, with color turned off when `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if env::var_os(NO_COLOR_VAR).is_some_and(|value| !value.is_empty()) {
            config.color = false;
        }
        config
    }

    pub fn is_done_keyword(&self, input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(&self.done_keyword)
    }

    /// Formats an amount with the configured symbol and precision.
    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.currency_symbol, self.decimal_places, amount
        )
    }
}
