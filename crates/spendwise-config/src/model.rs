use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_DATA_FILE: &str = "spendwise.json";

/// Stores user-configurable preferences for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    /// Date the dashboard treats as "today" instead of the real date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom location of the budget/expense data file.
    /// Defaults to `spendwise.json` inside the base directory.
    pub data_file: Option<PathBuf>,

    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            simulated_date: None,
            data_file: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// The simulated date when one is set, otherwise `today`.
    pub fn current_date(&self, today: NaiveDate) -> NaiveDate {
        self.simulated_date.unwrap_or(today)
    }

    pub fn resolve_data_file(&self, base: &Path) -> PathBuf {
        match &self.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => base.join(DEFAULT_DATA_FILE),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        match self.currency.as_str() {
            "USD" | "CAD" | "AUD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            other => other,
        }
    }
}
