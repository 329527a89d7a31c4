//! Page-level configuration, read once from an inline JSON block.

use serde::Deserialize;
use tracing::{info, warn};

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "frontend-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    pub log_level: String,
    pub yearly_debit_url: String,
    pub account_form: AccountFormConfig,
    pub chart: ChartConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            yearly_debit_url: "/data/yearly/debit/".to_string(),
            account_form: AccountFormConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

/// Element ids and field names the account form controller binds to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountFormConfig {
    pub form_id: String,
    pub dialog_id: String,
    pub dialog_body_id: String,
    pub account_type_field: String,
    /// Suffix of the per-row grouping field (`form-0-summary`, ...).
    pub summary_suffix: String,
    pub sync_summary_rows: bool,
}

impl Default for AccountFormConfig {
    fn default() -> Self {
        Self {
            form_id: "account-form".to_string(),
            dialog_id: "accountAddModal".to_string(),
            dialog_body_id: "accountAddModalBody".to_string(),
            account_type_field: "account_type".to_string(),
            summary_suffix: "summary".to_string(),
            sync_summary_rows: true,
        }
    }
}

/// Canvas geometry for the monthly debit charts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// First palette index used for slice colors.
    pub palette_offset: usize,
    pub container_id: String,
    pub loader_id: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            palette_offset: 10,
            container_id: "monthly-debit-charts".to_string(),
            loader_id: "monthly-debit-charts-loader".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Parse overrides, falling back to the defaults when the JSON is unusable.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "failed to parse frontend config; using defaults");
                Self::default()
            }
        }
    }

    /// Read the inline config block of the current page, if any.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_json(&raw),
            None => {
                info!("no inline frontend config; using built-in defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = FrontendConfig::from_json(
            r#"{"log_level": "debug", "chart": {"width": 900}, "account_form": {"sync_summary_rows": false}}"#,
        );
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.chart.width, 900.0);
        assert_eq!(config.chart.height, 800.0);
        assert_eq!(config.chart.palette_offset, 10);
        assert!(!config.account_form.sync_summary_rows);
        assert_eq!(config.account_form.form_id, "account-form");
        assert_eq!(config.yearly_debit_url, "/data/yearly/debit/");
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        assert_eq!(FrontendConfig::from_json("{not json"), FrontendConfig::default());
    }
}
