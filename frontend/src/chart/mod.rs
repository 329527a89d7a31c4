//! Monthly debit pie charts: layout, coloring and hover wiring.
//!
//! The geometry and color bookkeeping live in plain modules so they can be
//! checked without a browser; [`render::ChartSurface`] is the seam where a
//! concrete rendering target (the Yew SVG surface in [`component`]) plugs in.

pub mod component;
pub mod key;
pub mod layout;
pub mod months;
pub mod pie;
pub mod render;
pub mod scale;

use indexmap::IndexMap;
use serde::Deserialize;

pub use component::{MonthlyDebitCharts, MonthlyDebitsPanel};
pub use render::{ChartSurface, MonthlyDebitRenderer};

/// One account's debit total for a month.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MonthlyRecord {
    pub label: String,
    pub balance: Balance,
}

/// A balance as a number for the pie and as the text the server sent for
/// the label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBalance")]
pub struct Balance {
    pub value: f64,
    pub text: String,
}

impl From<f64> for Balance {
    fn from(value: f64) -> Self {
        Self {
            value,
            text: format_number(value),
        }
    }
}

// decimal balances arrive as strings ("1200.00")
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBalance {
    Number(f64),
    Text(String),
}

impl TryFrom<RawBalance> for Balance {
    type Error = std::num::ParseFloatError;

    fn try_from(raw: RawBalance) -> Result<Self, Self::Error> {
        match raw {
            RawBalance::Number(value) => Ok(value.into()),
            RawBalance::Text(text) => Ok(Self {
                value: text.trim().parse()?,
                text,
            }),
        }
    }
}

/// Records grouped by month key, in the order the server sent them.
pub type MonthlyData = IndexMap<String, Vec<MonthlyRecord>>;

pub fn parse_monthly_data(raw: &str) -> serde_json::Result<MonthlyData> {
    serde_json::from_str(raw)
}

/// Plain decimal text for labels and path data. Agrees with the browser's
/// number printing for ordinary amounts, not for exponent-sized values.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // no "-0"
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_and_decimal_string_balances() {
        let data = parse_monthly_data(
            r#"{"2": [{"label": "Food", "balance": "300.50"}], "1": [{"label": "Rent", "balance": 1200}]}"#,
        )
        .unwrap();
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, ["2", "1"]);
        assert_eq!(data["2"][0].balance.value, 300.5);
        assert_eq!(data["2"][0].balance.text, "300.50");
        assert_eq!(data["1"][0].balance, Balance::from(1200.0));
        assert_eq!(data["1"][0].balance.text, "1200");
    }

    #[test]
    fn rejects_non_numeric_balance() {
        assert!(parse_monthly_data(r#"{"1": [{"label": "Rent", "balance": "lots"}]}"#).is_err());
    }

    #[test]
    fn formats_plain_decimals() {
        assert_eq!(format_number(1200.0), "1200");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-3.25), "-3.25");
    }
}
