use std::collections::BTreeMap;

use derive_getters::Getters;
use serde::Deserialize;
use serde_json::Value;

/// Raw provider payload per ticker, merged across all batch requests.
/// Kept untyped so the json output format can dump exactly what the
/// provider sent.
pub type ResultSet = BTreeMap<String, Value>;

/// Quote section of a batch response entry. The provider omits or nulls
/// fields freely, so every field is optional and the renderer falls back
/// per field.
#[derive(Debug, Default, Deserialize, Getters)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteData {
    symbol: Option<String>,
    company_name: Option<String>,
    primary_exchange: Option<String>,
    latest_price: Option<f64>,
    latest_source: Option<String>,
    latest_time: Option<String>,
    latest_volume: Option<f64>,
    avg_total_volume: Option<f64>,
    previous_close: Option<f64>,
    open: Option<f64>,
    low: Option<f64>,
    high: Option<f64>,
    week52_low: Option<f64>,
    week52_high: Option<f64>,
    iex_bid_price: Option<f64>,
    iex_bid_size: Option<f64>,
    iex_ask_price: Option<f64>,
    iex_ask_size: Option<f64>,
    pe_ratio: Option<f64>,
}

/// Key statistics section of a batch response entry.
#[derive(Debug, Default, Deserialize, Getters)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsData {
    marketcap: Option<f64>,
    beta: Option<f64>,
    #[serde(rename = "ttmEPS")]
    ttm_eps: Option<f64>,
    dividend_rate: Option<f64>,
    dividend_yield: Option<f64>,
    // The provider sends the number 0 when no ex-dividend date exists,
    // otherwise a timestamp string. Kept raw, decoded at render time.
    ex_dividend_date: Option<Value>,
}

#[derive(Debug, Default, Deserialize, Getters)]
#[serde(default)]
pub struct QuoteRecord {
    quote: Option<QuoteData>,
    stats: Option<StatsData>,
}

impl QuoteRecord {
    /// Tolerant conversion from the raw payload. A malformed entry decodes
    /// to an all-empty record rather than failing the whole render.
    pub fn from_raw(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}
