use std::sync::LazyLock;

use crossterm::style::Color;
use regex::Regex;
use serde_json::Value;

use super::style;
use crate::cli::SessionMode;
use crate::models::{QuoteData, QuoteRecord, StatsData};

const NOT_AVAILABLE: &str = "N/A";

static THE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \(The\)$").expect("valid regex"));
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid regex"));

/// `TICKER:price` with the latest trade price as the provider sent it.
pub fn simple_line(ticker: &str, record: &QuoteRecord) -> String {
    let price = record.quote().as_ref().and_then(|q| *q.latest_price());
    match price {
        Some(p) => format!("{}:{}", ticker, p),
        None => format!("{}:{}", ticker, NOT_AVAILABLE),
    }
}

/// Multi-line quote display in the style of a finance site summary page.
/// Every field falls back to N/A on its own; one bad field never takes the
/// whole block down.
pub fn quote_block(ticker: &str, record: &QuoteRecord, mode: SessionMode) -> String {
    let empty_quote = QuoteData::default();
    let empty_stats = StatsData::default();
    let q = record.quote().as_ref().unwrap_or(&empty_quote);
    let s = record.stats().as_ref().unwrap_or(&empty_stats);

    let name = q
        .company_name()
        .as_deref()
        .map(strip_the_suffix)
        .unwrap_or(NOT_AVAILABLE);
    let symbol = q.symbol().as_deref().unwrap_or(ticker);

    let market_cap = match *s.marketcap() {
        Some(cap) => abbreviate_market_cap(cap),
        None => NOT_AVAILABLE.to_string(),
    };
    let ex_div_date = s
        .ex_dividend_date()
        .as_ref()
        .and_then(extract_iso_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let lines = vec![
        style::header(&format!("{} ({})", name, symbol), mode),
        q.primary_exchange()
            .as_deref()
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        price_line(q, mode),
        format!(
            "{} as of {}\n",
            q.latest_source().as_deref().unwrap_or(NOT_AVAILABLE),
            q.latest_time().as_deref().unwrap_or(NOT_AVAILABLE)
        ),
        row("Prev Close", &two_decimals(*q.previous_close()), "Market Cap", &market_cap),
        row("Open", &two_decimals(*q.open()), "Beta", &two_decimals(*s.beta())),
        row(
            "Bid",
            &price_size(*q.iex_bid_price(), *q.iex_bid_size()),
            "PE Ratio",
            &two_decimals(*q.pe_ratio()),
        ),
        row(
            "Ask",
            &price_size(*q.iex_ask_price(), *q.iex_ask_size()),
            "EPS (TTM)",
            &two_decimals(*s.ttm_eps()),
        ),
        row(
            "Day's Range",
            &range(*q.low(), *q.high()),
            "Fwd Div & Yield",
            &dividend(*s.dividend_rate(), *s.dividend_yield()),
        ),
        row(
            "52 wk Range",
            &range(*q.week52_low(), *q.week52_high()),
            "Ex-Div Date",
            &ex_div_date,
        ),
        format!("{:<15}: {:>16}", "Volume", volume(*q.latest_volume())),
        format!("{:<15}: {:>16}", "Avg. Volume", volume(*q.avg_total_volume())),
        String::new(),
    ];

    format!("{}\n", lines.join("\n"))
}

/// Latest price plus the change against the previous close, green on a
/// gain, red on a loss, plain when flat.
fn price_line(q: &QuoteData, mode: SessionMode) -> String {
    let Some(latest) = *q.latest_price() else {
        return NOT_AVAILABLE.to_string();
    };
    let price_str = style::paint(&format!("${:.2} ", latest), Color::Yellow, mode);
    let Some(prev) = *q.previous_close() else {
        return price_str.trim_end().to_string();
    };

    let delta = latest - prev;
    let percent_change = (delta / prev) * 100.0;
    let delta_str = format!("{:+.2} ({:+.2}%)", delta, percent_change);
    let delta_str = if delta > 0.0 {
        style::paint(&delta_str, Color::Green, mode)
    } else if delta < 0.0 {
        style::paint(&delta_str, Color::Red, mode)
    } else {
        delta_str
    };

    format!("{}{}", price_str, delta_str)
}

/// Drops a trailing " (The)" marker from legal company names, so e.g.
/// "Coca-Cola Company (The)" reads naturally in the header.
pub fn strip_the_suffix(name: &str) -> &str {
    match THE_SUFFIX.captures(name) {
        Some(caps) => caps.get(1).map_or(name, |m| m.as_str()),
        None => name,
    }
}

/// Magnitude-suffixed market cap: trillions, billions, else millions,
/// always two decimal places.
pub fn abbreviate_market_cap(value: f64) -> String {
    if value > 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if value > 1e9 {
        format!("{:.2}B", value / 1e9)
    } else {
        format!("{:.2}M", value / 1e6)
    }
}

/// Pulls the `YYYY-MM-DD` part out of the provider's ex-dividend value.
/// The provider sends the number 0 when no date exists; anything without
/// an ISO date substring yields None.
pub fn extract_iso_date(raw: &Value) -> Option<String> {
    let text = raw.as_str()?;
    ISO_DATE.find(text).map(|m| m.as_str().to_string())
}

/// Bid/ask rendering: "price x size", or N/A on a missing or zero price.
pub fn price_size(price: Option<f64>, size: Option<f64>) -> String {
    match (price, size) {
        (Some(p), Some(s)) if p != 0.0 => format!("{:.2} x {}", p, s as i64),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Integer with thousands separators, e.g. 28985099 -> "28,985,099".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 { format!("-{}", grouped) } else { grouped }
}

fn row(left_label: &str, left: &str, right_label: &str, right: &str) -> String {
    format!("{:<15}: {:>16}   {:<15}: {:>12}", left_label, left, right_label, right)
}

fn two_decimals(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn range(low: Option<f64>, high: Option<f64>) -> String {
    match (low, high) {
        (Some(lo), Some(hi)) => format!("{:.2} - {:.2}", lo, hi),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn dividend(rate: Option<f64>, yield_pct: Option<f64>) -> String {
    match (rate, yield_pct) {
        (Some(r), Some(y)) => format!("{:.2} ({:.2}%)", r, y),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn volume(value: Option<f64>) -> String {
    match value {
        Some(v) => group_thousands(v as i64),
        None => NOT_AVAILABLE.to_string(),
    }
}
