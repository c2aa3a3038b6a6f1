#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::output::text::{
        abbreviate_market_cap, extract_iso_date, group_thousands, price_size, strip_the_suffix,
    };

    #[test]
    fn market_cap_magnitudes() {
        assert_eq!(abbreviate_market_cap(2.5e12), "2.50T");
        assert_eq!(abbreviate_market_cap(3.4e9), "3.40B");
        assert_eq!(abbreviate_market_cap(500e6), "500.00M");
    }

    #[test]
    fn market_cap_boundaries_fall_to_the_smaller_suffix() {
        assert_eq!(abbreviate_market_cap(1e12), "1000.00B");
        assert_eq!(abbreviate_market_cap(1e9), "1000.00M");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(28_985_099), "28,985,099");
    }

    #[test]
    fn company_name_suffix() {
        assert_eq!(strip_the_suffix("Coca-Cola Company (The)"), "Coca-Cola Company");
        assert_eq!(strip_the_suffix("Apple Inc."), "Apple Inc.");
        // Only a trailing marker is stripped.
        assert_eq!(strip_the_suffix("Acme (The) Holdings"), "Acme (The) Holdings");
    }

    #[test]
    fn ex_dividend_date_extraction() {
        assert_eq!(
            extract_iso_date(&json!("2018-02-09 00:00:00.0")).as_deref(),
            Some("2018-02-09")
        );
        // The provider's "no date" sentinel is the number 0.
        assert_eq!(extract_iso_date(&json!(0)), None);
        assert_eq!(extract_iso_date(&json!("soon")), None);
    }

    #[test]
    fn bid_ask_fallbacks() {
        assert_eq!(price_size(Some(172.5), Some(100.0)), "172.50 x 100");
        assert_eq!(price_size(Some(0.0), Some(100.0)), "N/A");
        assert_eq!(price_size(None, Some(100.0)), "N/A");
        assert_eq!(price_size(Some(172.5), None), "N/A");
    }
}
