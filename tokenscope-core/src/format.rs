//! Display Formatting
//!
//! Projects a result set into comparison-table rows. Unknown values render
//! as "N/A" and are never shown as zero.

use crate::types::TokenInfo;

pub const NOT_AVAILABLE: &str = "N/A";

/// Metrics shown as rows of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMetric {
    Price,
    Change24h,
    MarketCap,
    Volume24h,
    CirculatingSupply,
}

impl TableMetric {
    pub const ALL: [TableMetric; 5] = [
        TableMetric::Price,
        TableMetric::Change24h,
        TableMetric::MarketCap,
        TableMetric::Volume24h,
        TableMetric::CirculatingSupply,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TableMetric::Price => "Price",
            TableMetric::Change24h => "24h Change",
            TableMetric::MarketCap => "Market Cap",
            TableMetric::Volume24h => "24h Volume",
            TableMetric::CirculatingSupply => "Circulating Supply",
        }
    }

    pub fn value(&self, info: &TokenInfo) -> Option<f64> {
        match self {
            TableMetric::Price => info.price,
            TableMetric::Change24h => info.price_change_24h,
            TableMetric::MarketCap => info.market_cap,
            TableMetric::Volume24h => info.volume_24h,
            TableMetric::CirculatingSupply => info.circulating_supply,
        }
    }

    pub fn format(&self, info: &TokenInfo) -> String {
        match self {
            TableMetric::Price => format_price(info.price),
            TableMetric::Change24h => format_change(info.price_change_24h),
            TableMetric::MarketCap | TableMetric::Volume24h => {
                format_compact(self.value(info)).map_or_else(na, |s| dollars(&s))
            }
            TableMetric::CirculatingSupply => format_compact(info.circulating_supply)
                .unwrap_or_else(na),
        }
    }
}

/// One bar of the price comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    /// Upper-cased symbol
    pub label: String,
    pub value: f64,
}

/// Price series for the comparison chart, in result order
pub fn chart_series(results: &[TokenInfo]) -> Vec<ChartBar> {
    results
        .iter()
        .map(|info| ChartBar {
            label: info.symbol.to_uppercase(),
            value: info.chart_price(),
        })
        .collect()
}

fn na() -> String {
    NOT_AVAILABLE.to_string()
}

/// Prefix `$` after any minus sign
fn dollars(amount: &str) -> String {
    match amount.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", amount),
    }
}

/// `$64,250.12`; sub-dollar prices keep up to six decimals
pub fn format_price(price: Option<f64>) -> String {
    match price {
        None => na(),
        Some(p) if p.abs() < 1.0 && p != 0.0 => {
            let s = format!("{:.6}", p.abs());
            let trimmed = s.trim_end_matches('0').trim_end_matches('.');
            let sign = if p < 0.0 { "-" } else { "" };
            if trimmed == "0" {
                format!("{}${:.2e}", sign, p.abs())
            } else {
                format!("{}${}", sign, trimmed)
            }
        }
        Some(p) => dollars(&group_thousands(p, 2)),
    }
}

/// `+2.35%` / `-1.80%`
pub fn format_change(change: Option<f64>) -> String {
    match change {
        None => na(),
        Some(c) => format!("{:+.2}%", c),
    }
}

/// `1.26T`, `31.00B`, `19.70M`, `950.00K`, `999.00`
pub fn format_compact(value: Option<f64>) -> Option<String> {
    const SCALES: [(f64, &str); 5] = [(1.0, ""), (1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

    let v = value?;
    let abs = v.abs();
    let mut idx = SCALES.iter().rposition(|(scale, _)| abs >= *scale).unwrap_or(0);

    // 999_999 rounds to 1000.00K, which reads as 1.00M
    let round = |idx: usize| (abs / SCALES[idx].0 * 100.0).round() / 100.0;
    if round(idx) >= 1000.0 && idx + 1 < SCALES.len() {
        idx += 1;
    }

    let sign = if v < 0.0 { "-" } else { "" };
    Some(format!("{}{:.2}{}", sign, round(idx), SCALES[idx].1))
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .map_or((formatted.as_str(), ""), |(i, f)| (i, f));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentiment;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_price(Some(64250.123)), "$64,250.12");
        assert_eq!(format_price(Some(1234567.0)), "$1,234,567.00");
        assert_eq!(format_price(Some(0.081234)), "$0.081234");
        assert_eq!(format_price(Some(0.5)), "$0.5");
        assert_eq!(format_price(Some(0.0)), "$0.00");
    }

    #[test]
    fn test_format_price_sign_before_currency() {
        assert_eq!(format_price(Some(-0.5)), "-$0.5");
        assert_eq!(format_price(Some(-1234.0)), "-$1,234.00");
        assert_eq!(format_price(Some(-0.0000001)), "-$1.00e-7");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(Some(2.345)), "+2.35%");
        assert_eq!(format_change(Some(-1.8)), "-1.80%");
        assert_eq!(format_change(None), "N/A");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(Some(1.26e12)).unwrap(), "1.26T");
        assert_eq!(format_compact(Some(3.1e10)).unwrap(), "31.00B");
        assert_eq!(format_compact(Some(19_700_000.0)).unwrap(), "19.70M");
        assert_eq!(format_compact(Some(950.0)).unwrap(), "950.00");
        assert_eq!(format_compact(None), None);
    }

    #[test]
    fn test_format_compact_rounds_into_next_suffix() {
        assert_eq!(format_compact(Some(999_999.0)).unwrap(), "1.00M");
        assert_eq!(format_compact(Some(999.999)).unwrap(), "1.00K");
        assert_eq!(format_compact(Some(999_994.0)).unwrap(), "999.99K");
        assert_eq!(format_compact(Some(-2_500_000.0)).unwrap(), "-2.50M");
        assert_eq!(format_compact(Some(0.0)).unwrap(), "0.00");
    }

    #[test]
    fn test_table_metric_unknown_is_not_zero() {
        let info = TokenInfo {
            id: "pepe".to_string(),
            name: "Pepe".to_string(),
            symbol: "pepe".to_string(),
            image: "https://example.com/pepe.png".to_string(),
            summary: String::new(),
            price: Some(0.0),
            market_cap: None,
            price_change_24h: None,
            volume_24h: Some(2.5e8),
            circulating_supply: None,
            sentiment: Sentiment::Bearish,
        };

        assert_eq!(TableMetric::Price.format(&info), "$0.00");
        assert_eq!(TableMetric::MarketCap.format(&info), "N/A");
        assert_eq!(TableMetric::Volume24h.format(&info), "$250.00M");
        assert_eq!(TableMetric::CirculatingSupply.format(&info), "N/A");
        assert_eq!(TableMetric::Change24h.format(&info), "N/A");

        let mut negative = info.clone();
        negative.market_cap = Some(-1.5e9);
        assert_eq!(TableMetric::MarketCap.format(&negative), "-$1.50B");
    }

    #[test]
    fn test_chart_series_zero_for_unknown_price() {
        let eth = TokenInfo {
            id: "ethereum".to_string(),
            name: "Ethereum".to_string(),
            symbol: "eth".to_string(),
            image: "https://example.com/eth.png".to_string(),
            summary: String::new(),
            price: Some(3120.5),
            market_cap: None,
            price_change_24h: None,
            volume_24h: None,
            circulating_supply: None,
            sentiment: Sentiment::Bullish,
        };
        let mut sol = eth.clone();
        sol.id = "solana".to_string();
        sol.symbol = "sol".to_string();
        sol.price = None;

        let series = chart_series(&[eth, sol]);
        assert_eq!(
            series,
            vec![
                ChartBar {
                    label: "ETH".to_string(),
                    value: 3120.5
                },
                ChartBar {
                    label: "SOL".to_string(),
                    value: 0.0
                },
            ]
        );
    }
}
