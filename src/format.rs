//! Display helpers for dollar figures.

/// Compact TVL label: `$4.2M`, `$850K`, or the raw amount below a thousand.
pub fn format_tvl(tvl: f64) -> String {
    if tvl >= 1_000_000.0 {
        format!("${:.1}M", tvl / 1_000_000.0)
    } else if tvl >= 1_000.0 {
        format!("${:.0}K", tvl / 1_000.0)
    } else {
        format!("${tvl}")
    }
}

/// Headline TVL in thousands, `$0` when nothing is deposited.
pub fn format_tvl_k(tvl: f64) -> String {
    if tvl > 0.0 {
        format!("${:.1}K", tvl / 1_000.0)
    } else {
        "$0".to_string()
    }
}

/// Percentage with two decimals, e.g. `10.46%`.
pub fn format_pct(pct: f64) -> String {
    format!("{pct:.2}%")
}
