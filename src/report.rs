//! Plain-text tables for command output.

use crate::catalog::Catalog;
use crate::dashboard::Dashboard;
use crate::format::{format_pct, format_tvl};
use crate::model::{
    AssetYield, HistoricalDataPoint, LeveragedYieldResult, MarketRates, TotalTvl, VenueRates,
};
use crate::sim::SeriesMetrics;

const WIDTH: usize = 100;

fn header(title: &str) {
    println!("\n{}", "═".repeat(WIDTH));
    println!("  {title}");
    println!("{}", "═".repeat(WIDTH));
}

fn rule() {
    println!("  {}", "-".repeat(WIDTH - 4));
}

fn footer() {
    println!("{}", "═".repeat(WIDTH));
}

pub fn print_assets(assets: &[AssetYield]) {
    header("RWA Assets");
    println!(
        "  {:<8} {:<40} {:>9} {:>7} {:>9} {:<9}",
        "Symbol", "Name", "Base APY", "NAV", "TVL", "Category"
    );
    rule();
    for a in assets {
        println!(
            "  {:<8} {:<40} {:>9} {:>7.2} {:>9} {:<9}",
            a.symbol,
            a.name,
            format_pct(a.base_apy),
            a.nav,
            format_tvl(a.tvl),
            a.category,
        );
    }
    footer();
}

pub fn print_vaults(catalog: &Catalog) {
    header("Vaults");
    println!(
        "  {:<15} {:<22} {:<16} {:>6} {:<13} {:<7} {:<9} {:>8}",
        "Id", "Name", "Kind", "Lev", "Borrow", "Risk", "Chain", "Fallback"
    );
    rule();
    for v in catalog.vaults() {
        println!(
            "  {:<15} {:<22} {:<16} {:>6} {:<13} {:<7} {:<9} {:>8}",
            v.id,
            v.name,
            v.strategy.kind,
            v.leverage_label(),
            v.strategy.borrow_venue.display_name(),
            v.risk,
            v.chain.label(),
            format_pct(v.fallback_apy),
        );
    }
    footer();
}

pub fn print_yield(result: &LeveragedYieldResult) {
    header("Yield Calculation");
    println!("  {:<14} {}", "Base yield", format_pct(result.base_yield));
    println!("  {:<14} {}x", "Leverage", result.leverage);
    println!("  {:<14} {}", "Borrow rate", format_pct(result.borrow_rate));
    println!("  {:<14} {}", "Net", format_pct(result.net_leveraged_yield));
    if let Some(cost) = result.holding_cost {
        println!("  {:<14} {}/year", "Holding cost", format_pct(cost));
    }
    println!("  {:<14} {}", "Guaranteed", if result.guaranteed { "yes" } else { "no" });
    rule();
    println!("  {}", result.formula);
    println!("  {}", result.breakdown);
    footer();
}

pub fn print_history(points: &[HistoricalDataPoint], metrics: &SeriesMetrics) {
    header("Simulated Performance");
    println!("  {:<12} {:>12} {:>9}", "Date", "Value", "APY");
    rule();
    for p in points {
        println!("  {:<12} {:>12.2} {:>9}", p.date, p.value, format_pct(p.apy));
    }
    rule();
    print_metrics(metrics);
    footer();
}

pub fn print_metrics(m: &SeriesMetrics) {
    println!(
        "  {} days: {:.2} → {:.2} | return {:+.2}% | ann. {:+.2}% | max DD {:.2}% | Sharpe {:.3}",
        m.days,
        m.start_value,
        m.end_value,
        m.total_return_pct,
        m.annualized_pct,
        m.max_drawdown_pct,
        m.sharpe,
    );
}

fn venue_row(label: &str, v: &VenueRates) {
    let supply = v
        .supply_apy
        .map(format_pct)
        .unwrap_or_else(|| "-".to_string());
    println!(
        "  {:<14} {:>9} {:>9} {:<5} {}",
        label,
        supply,
        format_pct(v.borrow_apy),
        if v.live { "live" } else { "fixed" },
        v.source,
    );
}

pub fn print_market(rates: &MarketRates) {
    header("Lending Rates");
    println!(
        "  {:<14} {:>9} {:>9} {:<5} {}",
        "Venue", "Supply", "Borrow", "Feed", "Source"
    );
    rule();
    venue_row("Aave Horizon", &rates.aave);
    venue_row("Morpho Blue", &rates.morpho);
    footer();
    println!("  as of {}", rates.timestamp.to_rfc3339());
}

pub fn print_tvl(tvl: &TotalTvl) {
    header("Total Value Locked");
    println!("  {:<20} {:>14}", "Vault", "USD");
    rule();
    for (vault, usd) in &tvl.by_strategy {
        println!("  {:<20} {:>14.2}", vault, usd);
    }
    rule();
    println!("  {:<20} {:>14.2}", "Total", tvl.total_usd);
    footer();
    println!(
        "  ETH/USD {:.2}, as of {}",
        tvl.eth_price,
        tvl.last_updated.to_rfc3339()
    );
}

pub fn print_dashboard(d: &Dashboard) {
    header("Torque Vaults");
    println!(
        "  {:<22} {:<16} {:>6} {:>9} {:>9} {:>9} {:<7} {:>10}",
        "Vault", "Kind", "Lev", "Base", "Borrow", "Net", "Risk", "Sim. ret"
    );
    rule();
    for v in &d.vaults {
        let net = if v.kind.is_price_driven() {
            "variable".to_string()
        } else {
            format_pct(v.net_apy)
        };
        println!(
            "  {:<22} {:<16} {:>6} {:>9} {:>9} {:>9} {:<7} {:>+9.2}%",
            v.name,
            v.kind,
            format!("{}x", v.leverage),
            format_pct(v.base_apy),
            format_pct(v.borrow_rate),
            net,
            v.risk,
            v.metrics.total_return_pct,
        );
    }
    footer();
    println!(
        "  {} strategies across {} protocols | avg net APY {} | TVL {}",
        d.strategy_count,
        d.protocol_count,
        format_pct(d.avg_net_apy),
        d.tvl_display,
    );
    println!("  rates as of {}", d.last_updated.to_rfc3339());
}
