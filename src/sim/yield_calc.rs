//! Net-return calculator for the four vault kinds.
//!
//! All inputs and outputs are percentage points (`5.48` means 5.48%).
//! The functions here are total: any `f64` is accepted and nothing panics,
//! though NaN or infinite inputs produce meaningless figures. Callers at
//! the edges (API, CLI) reject non-finite numbers before they get here.

use crate::model::{LeveragedYieldResult, StrategyKind};

use super::assumptions::Assumptions;

const MOMENTUM_CAVEAT: &str = "⚠️ Variable returns based on S&P 500 performance. No guaranteed yield.";

/// Compute the net annualized return of a vault using the default assumptions.
pub fn calculate_yield(
    base_yield: f64,
    leverage: f64,
    borrow_rate: f64,
    kind: StrategyKind,
) -> LeveragedYieldResult {
    calculate_yield_with(&Assumptions::default(), base_yield, leverage, borrow_rate, kind)
}

/// Compute the net annualized return of a vault with explicit assumptions.
pub fn calculate_yield_with(
    assumptions: &Assumptions,
    base_yield: f64,
    leverage: f64,
    borrow_rate: f64,
    kind: StrategyKind,
) -> LeveragedYieldResult {
    match kind {
        StrategyKind::LeverageYield => leverage_yield(base_yield, leverage, borrow_rate),
        StrategyKind::TreasuryPlus => treasury_plus(base_yield, assumptions.treasury_boost),
        StrategyKind::Momentum => momentum(
            leverage,
            borrow_rate,
            assumptions.expected_equity_return,
        ),
        StrategyKind::Short => short(borrow_rate, assumptions.funding_spread),
    }
}

/// Gross carry of a levered yield position minus financing on the borrowed part.
///
/// Collateral earns on the full `leverage` notional; only `leverage - 1`
/// units are borrowed. Unclamped; callers decide what negative carry means.
pub fn leveraged_net_apy(base_yield: f64, leverage: f64, borrow_rate: f64) -> f64 {
    base_yield * leverage - borrow_rate * (leverage - 1.0)
}

fn leverage_yield(base_yield: f64, leverage: f64, borrow_rate: f64) -> LeveragedYieldResult {
    let gross_yield = base_yield * leverage;
    let borrow_cost = borrow_rate * (leverage - 1.0);
    let net_yield = gross_yield - borrow_cost;

    // Advertised as non-negative carry: negative results display as zero.
    LeveragedYieldResult {
        base_yield,
        leverage,
        borrow_rate,
        net_leveraged_yield: net_yield.max(0.0),
        formula: format!(
            "Net APY = ({base_yield:.2}% × {leverage}) - ({borrow_rate:.2}% × {})",
            leverage - 1.0
        ),
        breakdown: format!(
            "Gross yield: {gross_yield:.2}% | Borrow cost: {borrow_cost:.2}% | Net: {net_yield:.2}%"
        ),
        holding_cost: None,
        guaranteed: true,
    }
}

fn treasury_plus(treasury_apy: f64, boost: f64) -> LeveragedYieldResult {
    let net_yield = treasury_apy + boost;

    LeveragedYieldResult {
        base_yield: treasury_apy,
        leverage: 1.0,
        borrow_rate: 0.0,
        net_leveraged_yield: net_yield,
        formula: format!(
            "Net APY = Treasury Yield ({treasury_apy:.2}%) + DeFi Boost ({boost:.2}%)"
        ),
        breakdown: format!(
            "T-Bill yield: {treasury_apy:.2}% | DeFi lending: +{boost:.2}% | Net: {net_yield:.2}%"
        ),
        holding_cost: None,
        guaranteed: true,
    }
}

fn momentum(leverage: f64, borrow_rate: f64, expected_return: f64) -> LeveragedYieldResult {
    let leveraged_return = expected_return * leverage;
    let borrow_cost = borrow_rate * (leverage - 1.0);
    let net_expected = leveraged_return - borrow_cost;

    LeveragedYieldResult {
        // Equity carries no yield of its own.
        base_yield: 0.0,
        leverage,
        borrow_rate,
        net_leveraged_yield: net_expected,
        formula: format!(
            "Expected Return = (Historical Avg {expected_return:.2}% × {leverage}) - ({borrow_rate:.2}% × {})",
            leverage - 1.0
        ),
        breakdown: format!(
            "Leveraged return: {leveraged_return:.2}% | Borrow cost: {borrow_cost:.2}% | \
             Expected net: {net_expected:.2}% | {MOMENTUM_CAVEAT}"
        ),
        holding_cost: None,
        guaranteed: false,
    }
}

fn short(borrow_rate: f64, funding_spread: f64) -> LeveragedYieldResult {
    let holding_cost = borrow_rate + funding_spread;

    // Return depends entirely on where the index goes; there is no APY.
    LeveragedYieldResult {
        base_yield: 0.0,
        leverage: -1.0,
        borrow_rate,
        net_leveraged_yield: 0.0,
        formula: format!("P&L = -1 × Price Change - Holding Cost ({holding_cost:.2}%/year)"),
        breakdown: format!(
            "⚠️ Profits when S&P 500 declines. Borrow: {borrow_rate:.2}% + funding: {funding_spread:.2}% | \
             Holding cost: {holding_cost:.2}%/year. No guaranteed returns."
        ),
        holding_cost: Some(holding_cost),
        guaranteed: false,
    }
}
