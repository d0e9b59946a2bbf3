//! Synthetic daily performance paths for the vault detail chart.
//!
//! Rate-driven kinds compound a noisy carry around the current rates.
//! Price-driven kinds compound a random index walk. Paths are for display
//! only and, unless a seeded RNG is passed in, differ on every call.

use chrono::{Days, NaiveDate, Utc};
use rand::Rng;

use crate::model::{HistoricalDataPoint, StrategyKind};

use super::assumptions::Assumptions;
use super::yield_calc::leveraged_net_apy;

const DAYS_PER_YEAR: f64 = 365.0;

/// Longest path generated; larger requests are clamped to ten years.
pub const MAX_HISTORY_DAYS: u32 = 3650;

/// Simulate `days` daily points ending yesterday, with thread-local randomness.
pub fn generate_historical_series(
    base_yield: f64,
    leverage: f64,
    borrow_rate: f64,
    days: u32,
    kind: StrategyKind,
) -> Vec<HistoricalDataPoint> {
    generate_historical_series_with(
        &mut rand::rng(),
        &Assumptions::default(),
        base_yield,
        leverage,
        borrow_rate,
        days,
        kind,
        Utc::now().date_naive(),
    )
}

/// Simulate a path with an explicit RNG, assumptions and end date.
///
/// The first point is dated `days` days before `end`; each following point
/// is one calendar day later, so the last point falls on the day before `end`.
/// `days` above [`MAX_HISTORY_DAYS`] is clamped.
#[allow(clippy::too_many_arguments)]
pub fn generate_historical_series_with<R: Rng + ?Sized>(
    rng: &mut R,
    assumptions: &Assumptions,
    base_yield: f64,
    leverage: f64,
    borrow_rate: f64,
    days: u32,
    kind: StrategyKind,
    end: NaiveDate,
) -> Vec<HistoricalDataPoint> {
    let days = days.min(MAX_HISTORY_DAYS);
    let start = end
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);

    let daily_borrow_cost = borrow_rate * (leverage - 1.0) / DAYS_PER_YEAR / 100.0;
    let daily_holding_cost = (borrow_rate + assumptions.funding_spread) / DAYS_PER_YEAR / 100.0;

    let mut value = assumptions.starting_value;
    let mut points = Vec::with_capacity(days as usize);
    for i in 0..days {
        let date = start
            .checked_add_days(Days::new(u64::from(i)))
            .unwrap_or(NaiveDate::MAX);

        let (daily_return, apy) = match kind {
            StrategyKind::LeverageYield | StrategyKind::TreasuryPlus => {
                rate_driven_step(rng, assumptions, base_yield, leverage, borrow_rate)
            }
            StrategyKind::Momentum => {
                let price_return = daily_price_return(rng, assumptions);
                (price_return * leverage - daily_borrow_cost, 0.0)
            }
            StrategyKind::Short => {
                let price_return = daily_price_return(rng, assumptions);
                (-price_return - daily_holding_cost, 0.0)
            }
        };
        value *= 1.0 + daily_return;

        points.push(HistoricalDataPoint {
            date,
            value: round_cents(value),
            apy,
        });
    }
    points
}

/// One day of the carry trade: perturb both rates, reprice, de-annualize.
/// Returns `(daily_return, net_apy)`.
fn rate_driven_step<R: Rng + ?Sized>(
    rng: &mut R,
    assumptions: &Assumptions,
    base_yield: f64,
    leverage: f64,
    borrow_rate: f64,
) -> (f64, f64) {
    let yield_noise = (rng.random::<f64>() - 0.5) * assumptions.yield_noise;
    let borrow_noise = (rng.random::<f64>() - 0.5) * assumptions.borrow_noise;

    let net_apy = leveraged_net_apy(base_yield + yield_noise, leverage, borrow_rate + borrow_noise);
    (net_apy / DAYS_PER_YEAR / 100.0, net_apy)
}

/// Daily index return, uniform and centred slightly above zero.
fn daily_price_return<R: Rng + ?Sized>(rng: &mut R, assumptions: &Assumptions) -> f64 {
    (rng.random::<f64>() - assumptions.price_bias) * assumptions.price_amplitude
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
