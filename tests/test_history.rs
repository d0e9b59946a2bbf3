use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use torque::model::{HistoricalDataPoint, StrategyKind};
use torque::sim::{
    Assumptions, MAX_HISTORY_DAYS, generate_historical_series, generate_historical_series_with,
};

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn seeded(
    seed: u64,
    base: f64,
    leverage: f64,
    borrow: f64,
    days: u32,
    kind: StrategyKind,
) -> Vec<HistoricalDataPoint> {
    generate_historical_series_with(
        &mut StdRng::seed_from_u64(seed),
        &Assumptions::default(),
        base,
        leverage,
        borrow,
        days,
        kind,
        end_date(),
    )
}

fn values(points: &[HistoricalDataPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

#[test]
fn test_rate_driven_series_shape() {
    let points = seeded(42, 5.48, 3.0, 2.99, 90, StrategyKind::LeverageYield);

    assert_eq!(points.len(), 90);
    assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    assert_eq!(points[89].date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    for pair in points.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
    }
}

#[test]
fn test_first_point_within_noise_band() {
    let (base, lev, borrow) = (5.48, 3.0, 2.99);
    let a = Assumptions::default();
    let net = base * lev - borrow * (lev - 1.0);
    let expected = 1000.0 * (1.0 + net / 365.0 / 100.0);
    // Worst-case APY shift from the noise, then converted to one day of value.
    let band_apy = a.yield_noise / 2.0 * lev + a.borrow_noise / 2.0 * (lev - 1.0);
    let band_value = 1000.0 * band_apy / 365.0 / 100.0 + 0.005;

    for seed in 0..50 {
        let points = seeded(seed, base, lev, borrow, 90, StrategyKind::LeverageYield);
        let first = points[0].value;
        assert!(
            (first - expected).abs() <= band_value + 1e-9,
            "seed {seed}: {first} vs {expected}"
        );
        assert!((points[0].apy - net).abs() <= band_apy + 1e-9);
    }
}

#[test]
fn test_positive_carry_grows_steadily() {
    let points = seeded(7, 5.48, 3.0, 2.99, 365, StrategyKind::LeverageYield);
    let last = points.last().unwrap().value;
    // About 10.46% compounded daily for a year.
    assert!(last > 1108.0 && last < 1112.0, "last = {last}");
}

#[test]
fn test_zero_days_is_empty() {
    for kind in StrategyKind::ALL {
        assert!(seeded(1, 5.0, 2.0, 3.0, 0, kind).is_empty());
    }
}

#[test]
fn test_values_are_rounded_to_cents() {
    for kind in StrategyKind::ALL {
        for p in seeded(3, 7.65, 2.0, 3.2, 60, kind) {
            let cents = p.value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{kind}: {}", p.value);
        }
    }
}

#[test]
fn test_price_driven_paths_are_finite() {
    for kind in [StrategyKind::Momentum, StrategyKind::Short] {
        for borrow in [0.0, 3.2, 50.0] {
            for leverage in [-1.0, 1.5, 3.0] {
                let points = seeded(11, 0.0, leverage, borrow, 365, kind);
                assert!(points.iter().all(|p| p.value.is_finite()), "{kind}");
                assert!(points.iter().all(|p| p.apy == 0.0));
            }
        }
    }
}

#[test]
fn test_price_driven_paths_ignore_base_yield() {
    for kind in [StrategyKind::Momentum, StrategyKind::Short] {
        let a = seeded(99, 0.0, 1.5, 3.2, 120, kind);
        let b = seeded(99, 12.5, 1.5, 3.2, 120, kind);
        assert_eq!(values(&a), values(&b), "{kind}");
    }
}

#[test]
fn test_same_seed_reproduces_path() {
    for kind in StrategyKind::ALL {
        let a = seeded(2024, 5.48, 3.0, 2.99, 90, kind);
        let b = seeded(2024, 5.48, 3.0, 2.99, 90, kind);
        assert_eq!(a, b);
    }
}

#[test]
fn test_unseeded_paths_differ() {
    for kind in StrategyKind::ALL {
        let a = generate_historical_series(5.48, 1.5, 3.2, 90, kind);
        let b = generate_historical_series(5.48, 1.5, 3.2, 90, kind);
        assert_eq!(a.len(), 90);
        assert_ne!(values(&a), values(&b), "{kind}");
    }
}

#[test]
fn test_rate_noise_is_half_and_four_tenths_of_a_point() {
    let (base, lev, borrow) = (5.48, 3.0, 2.99);
    let net = base * lev - borrow * (lev - 1.0);
    // ±0.5 pp on yield, ±0.4 pp on borrow.
    let band = 0.5 * lev + 0.4 * (lev - 1.0);

    let points = seeded(17, base, lev, borrow, MAX_HISTORY_DAYS, StrategyKind::LeverageYield);
    let (lo, hi) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.apy), hi.max(p.apy)));

    assert!(lo >= net - band - 1e-9 && hi <= net + band + 1e-9, "[{lo}, {hi}]");
    assert!(hi - lo > 3.0, "spread too narrow: [{lo}, {hi}]");
}

#[test]
fn test_treasury_noise_only_moves_yield() {
    let points = seeded(23, 4.32, 1.0, 2.99, 2000, StrategyKind::TreasuryPlus);
    let (lo, hi) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.apy), hi.max(p.apy)));

    assert!(lo >= 4.32 - 0.5 - 1e-9 && hi <= 4.32 + 0.5 + 1e-9, "[{lo}, {hi}]");
    assert!(hi - lo > 0.9, "[{lo}, {hi}]");
}

#[test]
fn test_huge_day_count_is_clamped() {
    for kind in StrategyKind::ALL {
        let points = seeded(8, 5.48, 1.5, 3.2, u32::MAX, kind);
        assert_eq!(points.len(), MAX_HISTORY_DAYS as usize, "{kind}");
        for pair in points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
        }
        assert_eq!(points.last().unwrap().date, end_date().pred_opt().unwrap());
        assert!(points.iter().all(|p| p.value.is_finite()));
    }
}
