use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::HistoricalDataPoint;

const PERIODS_PER_YEAR: f64 = 365.0;

/// Summary statistics of a simulated daily path.
/// Return, drawdown and Sharpe follow the usual daily-sample conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeriesMetrics {
    pub start_value: f64,
    pub end_value: f64,
    pub total_return_pct: f64,
    pub annualized_pct: f64,
    pub max_drawdown_pct: f64,
    pub sharpe: f64,
    pub days: usize,
}

impl SeriesMetrics {
    pub fn from_series(start_value: f64, series: &[HistoricalDataPoint]) -> Self {
        let values: Vec<f64> = std::iter::once(start_value)
            .chain(series.iter().map(|p| p.value))
            .collect();
        let end_value = values.last().copied().unwrap_or(start_value);

        let total_return = if start_value > 0.0 {
            end_value / start_value - 1.0
        } else {
            0.0
        };

        let days = series.len();
        let annualized = if days > 0 && total_return > -1.0 {
            (1.0 + total_return).powf(PERIODS_PER_YEAR / days as f64) - 1.0
        } else {
            0.0
        };

        SeriesMetrics {
            start_value,
            end_value,
            total_return_pct: total_return * 100.0,
            annualized_pct: annualized * 100.0,
            max_drawdown_pct: max_drawdown(&values) * 100.0,
            sharpe: sharpe(&values),
            days,
        }
    }
}

fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;
    for &v in values {
        if v > peak {
            peak = v;
        }
        if peak > 0.0 {
            worst = worst.max((peak - v) / peak);
        }
    }
    worst
}

fn sharpe(values: &[f64]) -> f64 {
    let returns: Vec<f64> = values
        .windows(2)
        .map(|w| if w[0] > 0.0 { (w[1] - w[0]) / w[0] } else { 0.0 })
        .collect();

    if returns.len() < 2 {
        return 0.0;
    }

    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let var = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (returns.len() - 1) as f64;
    let std = var.sqrt();

    if std > 0.0 {
        mean / std * PERIODS_PER_YEAR.sqrt()
    } else {
        0.0
    }
}
