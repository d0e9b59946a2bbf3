use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::PositionArgs;
use crate::model::HistoricalDataPoint;
use crate::report;
use crate::sim::{SeriesMetrics, generate_historical_series_with};

use super::calculate::check_position;
use super::{Session, print_json};

/// Options for one `history` run.
pub struct HistoryConfig {
    pub position: PositionArgs,
    pub days: Option<u32>,
    pub seed: Option<u64>,
    pub csv: Option<PathBuf>,
    pub json: bool,
}

pub fn run(session: &Session, config: &HistoryConfig) -> Result<()> {
    check_position(&config.position)?;

    let assumptions = &session.config.assumptions;
    let days = config.days.unwrap_or(assumptions.default_days);
    let end = Utc::now().date_naive();
    let p = &config.position;

    let points = match config.seed {
        Some(seed) => generate_historical_series_with(
            &mut StdRng::seed_from_u64(seed),
            assumptions,
            p.base_yield,
            p.leverage,
            p.borrow_rate,
            days,
            p.kind,
            end,
        ),
        None => generate_historical_series_with(
            &mut rand::rng(),
            assumptions,
            p.base_yield,
            p.leverage,
            p.borrow_rate,
            days,
            p.kind,
            end,
        ),
    };
    let metrics = SeriesMetrics::from_series(assumptions.starting_value, &points);

    if let Some(ref path) = config.csv {
        write_csv(path, &points)?;
        tracing::info!(path = %path.display(), points = points.len(), "wrote series CSV");
    }

    if config.json {
        print_json(&serde_json::json!({ "points": points, "metrics": metrics }))
    } else {
        report::print_history(&points, &metrics);
        Ok(())
    }
}

/// Write `date,value,apy` rows with a header line.
pub fn write_csv(path: &Path, points: &[HistoricalDataPoint]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for point in points {
        writer
            .serialize(point)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}
