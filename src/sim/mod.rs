pub mod assumptions;
pub mod history;
pub mod metrics;
pub mod yield_calc;

pub use assumptions::Assumptions;
pub use history::{MAX_HISTORY_DAYS, generate_historical_series, generate_historical_series_with};
pub use metrics::SeriesMetrics;
pub use yield_calc::{calculate_yield, calculate_yield_with};
