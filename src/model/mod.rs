pub mod asset;
pub mod chain;
pub mod rates;
pub mod series;
pub mod strategy;
pub mod tvl;
pub mod vault;

pub use asset::{AssetCategory, AssetYield};
pub use chain::Chain;
pub use rates::{MarketRates, VenueRates};
pub use series::{HistoricalDataPoint, LeveragedYieldResult};
pub use strategy::{BorrowVenue, StrategyConfig, StrategyKind};
pub use tvl::TotalTvl;
pub use vault::{RiskTier, Vault};
