use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::Catalog;
use crate::market::refresh::MarketSnapshot;
use crate::sim::Assumptions;

#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub catalog: Catalog,
    pub assumptions: Assumptions,
    /// Latest rates and TVL, replaced wholesale by the refresher.
    pub snapshot: watch::Receiver<Arc<MarketSnapshot>>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        assumptions: Assumptions,
        snapshot: watch::Receiver<Arc<MarketSnapshot>>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                assumptions,
                snapshot,
            }),
        }
    }

    /// Current snapshot. Cheap: clones the `Arc`, not the data.
    pub fn snapshot(&self) -> Arc<MarketSnapshot> {
        self.inner.snapshot.borrow().clone()
    }
}
