use std::sync::Arc;

use inventory_domain::ports::SpreadsheetClient;
use inventory_domain::{BarcodeIndex, RuntimeConfig};

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub sheets: Arc<dyn SpreadsheetClient>,
    pub barcode_index: Arc<BarcodeIndex>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        sheets: Arc<dyn SpreadsheetClient>,
        barcode_index: BarcodeIndex,
    ) -> Self {
        Self {
            config,
            sheets,
            barcode_index: Arc::new(barcode_index),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
