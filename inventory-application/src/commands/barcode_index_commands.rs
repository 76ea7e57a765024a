use tracing::{error, info, warn};

use inventory_domain::ports::SpreadsheetClient;
use inventory_domain::{BarcodeIndex, RuntimeConfig, SheetRange};

pub async fn build_barcode_index(
    sheets: &dyn SpreadsheetClient,
    config: &RuntimeConfig,
) -> BarcodeIndex {
    let range = SheetRange::column(&config.barcode_column);
    match sheets
        .read_range(&config.spreadsheet_id, range.as_str())
        .await
    {
        Ok(column) => {
            let index = BarcodeIndex::from_column(&column);
            info!(
                range = %range,
                rows = column.len(),
                barcodes = index.len(),
                "barcode index built"
            );
            index
        }
        Err(err) => {
            error!("failed to read barcode column {}: {:#}", range, err);
            warn!("token most likely expired; delete the token file and restart to re-authorize");
            BarcodeIndex::default()
        }
    }
}
