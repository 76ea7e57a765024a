use tracing::error;

use inventory_domain::{ItemStatus, SheetRange};

use crate::{AppError, AppState};

pub async fn resolve_status(
    state: &AppState,
    barcode: &str,
) -> Result<Option<ItemStatus>, AppError> {
    let Some(row) = state.barcode_index.resolve(barcode) else {
        return Ok(None);
    };
    let range = SheetRange::cell(&state.config.status_column, row);
    state.metrics.record_status_read();
    let grid = state
        .sheets
        .read_range(&state.config.spreadsheet_id, range.as_str())
        .await
        .map_err(|err| {
            error!("failed to read status cell {}: {:#}", range, err);
            state.metrics.record_status_read_error();
            AppError::Upstream(err)
        })?;
    let raw = grid
        .first()
        .and_then(|row| row.first())
        .map(String::as_str)
        .unwrap_or("");
    Ok(Some(ItemStatus::from_availability(raw)))
}
