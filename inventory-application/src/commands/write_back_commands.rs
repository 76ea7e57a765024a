use tracing::{error, info};

use inventory_domain::{RowId, RowPayload, SheetRange};

use crate::AppState;

pub async fn write_back(state: &AppState, row: RowId, payload: &RowPayload) -> bool {
    let range = SheetRange::cell(&state.config.status_column, row);
    let result = state
        .sheets
        .update_range(
            &state.config.spreadsheet_id,
            range.as_str(),
            payload.clone().into_rows(),
        )
        .await;
    match result {
        Ok(()) => {
            info!(
                range = %range,
                availability = %payload.availability,
                name = %payload.name,
                team = %payload.team,
                "row updated"
            );
            true
        }
        Err(err) => {
            error!("unable to update {} on sheet: {:#}", range, err);
            state.metrics.record_write_error();
            false
        }
    }
}
