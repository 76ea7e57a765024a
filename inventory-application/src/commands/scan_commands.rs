use tracing::debug;

use inventory_domain::{validate_scan, RowPayload, ScanOutcome, ScanRequest, ValidationError};

use crate::commands::write_back_commands;
use crate::queries::status_queries;
use crate::{AppError, AppState};

pub async fn process_scan(state: &AppState, request: ScanRequest) -> Result<ScanOutcome, AppError> {
    state.metrics.record_scan_request();

    match validate_scan(&state.barcode_index, &request.barcode, &request.name) {
        Ok(row) => {
            let payload = RowPayload::new(request.intent, &request.name, &request.team);
            let persisted = write_back_commands::write_back(state, row, &payload).await;
            if persisted {
                state.metrics.record_scan_recorded();
            }
            Ok(ScanOutcome::Recorded {
                row,
                payload,
                persisted,
            })
        }
        Err(error) => {
            state.metrics.record_rejection(error);
            debug!(reason = error.kind(), barcode = %request.barcode, "scan rejected");

            let mut form = request;
            match error {
                ValidationError::InvalidBarcode => form.barcode.clear(),
                ValidationError::InvalidName => form.name.clear(),
            }
            let status = status_queries::resolve_status(state, &form.barcode).await?;
            Ok(ScanOutcome::Rejected {
                error,
                form,
                status,
            })
        }
    }
}
