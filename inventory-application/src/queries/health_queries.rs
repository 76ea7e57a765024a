use inventory_domain::{RowId, SheetRange};

use crate::{AppError, AppState};

pub async fn check_ready(state: &AppState) -> Result<(), AppError> {
    if state.barcode_index.is_empty() {
        return Err(AppError::NotReady("barcode index is empty".to_string()));
    }
    let first_row = RowId::new(1).ok_or_else(|| AppError::NotReady("no probe row".to_string()))?;
    let probe = SheetRange::cell(&state.config.barcode_column, first_row);
    state
        .sheets
        .read_range(&state.config.spreadsheet_id, probe.as_str())
        .await
        .map_err(AppError::Upstream)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::InMemorySpreadsheet;
    use inventory_domain::{BarcodeIndex, RuntimeConfig};

    #[tokio::test]
    async fn empty_index_is_not_ready() {
        let state = AppState::new(
            RuntimeConfig::default(),
            Arc::new(InMemorySpreadsheet::new()),
            BarcodeIndex::default(),
        );
        assert!(matches!(check_ready(&state).await, Err(AppError::NotReady(_))));
    }

    #[tokio::test]
    async fn probes_first_barcode_cell() {
        let sheets = Arc::new(InMemorySpreadsheet::new());
        let state = AppState::new(
            RuntimeConfig::default(),
            sheets.clone(),
            BarcodeIndex::from_pairs([("BC100", "5")]),
        );
        check_ready(&state).await.expect("ready");
        assert_eq!(sheets.reads(), vec!["H1".to_string()]);
    }

    #[tokio::test]
    async fn unreachable_sheet_is_not_ready() {
        let state = AppState::new(
            RuntimeConfig::default(),
            Arc::new(InMemorySpreadsheet::new().failing_reads()),
            BarcodeIndex::from_pairs([("BC100", "5")]),
        );
        assert!(matches!(check_ready(&state).await, Err(AppError::Upstream(_))));
    }
}
