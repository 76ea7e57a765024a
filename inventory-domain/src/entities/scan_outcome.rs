// Scan outcome entity
// Result of one pass through the validate/read/write pipeline

use crate::{ItemStatus, RowId, RowPayload, ScanRequest, ValidationError};

#[derive(Debug, Clone)]
pub enum ScanOutcome {
    Recorded {
        row: RowId,
        payload: RowPayload,
        persisted: bool,
    },
    Rejected {
        error: ValidationError,
        form: ScanRequest,
        status: Option<ItemStatus>,
    },
}
