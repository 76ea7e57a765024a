// Scan validator

use thiserror::Error;

use crate::{BarcodeIndex, RowId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid barcode: please scan again")]
    InvalidBarcode,
    #[error("invalid name: please re-enter name")]
    InvalidName,
}

impl ValidationError {
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidBarcode => "invalid_barcode",
            ValidationError::InvalidName => "invalid_name",
        }
    }
}

pub fn validate_scan(
    index: &BarcodeIndex,
    barcode: &str,
    name: &str,
) -> Result<RowId, ValidationError> {
    let row = index
        .resolve(barcode)
        .ok_or(ValidationError::InvalidBarcode)?;
    if name.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    Ok(row)
}
