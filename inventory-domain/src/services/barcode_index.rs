// Barcode index
// Maps scanned barcodes to the sheet row that describes the item

use std::collections::HashMap;

use crate::RowId;

pub const SECTION_HEADERS: [&str; 10] = [
    "Barcodes:",
    "Expansion Hubs:",
    "Control Hubs:",
    "Robot Batteries:",
    "Chargers:",
    "Controllers:",
    "Phones:",
    "Drills:",
    "Motors:",
    "Servos:",
];

pub fn is_section_header(value: &str) -> bool {
    SECTION_HEADERS.iter().any(|header| *header == value)
}

#[derive(Debug, Clone, Default)]
pub struct BarcodeIndex {
    rows: HashMap<String, String>,
}

impl BarcodeIndex {
    pub fn from_column(column: &[Vec<String>]) -> Self {
        let mut rows = HashMap::new();
        for (index, row) in column.iter().enumerate() {
            let barcode = row.first().map(String::as_str).unwrap_or("");
            if barcode.is_empty() || is_section_header(barcode) {
                continue;
            }
            rows.insert(barcode.to_string(), (index + 1).to_string());
        }
        Self { rows }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rows: pairs
                .into_iter()
                .map(|(barcode, row)| (barcode.into(), row.into()))
                .collect(),
        }
    }

    pub fn row_identifier(&self, barcode: &str) -> Option<&str> {
        self.rows.get(barcode).map(String::as_str)
    }

    pub fn resolve(&self, barcode: &str) -> Option<RowId> {
        self.row_identifier(barcode).and_then(RowId::parse)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
