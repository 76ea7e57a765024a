// A1-notation ranges used against the backing sheet

use std::fmt;

use crate::RowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRange(String);

impl SheetRange {
    pub fn column(column: &str) -> Self {
        Self(format!("{column}:{column}"))
    }

    // Updates written here spill to the right, one column per value.
    pub fn cell(column: &str, row: RowId) -> Self {
        Self(format!("{column}{row}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
