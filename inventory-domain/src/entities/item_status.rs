// Item status entity
// Human-readable view of the availability column

use std::fmt;

use serde::Serialize;

use crate::AVAILABLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemStatus {
    CheckedIn,
    CheckedOut,
}

impl ItemStatus {
    // Only the exact text "Available" counts as checked in.
    pub fn from_availability(raw: &str) -> Self {
        if raw == AVAILABLE {
            ItemStatus::CheckedIn
        } else {
            ItemStatus::CheckedOut
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::CheckedIn => "Checked In",
            ItemStatus::CheckedOut => "Checked Out",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
