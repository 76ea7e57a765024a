// Identifier value objects

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(NonZeroU32);

impl RowId {
    pub fn new(row: u32) -> Option<Self> {
        NonZeroU32::new(row).map(Self)
    }

    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<u32>().ok().and_then(Self::new)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
