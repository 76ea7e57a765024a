// Status intent value object

use serde::{Deserialize, Serialize};

pub const AVAILABLE: &str = "Available";
pub const UNAVAILABLE: &str = "Unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusIntent {
    CheckIn,
    #[default]
    CheckOut,
}

impl StatusIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIntent::CheckIn => "checkIn",
            StatusIntent::CheckOut => "checkOut",
        }
    }

    pub fn availability(&self) -> &'static str {
        match self {
            StatusIntent::CheckIn => AVAILABLE,
            StatusIntent::CheckOut => UNAVAILABLE,
        }
    }
}

// Only an exact "checkIn" returns an item; anything else marks it taken.
impl From<&str> for StatusIntent {
    fn from(s: &str) -> Self {
        if s == "checkIn" {
            StatusIntent::CheckIn
        } else {
            StatusIntent::CheckOut
        }
    }
}

impl From<String> for StatusIntent {
    fn from(s: String) -> Self {
        StatusIntent::from(s.as_str())
    }
}

impl From<StatusIntent> for String {
    fn from(intent: StatusIntent) -> Self {
        intent.as_str().to_string()
    }
}
