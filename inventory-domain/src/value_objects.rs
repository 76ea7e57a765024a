// Domain value objects
pub mod identifiers;
pub mod sheet_range;
pub mod status_intent;

pub use identifiers::*;
pub use sheet_range::*;
pub use status_intent::*;
