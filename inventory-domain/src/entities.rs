// Domain entities
pub mod item_status;
pub mod row_payload;
pub mod runtime_config;
pub mod scan_outcome;
pub mod scan_request;

pub use item_status::*;
pub use row_payload::*;
pub use runtime_config::*;
pub use scan_outcome::*;
pub use scan_request::*;
