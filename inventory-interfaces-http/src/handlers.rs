pub mod ops_handlers;
pub mod scan_handlers;
pub mod ws_handlers;

pub use ops_handlers::*;
pub use scan_handlers::*;
pub use ws_handlers::*;
