pub mod oauth_service;
pub mod sheets_service;

pub use oauth_service::*;
pub use sheets_service::*;
