// Pure domain services
pub mod barcode_index;
pub mod validator;

pub use barcode_index::*;
pub use validator::*;
