pub mod context;
pub mod credentials;
pub mod lifecycle;

pub use lifecycle::run_standalone;
