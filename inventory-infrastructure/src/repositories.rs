pub mod credential_files;

pub use credential_files::*;
