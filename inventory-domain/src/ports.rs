// Port traits (interfaces)
// Define what the domain needs from infrastructure

pub mod spreadsheet;

pub use spreadsheet::*;
