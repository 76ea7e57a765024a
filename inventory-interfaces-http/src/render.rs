pub mod scan_form;

pub use scan_form::*;
