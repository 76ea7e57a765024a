pub mod barcode_index_commands;
pub mod scan_commands;
pub mod write_back_commands;
