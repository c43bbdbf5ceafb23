pub mod csv_input;
pub mod discover;
pub mod json_summary;
pub mod report_writer;
pub mod summary;
