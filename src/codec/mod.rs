//! File formats: CSV in and out, JavaScript data file out.

pub mod csv_file;
pub mod javascript;

pub use csv_file::{ExportOutcome, export_csv, load_csv, read_csv, read_records, write_records};
pub use javascript::{JavascriptFile, generate_javascript, record_to_js_object, render_javascript};
