//! Report generation

pub mod generator;

pub use generator::{format_message, generate_json_report, generate_summary};
