//! Directory report driver

pub mod driver;

// Re-export for convenience
pub use driver::{check_file, collect_icon_files, write_report, PaddingResult};
