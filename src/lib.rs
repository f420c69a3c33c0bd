//! Iconcheck library

pub mod analyzer;
pub mod report;
pub mod utils;

// Re-export main types for easier use
pub use analyzer::{analyze_image, Corner, EdgePadding, PaddingAnalysis};
pub use report::{check_file, collect_icon_files, write_report, PaddingResult};
pub use utils::IconCheckError;
