//! Pixel-level padding analysis

pub mod padding;
pub mod pixel;

// Re-export for convenience
pub use padding::{analyze_image, Corner, EdgePadding, PaddingAnalysis};
pub use pixel::is_blank;
