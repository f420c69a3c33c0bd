//! Edge padding scans and corner sampling

use image::{Rgba, RgbaImage};

use crate::analyzer::pixel::is_blank;

/// One of the four extreme pixel positions of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Human-readable label used in the report
    pub fn label(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

/// Blank rows/columns counted inward from each edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgePadding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl EdgePadding {
    /// Literal sum of the four edge extents
    pub fn total(&self) -> u32 {
        self.top + self.bottom + self.left + self.right
    }
}

/// Analysis of a single decoded image
#[derive(Debug, Clone)]
pub struct PaddingAnalysis {
    pub width: u32,
    pub height: u32,
    pub padding: EdgePadding,
    pub has_white_corners: bool,
    /// Corner samples in fixed order: top-left, top-right, bottom-left,
    /// bottom-right
    pub corners: [(Corner, Rgba<u8>); 4],
}

fn row_has_content(img: &RgbaImage, y: u32) -> bool {
    (0..img.width()).any(|x| !is_blank(img.get_pixel(x, y)))
}

fn column_has_content(img: &RgbaImage, x: u32) -> bool {
    (0..img.height()).any(|y| !is_blank(img.get_pixel(x, y)))
}

/// Measure edge padding and corner colors for one decoded image.
///
/// Each edge is scanned independently from the outside in; the first
/// row/column containing a non-blank pixel ends that edge's scan. An image
/// with no content anywhere keeps every extent at 0 rather than reporting
/// the full dimension — downstream tooling reads the report that way, so
/// the behavior is kept as-is.
pub fn analyze_image(img: &RgbaImage) -> PaddingAnalysis {
    let (width, height) = img.dimensions();

    let mut padding = EdgePadding::default();

    for y in 0..height {
        if row_has_content(img, y) {
            padding.top = y;
            break;
        }
    }

    for y in (0..height).rev() {
        if row_has_content(img, y) {
            padding.bottom = height - y - 1;
            break;
        }
    }

    for x in 0..width {
        if column_has_content(img, x) {
            padding.left = x;
            break;
        }
    }

    for x in (0..width).rev() {
        if column_has_content(img, x) {
            padding.right = width - x - 1;
            break;
        }
    }

    let corners = [
        (Corner::TopLeft, *img.get_pixel(0, 0)),
        (Corner::TopRight, *img.get_pixel(width - 1, 0)),
        (Corner::BottomLeft, *img.get_pixel(0, height - 1)),
        (Corner::BottomRight, *img.get_pixel(width - 1, height - 1)),
    ];

    let has_white_corners = corners.iter().all(|(_, color)| is_blank(color));

    PaddingAnalysis {
        width,
        height,
        padding,
        has_white_corners,
        corners,
    }
}
