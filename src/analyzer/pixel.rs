//! Blank-pixel classification

use image::Rgba;

/// Channel value every color channel must exceed for a pixel to count as
/// white. Sits just below 255 so compression artifacts near pure white
/// still classify as blank.
pub const WHITE_THRESHOLD: u8 = 250;

/// Returns true if the pixel is fully transparent or near-white.
///
/// Transparency wins: a pixel with alpha 0 is blank no matter what its
/// color channels hold.
pub fn is_blank(pixel: &Rgba<u8>) -> bool {
    let Rgba([r, g, b, a]) = *pixel;
    a == 0 || (r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD)
}
