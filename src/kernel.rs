//! Per-pixel Sobel gradient magnitude.
//!
//! The kernel is evaluated only on interior pixels, so no border clamping
//! is needed here; the caller owns the border policy.
use crate::image::ImageU8;

/// Compute the Sobel edge magnitude at interior pixel `(x, y)`.
///
/// Requires `1 <= x <= w-2` and `1 <= y <= h-2`. The horizontal and
/// vertical derivatives are accumulated in `i32` (each sum stays within
/// ±1020, their squared sum within ~2.1e6), then combined as
/// `round(sqrt(gx^2 + gy^2))` and clamped to 255.
#[inline]
pub fn sobel_magnitude(input: &ImageU8<'_>, x: usize, y: usize) -> u8 {
    debug_assert!(x >= 1 && x + 1 < input.w, "x must be interior");
    debug_assert!(y >= 1 && y + 1 < input.h, "y must be interior");

    let p = |xx: usize, yy: usize| i32::from(input.get(xx, yy));

    let gx = (p(x + 1, y - 1) + 2 * p(x + 1, y) + p(x + 1, y + 1))
        - (p(x - 1, y - 1) + 2 * p(x - 1, y) + p(x - 1, y + 1));
    let gy = (p(x - 1, y + 1) + 2 * p(x, y + 1) + p(x + 1, y + 1))
        - (p(x - 1, y - 1) + 2 * p(x, y - 1) + p(x + 1, y - 1));

    let magnitude = ((gx * gx + gy * gy) as f32).sqrt().round() as i32;
    magnitude.min(255) as u8
}
