/// Generates a constant-intensity image.
pub fn constant_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates a vertical step: columns `0..split` are `low`, the rest `high`.
pub fn vertical_step_u8(width: usize, height: usize, split: usize, low: u8, high: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split <= width, "split column must lie inside the image");

    let mut img = vec![low; width * height];
    for y in 0..height {
        for x in split..width {
            img[y * width + x] = high;
        }
    }
    img
}

/// Generates a deterministic textured pattern with gradients everywhere.
pub fn textured_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = ((x * 31 + y * 17) % 251) as u8;
        }
    }
    img
}
