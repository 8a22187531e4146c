//! Pixel/grid conversions. One cell stride is `base_size + gap`; rendered
//! spans carry a gap between cells but not after the last one. All functions
//! are pure and clamp out-of-range input instead of rejecting it.

/// Grid cells covered by a pixel span, rounded up, never less than one cell.
pub fn pixels_to_grid_size(pixels: f32, base_size: f32, gap: f32) -> i32 {
    let units = (pixels / (base_size + gap)).ceil() as i32;
    units.max(1)
}

/// Like [`pixels_to_grid_size`], additionally clamped so the panel fits the
/// grid: with `x_position` the result keeps `x + size <= column_count`,
/// without it the size is capped at the full column count.
pub fn pixels_to_grid_size_clamped(
    pixels: f32,
    base_size: f32,
    gap: f32,
    column_count: i32,
    x_position: Option<i32>,
) -> i32 {
    let units = pixels_to_grid_size(pixels, base_size, gap);
    let limit = match x_position {
        Some(x) => column_count - x,
        None => column_count,
    };
    units.min(limit).max(1)
}

/// Grid coordinate for a pixel offset, rounded down, never negative.
pub fn pixels_to_grid_position(pixels: f32, base_size: f32, gap: f32) -> i32 {
    let coord = (pixels / (base_size + gap)).floor() as i32;
    coord.max(0)
}

/// Like [`pixels_to_grid_position`], additionally clamped so a panel of
/// `width` cells stays inside the grid (or, without a width, so the
/// coordinate names an existing column).
pub fn pixels_to_grid_position_clamped(
    pixels: f32,
    base_size: f32,
    gap: f32,
    column_count: i32,
    width: Option<i32>,
) -> i32 {
    let coord = pixels_to_grid_position(pixels, base_size, gap);
    let limit = match width {
        Some(w) => column_count - w,
        None => column_count - 1,
    };
    coord.min(limit).max(0)
}

/// Rendered pixel span of `units` cells: no gap after the last cell.
pub fn grid_to_pixels(units: i32, base_size: f32, gap: f32) -> f32 {
    units as f32 * base_size + (units - 1).max(0) as f32 * gap
}

/// Pixel offset of a grid coordinate.
pub fn grid_position_to_pixels(coord: i32, base_size: f32, gap: f32) -> f32 {
    (coord as f32 * (base_size + gap)).max(0.0)
}

/// Aligns a raw pixel offset to the nearest grid position at or before it.
/// Idempotent.
pub fn snap_to_grid(pixels: f32, base_size: f32, gap: f32) -> f32 {
    grid_position_to_pixels(pixels_to_grid_position(pixels, base_size, gap), base_size, gap)
}
